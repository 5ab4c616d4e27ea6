use crate::models::{ActivityScore, DailyMarine, DailyWeather, DataSource};
use crate::scorers::{average_temperature, ActivityScorer};

/// Scores museums and other indoor attractions. Deliberately inverse to
/// the outdoor scorers: it starts from a base of 50 and climbs as the
/// weather worsens, since bad weather makes indoor plans more appealing.
#[derive(Debug)]
pub struct IndoorSightseeingScorer;

impl ActivityScorer for IndoorSightseeingScorer {
    fn id(&self) -> &str {
        "indoor-sightseeing"
    }

    fn display_name(&self) -> &str {
        "Indoor Sightseeing"
    }

    fn required_data_sources(&self) -> &[DataSource] {
        &[DataSource::Weather]
    }

    fn score(&self, weather: &DailyWeather, _marine: Option<&DailyMarine>) -> ActivityScore {
        let avg_temp = average_temperature(weather);
        let score = score_points(weather, avg_temp);
        ActivityScore::new(score, reason(score, weather, avg_temp))
    }
}

fn score_points(weather: &DailyWeather, avg_temp: f64) -> u32 {
    // Base score since weather matters less indoors
    let mut score = 50;

    if weather.precipitation > 10.0 {
        score += 25;
    } else if weather.precipitation > 5.0 {
        score += 15;
    } else {
        score += 10;
    }

    if weather.cloud_cover > 80.0 {
        score += 10;
    } else {
        score += 5;
    }

    if avg_temp < 5.0 || avg_temp > 30.0 {
        score += 15;
    } else {
        score += 10;
    }

    score.min(100)
}

fn reason(score: u32, weather: &DailyWeather, avg_temp: f64) -> String {
    if score >= 90 {
        "Ideal day for museums and indoor attractions".to_string()
    } else if score >= 80 {
        if weather.precipitation > 10.0 {
            "Rainy weather - perfect for museums and indoor attractions".to_string()
        } else if avg_temp < 5.0 || avg_temp > 30.0 {
            "Extreme temperatures make indoor activities appealing".to_string()
        } else {
            "A solid day for indoor attractions".to_string()
        }
    } else {
        "Good weather for both indoor and outdoor activities".to_string()
    }
}
