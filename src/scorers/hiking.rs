use crate::models::{ActivityScore, DailyMarine, DailyWeather, DataSource};
use crate::scorers::{average_temperature, ActivityScorer};

/// Scores hiking from weather alone. Cooler than sightseeing weather is
/// fine on a trail; rain matters more than anything else. Not part of the
/// default activity set but available via configuration.
#[derive(Debug)]
pub struct HikingScorer;

impl ActivityScorer for HikingScorer {
    fn id(&self) -> &str {
        "hiking"
    }

    fn display_name(&self) -> &str {
        "Hiking"
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
    let mut score = 0;

    // Temperature (mild to cool is ideal on a trail)
    if (10.0..=22.0).contains(&avg_temp) {
        score += 35;
    } else if (5.0..=28.0).contains(&avg_temp) {
        score += 25;
    } else {
        score += 10;
    }

    // Precipitation (dry trails preferred)
    if weather.precipitation < 0.5 {
        score += 25;
    } else if weather.precipitation < 3.0 {
        score += 15;
    } else {
        score += 5;
    }

    // Cloud cover (partial clouds are pleasant)
    if (10.0..=70.0).contains(&weather.cloud_cover) {
        score += 20;
    } else if weather.cloud_cover < 90.0 {
        score += 15;
    } else {
        score += 5;
    }

    // Wind (light to moderate is fine)
    if weather.wind_speed < 20.0 {
        score += 15;
    } else if weather.wind_speed < 30.0 {
        score += 10;
    }

    // UV index (sun protection needed but some sun is nice)
    if weather.uv_index <= 7.0 {
        score += 5;
    } else {
        score += 2;
    }

    score.min(100)
}

fn reason(score: u32, weather: &DailyWeather, avg_temp: f64) -> String {
    if score >= 80 {
        "Perfect hiking weather with comfortable temperatures and dry trails".to_string()
    } else if score >= 65 {
        "Good conditions for hiking with proper preparation".to_string()
    } else if score >= 50 {
        "Fair hiking conditions - check the forecast before longer routes".to_string()
    } else if weather.precipitation > 5.0 {
        "Heavy rain makes trail conditions challenging".to_string()
    } else if avg_temp > 28.0 {
        "Hot weather - start early and carry plenty of water".to_string()
    } else {
        "Cold or unsettled weather - dress accordingly and check trail conditions".to_string()
    }
}
