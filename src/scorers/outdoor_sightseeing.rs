use crate::models::{ActivityScore, DailyMarine, DailyWeather, DataSource};
use crate::scorers::{average_temperature, ActivityScorer};

/// Scores walking and outdoor exploration. Mild temperatures, dry skies
/// and a mix of sun and cloud score best.
#[derive(Debug)]
pub struct OutdoorSightseeingScorer;

impl ActivityScorer for OutdoorSightseeingScorer {
    fn id(&self) -> &str {
        "outdoor-sightseeing"
    }

    fn display_name(&self) -> &str {
        "Outdoor Sightseeing"
    }

    fn required_data_sources(&self) -> &[DataSource] {
        &[DataSource::Weather]
    }

    fn score(&self, weather: &DailyWeather, _marine: Option<&DailyMarine>) -> ActivityScore {
        let avg_temp = average_temperature(weather);
        let score = score_points(weather, avg_temp);
        ActivityScore::new(score, reason(score, weather))
    }
}

fn score_points(weather: &DailyWeather, avg_temp: f64) -> u32 {
    let mut score = 0;

    // Temperature (mild is best)
    if (15.0..=25.0).contains(&avg_temp) {
        score += 35;
    } else if (5.0..=30.0).contains(&avg_temp) {
        score += 25;
    } else {
        score += 10;
    }

    // Precipitation (dry is best)
    if weather.precipitation < 1.0 {
        score += 25;
    } else if weather.precipitation < 5.0 {
        score += 15;
    } else {
        score += 5;
    }

    // Cloud cover (mix of sun and clouds ideal)
    if (20.0..=60.0).contains(&weather.cloud_cover) {
        score += 20;
    } else if weather.cloud_cover < 80.0 {
        score += 15;
    } else {
        score += 5;
    }

    // Wind (light wind pleasant)
    if weather.wind_speed < 15.0 {
        score += 15;
    } else if weather.wind_speed < 25.0 {
        score += 10;
    }

    // UV index (moderate sun exposure)
    if weather.uv_index <= 6.0 {
        score += 5;
    } else {
        score += 3;
    }

    score.min(100)
}

fn reason(score: u32, weather: &DailyWeather) -> String {
    if score >= 80 {
        "Perfect weather for walking and outdoor exploration".to_string()
    } else if score >= 65 {
        "Good conditions for outdoor sightseeing".to_string()
    } else if score >= 50 {
        "Decent weather for outdoor activities".to_string()
    } else if weather.precipitation > 5.0 {
        "Rain may limit outdoor activities".to_string()
    } else {
        "Uncomfortable conditions for extended time outdoors".to_string()
    }
}
