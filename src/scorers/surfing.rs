use crate::models::{ActivityScore, DailyMarine, DailyWeather, DataSource};
use crate::scorers::{average_temperature, ActivityScorer};

/// Scores surfing from weather plus marine conditions. The only scorer
/// that declares a marine dependency: with no marine data (inland
/// coordinate, or the marine fetch failed) or a zero wave-height average,
/// the day is flatly unsurfable and scores 0 regardless of weather.
#[derive(Debug)]
pub struct SurfingScorer;

impl ActivityScorer for SurfingScorer {
    fn id(&self) -> &str {
        "surfing"
    }

    fn display_name(&self) -> &str {
        "Surfing"
    }

    fn required_data_sources(&self) -> &[DataSource] {
        &[DataSource::Weather, DataSource::Marine]
    }

    fn score(&self, weather: &DailyWeather, marine: Option<&DailyMarine>) -> ActivityScore {
        let marine = match marine {
            Some(m) if m.averages.wave_height > 0.0 => m,
            _ => {
                return ActivityScore::new(
                    0,
                    "No surfing conditions - location is not near suitable water with wave data",
                );
            }
        };

        let avg_temp = average_temperature(weather);
        let score = (weather_points(weather, avg_temp) + marine_points(marine)).min(100);

        ActivityScore::new(score, reason(score, avg_temp, marine))
    }
}

fn weather_points(weather: &DailyWeather, avg_temp: f64) -> u32 {
    let mut score = 0;

    // Temperature (warm is good)
    if (20.0..=30.0).contains(&avg_temp) {
        score += 30;
    } else if (15.0..=35.0).contains(&avg_temp) {
        score += 20;
    } else {
        score += 5;
    }

    // Wind (moderate wind builds waves, too strong blows them out)
    if (10.0..=25.0).contains(&weather.wind_speed) {
        score += 25;
    } else if (5.0..=35.0).contains(&weather.wind_speed) {
        score += 15;
    } else {
        score += 5;
    }

    // Precipitation (less rain is better)
    if weather.precipitation < 2.0 {
        score += 20;
    } else if weather.precipitation < 5.0 {
        score += 15;
    } else {
        score += 5;
    }

    // Cloud cover (some sun is nice)
    if weather.cloud_cover < 50.0 {
        score += 15;
    } else if weather.cloud_cover < 80.0 {
        score += 10;
    } else {
        score += 5;
    }

    // UV index (sun protection needed)
    if weather.uv_index <= 8.0 {
        score += 10;
    } else {
        score += 5;
    }

    score
}

fn marine_points(marine: &DailyMarine) -> u32 {
    let mut score = 0;
    let averages = &marine.averages;

    // Wave height (moderate waves are good for surfing)
    if (1.0..=3.0).contains(&averages.wave_height) {
        score += 20;
    } else if (0.5..=4.0).contains(&averages.wave_height) {
        score += 15;
    } else {
        score += 5;
    }

    // Wave period (longer periods generally better)
    if averages.wave_period >= 8.0 {
        score += 15;
    } else if averages.wave_period >= 6.0 {
        score += 10;
    } else {
        score += 5;
    }

    score
}

fn reason(score: u32, avg_temp: f64, marine: &DailyMarine) -> String {
    let wave_height = marine.averages.wave_height;

    if score >= 80 {
        format!("Excellent surfing conditions with {:.1}m waves", wave_height)
    } else if score >= 65 {
        format!(
            "Good waves ({:.1}m) though conditions are not perfect",
            wave_height
        )
    } else if score >= 50 {
        "Moderate conditions for surfing".to_string()
    } else if avg_temp < 15.0 {
        "Water temperature may be too cold for surfing".to_string()
    } else if wave_height < 0.5 {
        "Wave conditions too calm for good surfing".to_string()
    } else {
        "Poor surfing conditions expected".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarineAverages, Suitability};
    use crate::scorers::test_support::weather;
    use chrono::NaiveDate;

    fn marine_day(wave_height: f64, wave_period: f64) -> DailyMarine {
        DailyMarine {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            hourly: vec![],
            averages: MarineAverages {
                wave_height,
                wave_period,
                ..MarineAverages::default()
            },
        }
    }

    #[test]
    fn test_absent_marine_data_scores_zero() {
        // Great beach weather, but nothing to surf on
        let day = weather(30.0, 22.0, 0.0, 20.0, 15.0, 6.0);
        let result = SurfingScorer.score(&day, None);

        assert_eq!(result.score, 0);
        assert_eq!(result.suitability, Suitability::Poor);
    }

    #[test]
    fn test_zero_wave_height_scores_zero() {
        let day = weather(30.0, 22.0, 0.0, 20.0, 15.0, 6.0);
        let marine = marine_day(0.0, 9.0);
        let result = SurfingScorer.score(&day, Some(&marine));

        assert_eq!(result.score, 0);
        assert_eq!(result.suitability, Suitability::Poor);
    }

    #[test]
    fn test_warm_day_with_good_waves_scores_excellent() {
        // avg 26, moderate wind, dry, some sun, 2m waves with long period
        let day = weather(30.0, 22.0, 0.5, 30.0, 15.0, 6.0);
        let marine = marine_day(2.0, 9.0);
        let result = SurfingScorer.score(&day, Some(&marine));

        assert!(result.score >= 85, "expected >= 85, got {}", result.score);
        assert_eq!(result.suitability, Suitability::Excellent);
        assert!(result.reason.contains("2.0m"));
    }

    #[test]
    fn test_cold_water_reason_in_low_band() {
        // avg 5, calm wind, short choppy waves
        let day = weather(8.0, 2.0, 8.0, 90.0, 2.0, 1.0);
        let marine = marine_day(0.3, 3.0);
        let result = SurfingScorer.score(&day, Some(&marine));

        assert!(result.score < 50);
        assert!(result.reason.contains("cold"));
    }

    #[test]
    fn test_score_clamped_to_100() {
        let day = weather(28.0, 24.0, 0.0, 10.0, 18.0, 5.0);
        let marine = marine_day(2.5, 12.0);
        let result = SurfingScorer.score(&day, Some(&marine));

        assert!(result.score <= 100);
    }
}
