use crate::models::{ActivityScore, DailyMarine, DailyWeather, DataSource};
use crate::scorers::{average_temperature, ActivityScorer};

/// Scores skiing from weather alone. Cold averages near freezing score
/// best; the tables assume nearby resorts sit at altitude, so valley
/// temperatures a few degrees above freezing are still workable.
#[derive(Debug)]
pub struct SkiingScorer;

impl ActivityScorer for SkiingScorer {
    fn id(&self) -> &str {
        "skiing"
    }

    fn display_name(&self) -> &str {
        "Skiing"
    }

    fn required_data_sources(&self) -> &[DataSource] {
        &[DataSource::Weather]
    }

    fn score(&self, weather: &DailyWeather, _marine: Option<&DailyMarine>) -> ActivityScore {
        let avg_temp = average_temperature(weather);

        // Tropical or desert locations have no snow to ski on at any altitude.
        if avg_temp > 20.0 || weather.temperature_min > 15.0 {
            return ActivityScore::new(
                0,
                "Location too warm for skiing - no snow conditions available",
            );
        }

        let score = score_points(weather, avg_temp);
        ActivityScore::new(score, reason(score, avg_temp))
    }
}

fn score_points(weather: &DailyWeather, avg_temp: f64) -> u32 {
    let mut score = 0;

    // Temperature (cold is good for skiing)
    if (-5.0..=5.0).contains(&avg_temp) {
        score += 40;
    } else if (-15.0..=10.0).contains(&avg_temp) {
        score += 25;
    } else {
        score += 5;
    }

    // Precipitation (some snow is good, too much rain is bad)
    if weather.precipitation < 2.0 {
        score += 20;
    } else if weather.precipitation < 10.0 {
        score += 10;
    }

    // Cloud cover (some clouds ok for skiing)
    if weather.cloud_cover < 70.0 {
        score += 15;
    } else {
        score += 10;
    }

    // Wind (moderate wind ok)
    if weather.wind_speed < 20.0 {
        score += 15;
    } else if weather.wind_speed < 30.0 {
        score += 10;
    }

    // UV index (higher at altitude, some protection needed)
    if weather.uv_index <= 7.0 {
        score += 10;
    } else {
        score += 5;
    }

    score.min(100)
}

// Reason text is banded on the computed score so the narrative can never
// contradict the numeric suitability. Only the lowest band inspects the
// inputs, to name the limiting factor.
fn reason(score: u32, avg_temp: f64) -> String {
    if score >= 80 {
        "Excellent skiing conditions with reliable snow expected".to_string()
    } else if score >= 65 {
        "Good skiing conditions, though the weather is not ideal".to_string()
    } else if score >= 50 {
        "Fair skiing conditions at nearby mountain resorts".to_string()
    } else if avg_temp > 5.0 {
        "Too warm - snow may be slushy or melting".to_string()
    } else {
        "Poor skiing conditions with difficult weather expected".to_string()
    }
}
