//! Day-level formatting helpers shared across a day's rankings.
//!
//! These belong to the orchestrator, not the scorers: the temperature
//! range and weather description are computed once per forecast day and
//! reused for every activity ranked that day.

use crate::models::DailyWeather;

/// Short comma-joined phrase describing the day, e.g.
/// "light rain, partly cloudy, windy". Always includes a sky condition,
/// so the result is never empty.
pub fn weather_description(weather: &DailyWeather) -> String {
    let mut conditions = Vec::new();

    if weather.precipitation > 10.0 {
        conditions.push("heavy rain");
    } else if weather.precipitation > 2.0 {
        conditions.push("light rain");
    }

    if weather.cloud_cover > 80.0 {
        conditions.push("overcast");
    } else if weather.cloud_cover > 50.0 {
        conditions.push("partly cloudy");
    } else {
        conditions.push("clear");
    }

    if weather.wind_speed > 25.0 {
        conditions.push("windy");
    }

    conditions.join(", ")
}

/// Formats the day's temperature span, e.g. "-8°C - 2°C".
pub fn temperature_range(weather: &DailyWeather) -> String {
    format!("{}°C - {}°C", weather.temperature_min, weather.temperature_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorers::test_support::weather;

    #[test]
    fn test_description_clear_day() {
        let day = weather(20.0, 10.0, 0.0, 20.0, 5.0, 4.0);
        assert_eq!(weather_description(&day), "clear");
    }

    #[test]
    fn test_description_heavy_rain_overcast_windy() {
        let day = weather(12.0, 8.0, 15.0, 90.0, 30.0, 1.0);
        assert_eq!(weather_description(&day), "heavy rain, overcast, windy");
    }

    #[test]
    fn test_description_light_rain_partly_cloudy() {
        let day = weather(15.0, 10.0, 4.0, 60.0, 10.0, 3.0);
        assert_eq!(weather_description(&day), "light rain, partly cloudy");
    }

    #[test]
    fn test_temperature_range_formatting() {
        let day = weather(2.0, -8.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(temperature_range(&day), "-8°C - 2°C");
    }

    #[test]
    fn test_temperature_range_fractional() {
        let day = weather(21.5, 13.2, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(temperature_range(&day), "13.2°C - 21.5°C");
    }
}
