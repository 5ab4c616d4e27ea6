use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One day of forecast weather for a coordinate, as returned by the
/// upstream provider. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub precipitation: f64,
    pub cloud_cover: f64,
    pub uv_index: f64,
}

/// A single hourly marine reading. The provider reports null for hours
/// or fields it has no data for, so every value is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineSample {
    pub timestamp: NaiveDateTime,
    pub wave_height: Option<f64>,
    pub wave_direction: Option<f64>,
    pub wave_period: Option<f64>,
    pub wind_wave_height: Option<f64>,
    pub wind_wave_period: Option<f64>,
    pub swell_wave_height: Option<f64>,
    pub swell_wave_direction: Option<f64>,
    pub swell_wave_period: Option<f64>,
}

/// Mean of the valid hourly values for each marine field within one day.
/// A field with no valid samples averages to 0.0 (see `aggregator`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineAverages {
    pub wave_height: f64,
    pub wave_direction: f64,
    pub wave_period: f64,
    pub wind_wave_height: f64,
    pub wind_wave_period: f64,
    pub swell_wave_height: f64,
    pub swell_wave_direction: f64,
    pub swell_wave_period: f64,
}

/// One calendar day of marine conditions. Only produced by
/// `aggregator::group_marine_by_day`, never constructed by callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMarine {
    pub date: NaiveDate,
    pub hourly: Vec<MarineSample>,
    pub averages: MarineAverages,
}

/// Upstream data categories a scorer may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Weather,
    Marine,
}

/// Coarse suitability label derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Suitability {
    /// Fixed global bands: >=85 excellent, >=65 good, >=45 fair, else poor.
    /// This is the only place suitability is derived from a score.
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            Suitability::Excellent
        } else if score >= 65 {
            Suitability::Good
        } else if score >= 45 {
            Suitability::Fair
        } else {
            Suitability::Poor
        }
    }
}

/// Result of scoring one activity for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityScore {
    pub score: u32,
    pub reason: String,
    pub suitability: Suitability,
}

impl ActivityScore {
    /// Clamps the score to [0, 100] and derives the suitability band.
    pub fn new(score: u32, reason: impl Into<String>) -> Self {
        let score = score.min(100);
        Self {
            score,
            reason: reason.into(),
            suitability: Suitability::from_score(score),
        }
    }
}

/// Day-level conditions summary attached to every ranking for that day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityConditions {
    pub temperature: String,
    pub weather: String,
    pub suitability: Suitability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRanking {
    pub activity: String,
    pub score: u32,
    pub reason: String,
    pub conditions: ActivityConditions,
}

/// One forecast day with its activity rankings, sorted descending by score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRanking {
    pub date: NaiveDate,
    pub weather: DailyWeather,
    pub rankings: Vec<ActivityRanking>,
}

/// The full ranked forecast for a location, chronological by day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationWeatherRanking {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub forecast: Vec<DailyRanking>,
}

/// One entry of the startup activity configuration list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityConfig {
    pub id: String,
    pub enabled: bool,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// A geocoding search hit from the upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_band_boundaries() {
        assert_eq!(Suitability::from_score(100), Suitability::Excellent);
        assert_eq!(Suitability::from_score(85), Suitability::Excellent);
        assert_eq!(Suitability::from_score(84), Suitability::Good);
        assert_eq!(Suitability::from_score(65), Suitability::Good);
        assert_eq!(Suitability::from_score(64), Suitability::Fair);
        assert_eq!(Suitability::from_score(45), Suitability::Fair);
        assert_eq!(Suitability::from_score(44), Suitability::Poor);
        assert_eq!(Suitability::from_score(0), Suitability::Poor);
    }

    #[test]
    fn test_activity_score_clamps_to_100() {
        let score = ActivityScore::new(130, "off the charts");
        assert_eq!(score.score, 100);
        assert_eq!(score.suitability, Suitability::Excellent);
    }

    #[test]
    fn test_activity_score_suitability_matches_score() {
        let score = ActivityScore::new(70, "decent");
        assert_eq!(score.suitability, Suitability::Good);
    }

    #[test]
    fn test_suitability_serializes_lowercase() {
        let json = serde_json::to_string(&Suitability::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
