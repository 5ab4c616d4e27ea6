use std::sync::Arc;

use crate::models::{ActivityScore, DailyMarine, DailyWeather, DataSource};

pub mod hiking;
pub mod indoor_sightseeing;
pub mod outdoor_sightseeing;
pub mod skiing;
pub mod surfing;

pub use hiking::HikingScorer;
pub use indoor_sightseeing::IndoorSightseeingScorer;
pub use outdoor_sightseeing::OutdoorSightseeingScorer;
pub use skiing::SkiingScorer;
pub use surfing::SurfingScorer;

/// A stateless scorer for one activity. Implementations are pure functions
/// of the day's weather (and optionally marine) data; they hold no state
/// and are shared behind an `Arc` for the lifetime of the process.
///
/// A scorer that declares `DataSource::Marine` must handle `marine: None`
/// itself (the upstream marine fetch is degradable) by returning a zero
/// score, never by panicking.
pub trait ActivityScorer: Send + Sync + std::fmt::Debug {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn required_data_sources(&self) -> &[DataSource];
    fn score(&self, weather: &DailyWeather, marine: Option<&DailyMarine>) -> ActivityScore;
}

/// Maps a configured activity id to its scorer implementation.
/// Returns None for ids with no known implementation.
pub fn scorer_for_id(id: &str) -> Option<Arc<dyn ActivityScorer>> {
    match id {
        "skiing" => Some(Arc::new(SkiingScorer)),
        "surfing" => Some(Arc::new(SurfingScorer)),
        "outdoor-sightseeing" => Some(Arc::new(OutdoorSightseeingScorer)),
        "indoor-sightseeing" => Some(Arc::new(IndoorSightseeingScorer)),
        "hiking" => Some(Arc::new(HikingScorer)),
        _ => None,
    }
}

/// The primary climate signal every scorer starts from.
pub(crate) fn average_temperature(weather: &DailyWeather) -> f64 {
    (weather.temperature_max + weather.temperature_min) / 2.0
}
