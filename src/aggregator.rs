use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DailyMarine, MarineAverages, MarineSample};

/// Groups raw hourly marine samples into per-day summaries with field means.
///
/// Samples are bucketed by the calendar date of their timestamp (no timezone
/// conversion; the provider already reports local time for the coordinate).
/// Within a day, each field averages only its valid values: a null or NaN
/// reading drops out of both numerator and denominator, and a field with no
/// valid readings at all averages to 0.0 rather than NaN. This is a
/// deliberate best-effort policy - marine data is degradable and a partial
/// day is still worth scoring.
///
/// Output is ascending by date. Days with no samples are never fabricated.
pub fn group_marine_by_day(samples: &[MarineSample]) -> Vec<DailyMarine> {
    let mut groups: BTreeMap<NaiveDate, Vec<MarineSample>> = BTreeMap::new();

    for sample in samples {
        groups
            .entry(sample.timestamp.date())
            .or_default()
            .push(sample.clone());
    }

    debug!("Grouped {} marine samples into {} days", samples.len(), groups.len());

    groups
        .into_iter()
        .map(|(date, hourly)| {
            let averages = MarineAverages {
                wave_height: mean(hourly.iter().map(|s| s.wave_height)),
                wave_direction: mean(hourly.iter().map(|s| s.wave_direction)),
                wave_period: mean(hourly.iter().map(|s| s.wave_period)),
                wind_wave_height: mean(hourly.iter().map(|s| s.wind_wave_height)),
                wind_wave_period: mean(hourly.iter().map(|s| s.wind_wave_period)),
                swell_wave_height: mean(hourly.iter().map(|s| s.swell_wave_height)),
                swell_wave_direction: mean(hourly.iter().map(|s| s.swell_wave_direction)),
                swell_wave_period: mean(hourly.iter().map(|s| s.swell_wave_period)),
            };
            DailyMarine { date, hourly, averages }
        })
        .collect()
}

/// Mean of the valid (present, non-NaN) values; 0.0 when none are valid.
fn mean(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let valid: Vec<f64> = values.flatten().filter(|v| !v.is_nan()).collect();
    if valid.is_empty() {
        0.0
    } else {
        valid.iter().sum::<f64>() / valid.len() as f64
    }
}
