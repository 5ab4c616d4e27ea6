use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::fetch_error::FetchError;
use crate::models::MarineSample;

/// Hourly marine parameters requested from the marine endpoint.
const HOURLY_PARAMETERS: &[&str] = &[
    "wave_height",
    "wave_direction",
    "wave_period",
    "wind_wave_height",
    "wind_wave_period",
    "swell_wave_height",
    "swell_wave_direction",
    "swell_wave_period",
];

const FORECAST_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
struct MarineApiResponse {
    hourly: HourlyColumns,
}

// Columnar like the weather response, but values are nullable: the
// provider reports null for hours it has no data for. Missing values are
// preserved as None and handled by the daily aggregator, not treated as
// errors here.
#[derive(Debug, Deserialize)]
struct HourlyColumns {
    time: Vec<String>,
    #[serde(default)]
    wave_height: Vec<Option<f64>>,
    #[serde(default)]
    wave_direction: Vec<Option<f64>>,
    #[serde(default)]
    wave_period: Vec<Option<f64>>,
    #[serde(default)]
    wind_wave_height: Vec<Option<f64>>,
    #[serde(default)]
    wind_wave_period: Vec<Option<f64>>,
    #[serde(default)]
    swell_wave_height: Vec<Option<f64>>,
    #[serde(default)]
    swell_wave_direction: Vec<Option<f64>>,
    #[serde(default)]
    swell_wave_period: Vec<Option<f64>>,
}

/// Client for the marine forecast endpoint.
#[derive(Clone)]
pub struct MarineFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl MarineFetcher {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches raw hourly marine samples for a coordinate. Callers treat
    /// this data as degradable, so a short or gappy column degrades to
    /// missing values rather than failing the fetch.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn fetch_marine_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<MarineSample>, FetchError> {
        let url = format!("{}/marine", self.base_url);
        debug!("Requesting marine forecast from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_PARAMETERS.join(",")),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: MarineApiResponse = response.json().await?;
        let samples = zip_hourly_columns(body.hourly)?;
        debug!("Fetched {} hourly marine samples", samples.len());

        Ok(samples)
    }
}

fn zip_hourly_columns(hourly: HourlyColumns) -> Result<Vec<MarineSample>, FetchError> {
    let value = |values: &[Option<f64>], index: usize| values.get(index).copied().flatten();

    hourly
        .time
        .iter()
        .enumerate()
        .map(|(i, time)| {
            // The provider formats hourly timestamps without seconds
            let timestamp = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
                .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"))
                .map_err(|e| FetchError::DateTimeError(format!("'{}': {}", time, e)))?;

            Ok(MarineSample {
                timestamp,
                wave_height: value(&hourly.wave_height, i),
                wave_direction: value(&hourly.wave_direction, i),
                wave_period: value(&hourly.wave_period, i),
                wind_wave_height: value(&hourly.wind_wave_height, i),
                wind_wave_period: value(&hourly.wind_wave_period, i),
                swell_wave_height: value(&hourly.swell_wave_height, i),
                swell_wave_direction: value(&hourly.swell_wave_direction, i),
                swell_wave_period: value(&hourly.swell_wave_period, i),
            })
        })
        .collect::<Result<Vec<_>, FetchError>>()
        .inspect(|samples| {
            let missing = samples.iter().filter(|s| s.wave_height.is_none()).count();
            if missing > 0 {
                warn!("{} of {} marine samples have no wave height", missing, samples.len());
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_hourly_columns_preserves_nulls() {
        let hourly = HourlyColumns {
            time: vec!["2025-03-01T00:00".to_string(), "2025-03-01T01:00".to_string()],
            wave_height: vec![Some(1.2), None],
            wave_direction: vec![Some(180.0), Some(185.0)],
            wave_period: vec![Some(8.0), Some(8.5)],
            wind_wave_height: vec![None, None],
            wind_wave_period: vec![],
            swell_wave_height: vec![Some(0.8), Some(0.9)],
            swell_wave_direction: vec![Some(200.0), Some(201.0)],
            swell_wave_period: vec![Some(11.0), Some(11.5)],
        };

        let samples = zip_hourly_columns(hourly).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].wave_height, Some(1.2));
        assert_eq!(samples[1].wave_height, None);
        // a column missing entirely degrades to None per sample
        assert_eq!(samples[0].wind_wave_period, None);
    }

    #[test]
    fn test_zip_hourly_columns_bad_timestamp() {
        let hourly = HourlyColumns {
            time: vec!["yesterday-ish".to_string()],
            wave_height: vec![Some(1.0)],
            wave_direction: vec![],
            wave_period: vec![],
            wind_wave_height: vec![],
            wind_wave_period: vec![],
            swell_wave_height: vec![],
            swell_wave_direction: vec![],
            swell_wave_period: vec![],
        };

        assert!(matches!(
            zip_hourly_columns(hourly),
            Err(FetchError::DateTimeError(_))
        ));
    }
}
