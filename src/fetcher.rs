use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::fetch_error::FetchError;
use crate::models::{DailyWeather, GeocodingResult};

/// Daily weather parameters requested from the forecast endpoint.
const DAILY_PARAMETERS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "relative_humidity_2m_mean",
    "wind_speed_10m_max",
    "wind_direction_10m_dominant",
    "precipitation_sum",
    "cloud_cover_mean",
    "uv_index_max",
];

const FORECAST_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    daily: DailyColumns,
}

// The provider returns columnar arrays, one per parameter, indexed by day.
#[derive(Debug, Deserialize)]
struct DailyColumns {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    relative_humidity_2m_mean: Vec<f64>,
    wind_speed_10m_max: Vec<f64>,
    wind_direction_10m_dominant: Vec<f64>,
    precipitation_sum: Vec<f64>,
    cloud_cover_mean: Vec<f64>,
    uv_index_max: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct GeocodingApiResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

/// Client for the weather forecast and geocoding search endpoints.
#[derive(Clone)]
pub struct ForecastFetcher {
    client: reqwest::Client,
    base_url: String,
    geocoding_url: String,
}

impl ForecastFetcher {
    pub fn new(base_url: String, geocoding_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            geocoding_url,
        }
    }

    /// Fetches the daily forecast for a coordinate. The horizon is set by
    /// the provider (nominally 7 days). Any non-success status or a
    /// response with mismatched column lengths is an error: rankings are
    /// meaningless without complete climate data.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn fetch_weather_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DailyWeather>, FetchError> {
        let url = format!("{}/forecast", self.base_url);
        debug!("Requesting weather forecast from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", DAILY_PARAMETERS.join(",")),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: WeatherApiResponse = response.json().await?;
        let days = zip_daily_columns(body.daily)?;
        debug!("Fetched {} forecast days", days.len());

        Ok(days)
    }

    /// Searches the geocoding endpoint for locations matching a name.
    #[instrument(skip(self))]
    pub async fn search_location(&self, query: &str) -> Result<Vec<GeocodingResult>, FetchError> {
        let url = format!("{}/search", self.geocoding_url);
        debug!("Searching locations at {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("name", query),
                ("count", "5"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: GeocodingApiResponse = response.json().await?;
        Ok(body.results)
    }
}

fn zip_daily_columns(daily: DailyColumns) -> Result<Vec<DailyWeather>, FetchError> {
    let day_count = daily.time.len();

    let column = |name: &str, values: &[f64], index: usize| -> Result<f64, FetchError> {
        values.get(index).copied().ok_or_else(|| {
            FetchError::MalformedResponse(format!(
                "daily column '{}' has {} values for {} days",
                name,
                values.len(),
                day_count
            ))
        })
    };

    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            Ok(DailyWeather {
                date,
                temperature_max: column("temperature_2m_max", &daily.temperature_2m_max, i)?,
                temperature_min: column("temperature_2m_min", &daily.temperature_2m_min, i)?,
                humidity: column("relative_humidity_2m_mean", &daily.relative_humidity_2m_mean, i)?,
                wind_speed: column("wind_speed_10m_max", &daily.wind_speed_10m_max, i)?,
                wind_direction: column(
                    "wind_direction_10m_dominant",
                    &daily.wind_direction_10m_dominant,
                    i,
                )?,
                precipitation: column("precipitation_sum", &daily.precipitation_sum, i)?,
                cloud_cover: column("cloud_cover_mean", &daily.cloud_cover_mean, i)?,
                uv_index: column("uv_index_max", &daily.uv_index_max, i)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(days: usize) -> DailyColumns {
        DailyColumns {
            time: (1..=days)
                .map(|d| NaiveDate::from_ymd_opt(2025, 3, d as u32).unwrap())
                .collect(),
            temperature_2m_max: vec![10.0; days],
            temperature_2m_min: vec![2.0; days],
            relative_humidity_2m_mean: vec![60.0; days],
            wind_speed_10m_max: vec![12.0; days],
            wind_direction_10m_dominant: vec![180.0; days],
            precipitation_sum: vec![0.5; days],
            cloud_cover_mean: vec![40.0; days],
            uv_index_max: vec![4.0; days],
        }
    }

    #[test]
    fn test_zip_daily_columns() {
        let days = zip_daily_columns(columns(3)).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(days[2].temperature_max, 10.0);
    }

    #[test]
    fn test_zip_daily_columns_short_column_is_malformed() {
        let mut daily = columns(3);
        daily.uv_index_max.truncate(2);

        let err = zip_daily_columns(daily).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(msg) if msg.contains("uv_index_max")));
    }
}
