use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::aggregator::group_marine_by_day;
use crate::fetch_error::FetchError;
use crate::fetcher::ForecastFetcher;
use crate::marine_fetcher::MarineFetcher;
use crate::models::{
    ActivityConditions, ActivityRanking, ActivityScore, DailyMarine, DailyRanking, DailyWeather,
    DataSource, LocationWeatherRanking,
};
use crate::registry::ScorerRegistry;
use crate::utils::{temperature_range, weather_description};

/// Ranks every registered activity for every day of a location's forecast.
///
/// The weather fetch is load-bearing: without climate data no ranking is
/// meaningful, so its failure propagates. The marine fetch is issued only
/// when some registered scorer needs it, runs concurrently with the
/// weather fetch, and is degradable: on failure marine-dependent scorers
/// self-report poor suitability instead of the whole call aborting.
pub struct RankingService {
    forecast_fetcher: ForecastFetcher,
    marine_fetcher: MarineFetcher,
    registry: Arc<ScorerRegistry>,
}

impl RankingService {
    pub fn new(
        forecast_fetcher: ForecastFetcher,
        marine_fetcher: MarineFetcher,
        registry: Arc<ScorerRegistry>,
    ) -> Self {
        Self {
            forecast_fetcher,
            marine_fetcher,
            registry,
        }
    }

    #[instrument(skip(self), fields(city = %city, lat = %latitude, lon = %longitude))]
    pub async fn rank_location(
        &self,
        city: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationWeatherRanking, FetchError> {
        let needs_marine = self.registry.any_requires(DataSource::Marine);

        let (weather_days, marine_by_day) = if needs_marine {
            let (weather, marine) = tokio::join!(
                self.forecast_fetcher.fetch_weather_forecast(latitude, longitude),
                self.marine_fetcher.fetch_marine_forecast(latitude, longitude),
            );
            (weather?, index_marine(marine))
        } else {
            let weather = self
                .forecast_fetcher
                .fetch_weather_forecast(latitude, longitude)
                .await?;
            (weather, HashMap::new())
        };

        let forecast: Vec<DailyRanking> = weather_days
            .into_iter()
            .map(|daily| {
                let rankings = self.rank_day(&daily, marine_by_day.get(&daily.date));
                DailyRanking {
                    date: daily.date,
                    weather: daily,
                    rankings,
                }
            })
            .collect();

        info!(
            "Ranked {} activities across {} forecast days for {}",
            self.registry.count(),
            forecast.len(),
            city
        );

        Ok(LocationWeatherRanking {
            city: city.to_string(),
            country: country.to_string(),
            latitude,
            longitude,
            forecast,
        })
    }

    /// Scores every registered scorer for one day and sorts descending by
    /// score. The sort is stable, so equal scores keep registration order.
    fn rank_day(
        &self,
        weather: &DailyWeather,
        marine: Option<&DailyMarine>,
    ) -> Vec<ActivityRanking> {
        // Computed once per day, shared by every activity's ranking
        let temperature = temperature_range(weather);
        let description = weather_description(weather);

        let mut rankings: Vec<ActivityRanking> = self
            .registry
            .all()
            .iter()
            .map(|scorer| {
                let result = catch_unwind(AssertUnwindSafe(|| scorer.score(weather, marine)))
                    .unwrap_or_else(|_| {
                        warn!(
                            "Scorer '{}' panicked while scoring {}, substituting zero score",
                            scorer.id(),
                            weather.date
                        );
                        ActivityScore::new(
                            0,
                            format!("{} scoring is temporarily unavailable", scorer.display_name()),
                        )
                    });

                ActivityRanking {
                    activity: scorer.id().to_string(),
                    score: result.score,
                    reason: result.reason,
                    conditions: ActivityConditions {
                        temperature: temperature.clone(),
                        weather: description.clone(),
                        suitability: result.suitability,
                    },
                }
            })
            .collect();

        rankings.sort_by(|a, b| b.score.cmp(&a.score));
        rankings
    }
}

fn index_marine(
    marine: Result<Vec<crate::models::MarineSample>, FetchError>,
) -> HashMap<NaiveDate, DailyMarine> {
    match marine {
        Ok(samples) => group_marine_by_day(&samples)
            .into_iter()
            .map(|day| (day.date, day))
            .collect(),
        Err(e) => {
            warn!("Marine forecast unavailable, continuing without it: {}", e);
            HashMap::new()
        }
    }
}
