use std::env;

use tracing::warn;

use crate::models::ActivityConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub weather_base_url: String,
    pub marine_base_url: String,
    pub geocoding_base_url: String,
    pub activities: Vec<ActivityConfig>,
}

/// The documented default activity set, used when ACTIVITY_CONFIG is
/// absent or malformed.
pub fn default_activity_config() -> Vec<ActivityConfig> {
    vec![
        ActivityConfig { id: "skiing".to_string(), enabled: true, priority: Some(1) },
        ActivityConfig { id: "surfing".to_string(), enabled: true, priority: Some(2) },
        ActivityConfig { id: "outdoor-sightseeing".to_string(), enabled: true, priority: Some(3) },
        ActivityConfig { id: "indoor-sightseeing".to_string(), enabled: true, priority: Some(4) },
    ]
}

impl Config {
    /// Every variable has a default, so loading cannot fail. A malformed
    /// ACTIVITY_CONFIG falls back to the default set with a warning
    /// rather than blocking startup.
    pub fn from_env() -> Self {
        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            weather_base_url: env::var("OPEN_METEO_BASE_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1".to_string()),
            marine_base_url: env::var("OPEN_METEO_MARINE_URL")
                .unwrap_or_else(|_| "https://marine-api.open-meteo.com/v1".to_string()),
            geocoding_base_url: env::var("OPEN_METEO_GEOCODING_URL")
                .unwrap_or_else(|_| "https://geocoding-api.open-meteo.com/v1".to_string()),
            activities: activities_from_env(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn activities_from_env() -> Vec<ActivityConfig> {
    match env::var("ACTIVITY_CONFIG") {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(activities) => activities,
            Err(e) => {
                warn!("Invalid ACTIVITY_CONFIG format, using defaults: {}", e);
                default_activity_config()
            }
        },
        Err(_) => default_activity_config(),
    }
}
