use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{ActivityConfig, DataSource};
use crate::scorers::{scorer_for_id, ActivityScorer};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Activity scorer not found: {0}")]
    NotFound(String),
}

/// Holds the active set of activity scorers. Built once at startup from
/// configuration and treated as read-only afterwards (shared via `Arc`),
/// so no locking is needed on the request path.
#[derive(Default)]
pub struct ScorerRegistry {
    // Vec rather than a map: the set is small and iteration order is the
    // registration order, which downstream sorting uses as its tie-break.
    scorers: Vec<Arc<dyn ActivityScorer>>,
}

impl ScorerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the configured activity list. Entries are
    /// stable-sorted by priority (missing priority sorts last), disabled
    /// entries are skipped, and a configured id with no matching scorer
    /// implementation is skipped with a warning rather than failing
    /// startup.
    pub fn from_config(configs: &[ActivityConfig]) -> Self {
        let mut ordered: Vec<&ActivityConfig> = configs.iter().collect();
        ordered.sort_by_key(|c| c.priority.unwrap_or(i32::MAX));

        let mut registry = Self::new();
        for entry in ordered {
            if !entry.enabled {
                debug!("Activity '{}' disabled in configuration, skipping", entry.id);
                continue;
            }
            match scorer_for_id(&entry.id) {
                Some(scorer) => registry.register(scorer),
                None => warn!(
                    "No scorer implementation for configured activity '{}', skipping",
                    entry.id
                ),
            }
        }
        registry
    }

    /// Registers a scorer under its activity id. A duplicate id overwrites
    /// the existing entry in place (keeping its registration position) and
    /// logs a warning; duplicate registration is tolerated, not fatal.
    pub fn register(&mut self, scorer: Arc<dyn ActivityScorer>) {
        let id = scorer.id().to_string();
        if let Some(slot) = self.scorers.iter_mut().find(|s| s.id() == id) {
            warn!("Activity scorer '{}' already registered, overwriting", id);
            *slot = scorer;
        } else {
            info!("Registered activity scorer: {} ({})", scorer.display_name(), id);
            self.scorers.push(scorer);
        }
    }

    pub fn get(&self, id: &str) -> Result<Arc<dyn ActivityScorer>, RegistryError> {
        self.scorers
            .iter()
            .find(|s| s.id() == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Active scorers in registration order.
    pub fn all(&self) -> &[Arc<dyn ActivityScorer>] {
        &self.scorers
    }

    pub fn ids(&self) -> Vec<&str> {
        self.scorers.iter().map(|s| s.id()).collect()
    }

    pub fn has(&self, id: &str) -> bool {
        self.scorers.iter().any(|s| s.id() == id)
    }

    pub fn count(&self) -> usize {
        self.scorers.len()
    }

    /// Whether any registered scorer depends on the given data source.
    pub fn any_requires(&self, source: DataSource) -> bool {
        self.scorers
            .iter()
            .any(|s| s.required_data_sources().contains(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityScore, DailyMarine, DailyWeather};

    #[derive(Debug)]
    struct FakeScorer {
        id: &'static str,
        score: u32,
    }

    impl ActivityScorer for FakeScorer {
        fn id(&self) -> &str {
            self.id
        }

        fn display_name(&self) -> &str {
            self.id
        }

        fn required_data_sources(&self) -> &[DataSource] {
            &[DataSource::Weather]
        }

        fn score(&self, _weather: &DailyWeather, _marine: Option<&DailyMarine>) -> ActivityScore {
            ActivityScore::new(self.score, "fake")
        }
    }

    fn config(id: &str, enabled: bool, priority: Option<i32>) -> ActivityConfig {
        ActivityConfig {
            id: id.to_string(),
            enabled,
            priority,
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ScorerRegistry::new();
        registry.register(Arc::new(FakeScorer { id: "skiing", score: 50 }));

        assert!(registry.get("skiing").is_ok());
        assert_eq!(registry.count(), 1);
        assert!(registry.has("skiing"));
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let registry = ScorerRegistry::new();
        let err = registry.get("skiing").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(id) if id == "skiing"));
    }

    #[test]
    fn test_duplicate_registration_overwrites_in_place() {
        let mut registry = ScorerRegistry::new();
        registry.register(Arc::new(FakeScorer { id: "first", score: 10 }));
        registry.register(Arc::new(FakeScorer { id: "skiing", score: 10 }));
        registry.register(Arc::new(FakeScorer { id: "skiing", score: 90 }));

        // One entry, the second instance, original position
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.ids(), vec!["first", "skiing"]);
        let weather = crate::scorers::test_support::weather(10.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(registry.get("skiing").unwrap().score(&weather, None).score, 90);
    }

    #[test]
    fn test_all_preserves_registration_order() {
        let mut registry = ScorerRegistry::new();
        registry.register(Arc::new(FakeScorer { id: "b", score: 1 }));
        registry.register(Arc::new(FakeScorer { id: "a", score: 2 }));

        assert_eq!(registry.ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_from_config_registers_enabled_known_activities() {
        let configs = vec![
            config("skiing", true, Some(1)),
            config("surfing", true, Some(2)),
            config("outdoor-sightseeing", false, Some(3)),
            config("kite-flying", true, Some(4)),
        ];

        let registry = ScorerRegistry::from_config(&configs);
        assert_eq!(registry.ids(), vec!["skiing", "surfing"]);
    }

    #[test]
    fn test_from_config_orders_by_priority() {
        let configs = vec![
            config("surfing", true, Some(2)),
            config("skiing", true, Some(1)),
            config("hiking", true, None),
        ];

        let registry = ScorerRegistry::from_config(&configs);
        assert_eq!(registry.ids(), vec!["skiing", "surfing", "hiking"]);
    }

    #[test]
    fn test_any_requires_marine() {
        let configs = vec![config("skiing", true, Some(1))];
        let registry = ScorerRegistry::from_config(&configs);
        assert!(!registry.any_requires(DataSource::Marine));

        let configs = vec![config("skiing", true, Some(1)), config("surfing", true, Some(2))];
        let registry = ScorerRegistry::from_config(&configs);
        assert!(registry.any_requires(DataSource::Marine));
    }
}
