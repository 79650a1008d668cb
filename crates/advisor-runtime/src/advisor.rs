//! One advisor per config entry
use advisor_config::{ConfigEntry, ConfigError, ConfigMap, EntityConfig};
use advisor_engine::explain;
use advisor_out::{entity_id_for, render_state, EntityState, Language, ReasonTable};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Advisor {
    entry: ConfigEntry,
    config: EntityConfig,
    reasons: ReasonTable,
    language: Language,
    locales_dir: PathBuf,
}

impl Advisor {
    /// Resolve the entry and load its reason table
    pub fn new(
        entry: ConfigEntry,
        language: Language,
        locales_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = EntityConfig::resolve(&entry)?;
        Ok(Self::from_resolved(entry, config, language, locales_dir))
    }

    /// Build from an entry that was already resolved
    pub fn from_resolved(
        entry: ConfigEntry,
        config: EntityConfig,
        language: Language,
        locales_dir: impl Into<PathBuf>,
    ) -> Self {
        let locales_dir = locales_dir.into();
        let reasons = ReasonTable::load(&locales_dir, language);
        Self {
            entry,
            config,
            reasons,
            language,
            locales_dir,
        }
    }

    pub fn entry_id(&self) -> &str {
        &self.entry.entry_id
    }

    pub fn entry(&self) -> &ConfigEntry {
        &self.entry
    }

    pub fn config(&self) -> &EntityConfig {
        &self.config
    }

    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    /// Published entity id
    pub fn entity_id(&self) -> String {
        entity_id_for(&self.config.name)
    }

    /// Sensor entity ids whose changes should trigger a recompute
    pub fn watched_entities(&self) -> Vec<String> {
        self.config
            .sensors
            .entity_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sample the store, evaluate, render
    pub fn recompute(&self, store: &crate::StateStore) -> EntityState {
        let sample = store.sample_for(&self.config.sensors);
        let (rule, recommendation) = explain(&sample, &self.config.thresholds());

        tracing::debug!(
            entry_id = %self.entry.entry_id,
            rule = ?rule,
            action = %recommendation.action,
            reason = %recommendation.reason_code,
            "recomputed recommendation"
        );

        render_state(
            &self.entry.entry_id,
            &self.config,
            &sample,
            &recommendation,
            &self.reasons,
        )
    }

    /// Replace the options layer; nothing changes if the result is invalid
    pub fn apply_options(&mut self, options: ConfigMap) -> Result<(), ConfigError> {
        let mut entry = self.entry.clone();
        entry.update_options(options);
        let config = EntityConfig::resolve(&entry)?;

        self.entry = entry;
        self.config = config;
        self.reasons = ReasonTable::load(&self.locales_dir, self.language);
        Ok(())
    }
}
