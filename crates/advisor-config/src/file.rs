//! Advisor configuration file
//!
//! YAML document listing the configured advisors:
//!
//! ```yaml
//! language: pt
//! locales_dir: ./locales
//! entries:
//!   - entry_id: kitchen
//!     data:
//!       name: Kitchen Window
//!       indoor_temp: sensor.kitchen_temperature
//!       outdoor_temp: sensor.outside_temperature
//!       indoor_hum: sensor.kitchen_humidity
//!       outdoor_hum: sensor.outside_humidity
//!       contact: binary_sensor.kitchen_window
//!     options:
//!       target_temp: 23
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::entity::EntityConfig;
use crate::entry::ConfigEntry;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorFile {
    /// Host language tag (e.g. "en", "pt-BR")
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory holding `strings.json` and `translations/`
    #[serde(default)]
    pub locales_dir: Option<PathBuf>,

    #[serde(default)]
    pub entries: Vec<ConfigEntry>,
}

fn default_language() -> String {
    "en".to_string()
}

impl AdvisorFile {
    /// Load from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve every entry, rejecting two entries that publish the same entity id
    pub fn resolve_entries(&self) -> Result<Vec<(ConfigEntry, EntityConfig)>, ConfigError> {
        let mut entity_ids = HashSet::new();
        let mut resolved = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let config = EntityConfig::resolve(entry)?;
            let entity_id = config.entity_id();
            if !entity_ids.insert(entity_id.clone()) {
                return Err(ConfigError::DuplicateEntry(entity_id));
            }
            resolved.push((entry.clone(), config));
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROOMS: &str = r#"
language: pt-BR
locales_dir: ./locales
entries:
  - entry_id: kitchen
    data:
      name: Kitchen Window
      indoor_temp: sensor.kitchen_temperature
      outdoor_temp: sensor.outside_temperature
      indoor_hum: sensor.kitchen_humidity
      outdoor_hum: sensor.outside_humidity
      contact: binary_sensor.kitchen_window
    options:
      target_temp: 23
  - data:
      name: Porta da Sala
      entity_type: door
      indoor_temp: sensor.living_temperature
      outdoor_temp: sensor.outside_temperature
      indoor_hum: sensor.living_humidity
      outdoor_hum: sensor.outside_humidity
      contact: binary_sensor.living_door
      wind_speed: sensor.wind_speed
"#;

    #[test]
    fn test_parse_file() {
        let file = AdvisorFile::from_yaml(TWO_ROOMS).unwrap();
        assert_eq!(file.language, "pt-BR");
        assert_eq!(file.locales_dir, Some(PathBuf::from("./locales")));
        assert_eq!(file.entries.len(), 2);
        assert_eq!(file.entries[0].entry_id, "kitchen");

        let resolved = file.resolve_entries().unwrap();
        assert_eq!(resolved[0].1.target_temp, 23.0);
        assert_eq!(resolved[1].1.sensors.wind_speed.as_deref(), Some("sensor.wind_speed"));
    }

    #[test]
    fn test_defaults() {
        let file = AdvisorFile::from_yaml("entries: []").unwrap();
        assert_eq!(file.language, "en");
        assert!(file.locales_dir.is_none());
        assert!(file.resolve_entries().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = TWO_ROOMS.replace("Porta da Sala", "Kitchen Window");
        let file = AdvisorFile::from_yaml(&yaml).unwrap();
        let err = file.resolve_entries().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEntry(id) if id == "sensor.kitchen_window_advice"));
    }

    #[test]
    fn test_names_with_the_same_slug_rejected() {
        let yaml = TWO_ROOMS.replace("Porta da Sala", "kitchen window!");
        let file = AdvisorFile::from_yaml(&yaml).unwrap();
        let err = file.resolve_entries().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEntry(ref id) if id == "sensor.kitchen_window_advice"));
        assert!(err.to_string().contains("sensor.kitchen_window_advice"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = AdvisorFile::from_yaml("entries: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AdvisorFile::load("/nonexistent/advisor.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
