//! Advisor Config: entry resolution and validation
//!
//! Configuration lives in two layers per entry, `data` and `options`.
//! [`EntityConfig::resolve`] merges them once (options win, then data, then
//! the per-key default) and validates the result, so the engine never looks
//! anything up on its own.
//!
//! # Example
//!
//! ```
//! use advisor_config::{ConfigEntry, EntityConfig};
//! use serde_json::json;
//!
//! let data = json!({
//!     "name": "Bedroom Window",
//!     "indoor_temp": "sensor.bedroom_temperature",
//!     "outdoor_temp": "sensor.outside_temperature",
//!     "indoor_hum": "sensor.bedroom_humidity",
//!     "outdoor_hum": "sensor.outside_humidity",
//!     "contact": "binary_sensor.bedroom_window",
//!     "target_temp": 20.0
//! });
//! let entry = ConfigEntry::new(data.as_object().unwrap().clone());
//!
//! let config = EntityConfig::resolve(&entry).unwrap();
//! assert_eq!(config.thresholds().target_temp, 20.0);
//! assert_eq!(config.thresholds().target_hum, 55.0);
//! ```

pub mod entity;
pub mod entry;
pub mod error;
pub mod file;
pub mod keys;
pub mod naming;

pub use entity::{check_range, target_thresholds, EntityConfig, SensorBindings};
pub use entry::{ConfigEntry, ConfigMap};
pub use error::ConfigError;
pub use file::AdvisorFile;
pub use naming::{entity_id_for, slugify};
