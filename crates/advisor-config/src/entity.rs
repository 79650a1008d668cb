//! Resolved entity configuration
//!
//! Turns a layered [`ConfigEntry`] into a typed [`EntityConfig`], applying
//! defaults, coercing numbers and enforcing the documented bounds. This runs
//! once per entry (and again on each options update); the engine only ever
//! sees the resulting [`Thresholds`].

use advisor_core::{
    EntityType, StateLabels, Thresholds, DEFAULT_NAME, DEFAULT_STATE_CLOSE, DEFAULT_STATE_KEEP,
    DEFAULT_STATE_OPEN, DEFAULT_TARGET_HUM, DEFAULT_TARGET_TEMP,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entry::ConfigEntry;
use crate::error::ConfigError;
use crate::keys::*;
use crate::naming::entity_id_for;

/// Sensor entity ids an advisor reads from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorBindings {
    pub indoor_temp: String,
    pub outdoor_temp: String,
    pub indoor_hum: String,
    pub outdoor_hum: String,
    pub contact: String,
    /// Optional wind speed sensor
    pub wind_speed: Option<String>,
}

impl SensorBindings {
    /// All bound entity ids; wind only when configured
    pub fn entity_ids(&self) -> Vec<&str> {
        let mut ids = vec![
            self.indoor_temp.as_str(),
            self.outdoor_temp.as_str(),
            self.indoor_hum.as_str(),
            self.outdoor_hum.as_str(),
            self.contact.as_str(),
        ];
        if let Some(wind) = &self.wind_speed {
            ids.push(wind.as_str());
        }
        ids
    }
}

/// Fully resolved configuration of one advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub name: String,
    pub entity_type: EntityType,
    pub sensors: SensorBindings,
    pub target_temp: f64,
    pub target_hum: f64,
    /// Temperature tolerance (published, not used by the decision policy)
    pub tol_temp: f64,
    /// Humidity tolerance (published, not used by the decision policy)
    pub tol_hum: f64,
    pub labels: StateLabels,
}

impl EntityConfig {
    /// Resolve options → data → default for every key
    pub fn resolve(entry: &ConfigEntry) -> Result<Self, ConfigError> {
        let name = string(entry, CONF_NAME)?.unwrap_or_else(|| DEFAULT_NAME.to_string());

        let entity_type = match string(entry, CONF_ENTITY_TYPE)? {
            None => EntityType::default(),
            Some(value) => EntityType::parse(&value).ok_or(ConfigError::InvalidValue {
                key: CONF_ENTITY_TYPE,
                value,
            })?,
        };

        let sensors = SensorBindings {
            indoor_temp: required(entry, CONF_INDOOR_TEMP)?,
            outdoor_temp: required(entry, CONF_OUTDOOR_TEMP)?,
            indoor_hum: required(entry, CONF_INDOOR_HUM)?,
            outdoor_hum: required(entry, CONF_OUTDOOR_HUM)?,
            contact: required(entry, CONF_CONTACT)?,
            wind_speed: string(entry, CONF_WIND_SPEED)?,
        };

        let labels = StateLabels::new(
            label(entry, CONF_STATE_OPEN, DEFAULT_STATE_OPEN)?,
            label(entry, CONF_STATE_CLOSE, DEFAULT_STATE_CLOSE)?,
            label(entry, CONF_STATE_KEEP, DEFAULT_STATE_KEEP)?,
        );
        if !labels.are_distinct() {
            return Err(ConfigError::DuplicateLabels {
                open: labels.open,
                close: labels.close,
                keep: labels.keep,
            });
        }

        Ok(Self {
            name,
            entity_type,
            sensors,
            target_temp: bounded(entry, CONF_TARGET_TEMP, DEFAULT_TARGET_TEMP, TARGET_TEMP_RANGE)?,
            target_hum: bounded(entry, CONF_TARGET_HUM, DEFAULT_TARGET_HUM, TARGET_HUM_RANGE)?,
            tol_temp: bounded(entry, CONF_TOL_TEMP, DEFAULT_TOL_TEMP, TOL_TEMP_RANGE)?,
            tol_hum: bounded(entry, CONF_TOL_HUM, DEFAULT_TOL_HUM, TOL_HUM_RANGE)?,
            labels,
        })
    }

    /// Entity id this advisor publishes under
    pub fn entity_id(&self) -> String {
        entity_id_for(&self.name)
    }

    /// Thresholds handed to the engine
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::default()
            .with_target(self.target_temp, self.target_hum)
            .with_labels(self.labels.clone())
    }
}

/// Engine thresholds for an ad-hoc target, validated like a config entry.
///
/// Wind limit, comfort band and labels keep their defaults.
pub fn target_thresholds(target_temp: Option<f64>, target_hum: Option<f64>) -> Result<Thresholds, ConfigError> {
    let target_temp = match target_temp {
        Some(value) => check_range(CONF_TARGET_TEMP, value, TARGET_TEMP_RANGE)?,
        None => DEFAULT_TARGET_TEMP,
    };
    let target_hum = match target_hum {
        Some(value) => check_range(CONF_TARGET_HUM, value, TARGET_HUM_RANGE)?,
        None => DEFAULT_TARGET_HUM,
    };
    Ok(Thresholds::default().with_target(target_temp, target_hum))
}

/// Non-empty string value; `null` and `""` count as absent
fn string(entry: &ConfigEntry, key: &'static str) -> Result<Option<String>, ConfigError> {
    match entry.lookup(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConfigError::InvalidType {
            key,
            expected: "a string",
        }),
    }
}

fn required(entry: &ConfigEntry, key: &'static str) -> Result<String, ConfigError> {
    string(entry, key)?.ok_or(ConfigError::MissingKey(key))
}

fn label(entry: &ConfigEntry, key: &'static str, default: &str) -> Result<String, ConfigError> {
    Ok(string(entry, key)?.unwrap_or_else(|| default.to_string()))
}

/// Number or numeric string, checked against an inclusive range
fn bounded(
    entry: &ConfigEntry,
    key: &'static str,
    default: f64,
    (min, max): (f64, f64),
) -> Result<f64, ConfigError> {
    let value = match entry.lookup(key) {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .filter(|v| v.is_finite())
    .ok_or(ConfigError::InvalidType {
        key,
        expected: "a number",
    })?;

    check_range(key, value, (min, max))
}

/// Check a value against an inclusive range
pub fn check_range(key: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
