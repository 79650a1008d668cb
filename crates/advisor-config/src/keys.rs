//! Configuration keys
//!
//! Stable names used in config entry `data` and `options` maps.

pub const CONF_NAME: &str = "name";
pub const CONF_ENTITY_TYPE: &str = "entity_type";

pub const CONF_INDOOR_TEMP: &str = "indoor_temp";
pub const CONF_OUTDOOR_TEMP: &str = "outdoor_temp";
pub const CONF_INDOOR_HUM: &str = "indoor_hum";
pub const CONF_OUTDOOR_HUM: &str = "outdoor_hum";
pub const CONF_CONTACT: &str = "contact";
pub const CONF_WIND_SPEED: &str = "wind_speed";

pub const CONF_TARGET_TEMP: &str = "target_temp";
pub const CONF_TARGET_HUM: &str = "target_hum";
pub const CONF_TOL_TEMP: &str = "tol_temp";
pub const CONF_TOL_HUM: &str = "tol_hum";

pub const CONF_STATE_OPEN: &str = "state_open";
pub const CONF_STATE_CLOSE: &str = "state_close";
pub const CONF_STATE_KEEP: &str = "state_keep";

pub const DEFAULT_TOL_TEMP: f64 = 3.5;
pub const DEFAULT_TOL_HUM: f64 = 15.0;

/// Inclusive bounds for the numeric settings
pub const TARGET_TEMP_RANGE: (f64, f64) = (10.0, 30.0);
pub const TARGET_HUM_RANGE: (f64, f64) = (20.0, 80.0);
pub const TOL_TEMP_RANGE: (f64, f64) = (0.5, 10.0);
pub const TOL_HUM_RANGE: (f64, f64) = (1.0, 30.0);
