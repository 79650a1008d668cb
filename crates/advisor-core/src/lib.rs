//! Advisor Core: shared data model and errors
//!
//! Types that cross every boundary of the advisor: the environmental sample
//! fed into the engine, the thresholds it is evaluated against, and the
//! recommendation it produces.

pub mod data_model;
pub mod error;

pub use data_model::{
    Action, Confidence, Diagnostics, EntityType, EnvironmentalSample, ReasonCode,
    Recommendation, StateLabels, Thresholds,
};
pub use error::AdvisorError;

/// Advisor version
pub const ADVISOR_VERSION: &str = "1.0.0";

/// Integration domain, used as the unique id prefix
pub const DOMAIN: &str = "door_window_advisor";

/// Name used when a config entry does not carry one
pub const DEFAULT_NAME: &str = "Door/Window Advisor";

pub const DEFAULT_TARGET_TEMP: f64 = 22.0;
pub const DEFAULT_TARGET_HUM: f64 = 55.0;
pub const DEFAULT_WIND_LIMIT: f64 = 25.0;
pub const DEFAULT_COMFORT_BAND: f64 = 2.0;

pub const DEFAULT_STATE_OPEN: &str = "ABRIR";
pub const DEFAULT_STATE_CLOSE: &str = "FECHAR";
pub const DEFAULT_STATE_KEEP: &str = "MANTER";
