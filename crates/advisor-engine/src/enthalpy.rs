//! Simplified moist-air enthalpy
//!
//! A single scalar combining temperature and relative humidity so indoor,
//! outdoor and target air can be compared on one axis. This is not a
//! psychrometric formula; the decision thresholds were tuned against this
//! exact expression, so keep the operation order as written.

/// Enthalpy of a temperature (°C) / relative humidity (%) pair.
///
/// Returns `None` when either reading is missing.
pub fn enthalpy(temp: Option<f64>, hum: Option<f64>) -> Option<f64> {
    match (temp, hum) {
        (Some(temp), Some(hum)) => Some(enthalpy_of(temp, hum)),
        _ => None,
    }
}

/// Enthalpy of a pair known to be present (e.g. the configured target)
pub fn enthalpy_of(temp: f64, hum: f64) -> f64 {
    temp + 0.24 * temp * (hum / 100.0) + 2.5 * (hum / 100.0)
}
