//! Published entity state
//!
//! What an advisor exposes after each evaluation: the mapped label as its
//! state plus the inputs and diagnostics that led to it.

use advisor_config::EntityConfig;
use advisor_core::{Action, EnvironmentalSample, ReasonCode, Recommendation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::presentation::{confidence_label, entity_id_for, friendly_name, icon_for, unique_id_for};
use crate::translations::ReasonTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateAttributes {
    /// Translated reason
    pub reason: String,
    pub indoor_temp: Option<f64>,
    pub outdoor_temp: Option<f64>,
    pub indoor_hum: Option<f64>,
    pub outdoor_hum: Option<f64>,
    pub contact_state: Option<String>,
    pub wind_speed: Option<f64>,
    pub enthalpy_indoor: Option<f64>,
    pub enthalpy_outdoor: Option<f64>,
    pub enthalpy_target: f64,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub unique_id: String,
    pub friendly_name: String,
    /// Label of the recommended action
    pub state: String,
    pub icon: String,
    /// The three possible labels
    pub options: Vec<String>,
    pub action: Action,
    pub reason_code: ReasonCode,
    pub attributes: StateAttributes,
    pub last_updated: DateTime<Utc>,
}

/// Build the state an advisor publishes for one evaluation
pub fn render_state(
    entry_id: &str,
    config: &EntityConfig,
    sample: &EnvironmentalSample,
    recommendation: &Recommendation,
    reasons: &ReasonTable,
) -> EntityState {
    let language = reasons.language();
    let diagnostics = &recommendation.diagnostics;

    EntityState {
        entity_id: entity_id_for(&config.name),
        unique_id: unique_id_for(entry_id),
        friendly_name: friendly_name(&config.name, language),
        state: recommendation.label(&config.labels).to_string(),
        icon: icon_for(config.entity_type, recommendation.action).to_string(),
        options: config.labels.options(),
        action: recommendation.action,
        reason_code: recommendation.reason_code,
        attributes: StateAttributes {
            reason: reasons.translate(recommendation.reason_code),
            indoor_temp: sample.indoor_temp,
            outdoor_temp: sample.outdoor_temp,
            indoor_hum: sample.indoor_hum,
            outdoor_hum: sample.outdoor_hum,
            contact_state: sample.contact.clone(),
            wind_speed: sample.wind_speed,
            enthalpy_indoor: diagnostics.enthalpy_indoor,
            enthalpy_outdoor: diagnostics.enthalpy_outdoor,
            enthalpy_target: diagnostics.enthalpy_target,
            confidence: confidence_label(recommendation.confidence, language).to_string(),
        },
        last_updated: Utc::now(),
    }
}
