//! Latest sensor states and sampling
//!
//! Raw states arrive as text. Unknown or unavailable sensors, and text that is
//! not a number where a number is expected, become `None` here so the engine
//! only ever sees valid readings or absences.

use advisor_config::SensorBindings;
use advisor_core::EnvironmentalSample;
use std::collections::HashMap;

const UNAVAILABLE_STATES: [&str; 2] = ["unknown", "unavailable"];

#[derive(Debug, Clone, Default)]
pub struct StateStore {
    states: HashMap<String, String>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state; `None` forgets the sensor. Returns whether it changed.
    pub fn set(&mut self, entity_id: impl Into<String>, state: Option<String>) -> bool {
        let entity_id = entity_id.into();
        match state {
            Some(state) => self.states.insert(entity_id, state.clone()).as_ref() != Some(&state),
            None => self.states.remove(&entity_id).is_some(),
        }
    }

    /// Keep only the sensors for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.states.retain(|entity_id, _| keep(entity_id));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Raw state as last reported
    pub fn get(&self, entity_id: &str) -> Option<&str> {
        self.states.get(entity_id).map(String::as_str)
    }

    /// State text, `None` when missing, unknown or unavailable
    pub fn str_state(&self, entity_id: &str) -> Option<String> {
        self.get(entity_id)
            .filter(|state| !UNAVAILABLE_STATES.contains(state))
            .map(str::to_string)
    }

    /// Numeric state, `None` when missing, unavailable or not a finite number
    pub fn float_state(&self, entity_id: &str) -> Option<f64> {
        self.str_state(entity_id)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Snapshot of the sensors an advisor is bound to
    pub fn sample_for(&self, sensors: &SensorBindings) -> EnvironmentalSample {
        EnvironmentalSample {
            indoor_temp: self.float_state(&sensors.indoor_temp),
            outdoor_temp: self.float_state(&sensors.outdoor_temp),
            indoor_hum: self.float_state(&sensors.indoor_hum),
            outdoor_hum: self.float_state(&sensors.outdoor_hum),
            contact: self.str_state(&sensors.contact),
            wind_speed: sensors
                .wind_speed
                .as_deref()
                .and_then(|id| self.float_state(id)),
        }
    }
}
