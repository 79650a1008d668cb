//! Data Model: EnvironmentalSample, Thresholds, Recommendation
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    DEFAULT_COMFORT_BAND, DEFAULT_STATE_CLOSE, DEFAULT_STATE_KEEP, DEFAULT_STATE_OPEN,
    DEFAULT_TARGET_HUM, DEFAULT_TARGET_TEMP, DEFAULT_WIND_LIMIT,
};

/// A snapshot of sensor readings at one evaluation instant.
///
/// Any reading may be absent (sensor unknown or unavailable). Non-numeric
/// sensor text is expected to be turned into `None` before it gets here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSample {
    #[serde(default)]
    pub indoor_temp: Option<f64>,
    #[serde(default)]
    pub outdoor_temp: Option<f64>,
    #[serde(default)]
    pub indoor_hum: Option<f64>,
    #[serde(default)]
    pub outdoor_hum: Option<f64>,
    /// Raw contact sensor value (e.g. "on", "off", "aberto")
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl EnvironmentalSample {
    /// Create an empty sample
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indoor temperature and humidity
    pub fn indoor(mut self, temp: f64, hum: f64) -> Self {
        self.indoor_temp = Some(temp);
        self.indoor_hum = Some(hum);
        self
    }

    /// Set outdoor temperature and humidity
    pub fn outdoor(mut self, temp: f64, hum: f64) -> Self {
        self.outdoor_temp = Some(temp);
        self.outdoor_hum = Some(hum);
        self
    }

    /// Set the raw contact sensor value
    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Set wind speed
    pub fn wind(mut self, speed: f64) -> Self {
        self.wind_speed = Some(speed);
        self
    }
}

/// User-facing labels for the three actions.
///
/// The labels must be pairwise distinct; the configuration layer enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateLabels {
    pub open: String,
    pub close: String,
    pub keep: String,
}

impl StateLabels {
    pub fn new(
        open: impl Into<String>,
        close: impl Into<String>,
        keep: impl Into<String>,
    ) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            keep: keep.into(),
        }
    }

    /// Label shown for an action
    pub fn label_for(&self, action: Action) -> &str {
        match action {
            Action::Open => &self.open,
            Action::Close => &self.close,
            Action::Keep => &self.keep,
        }
    }

    /// Action a label stands for, if any
    pub fn action_for(&self, label: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.label_for(*action) == label)
    }

    /// All labels in open/close/keep order
    pub fn options(&self) -> Vec<String> {
        vec![self.open.clone(), self.close.clone(), self.keep.clone()]
    }

    /// Whether the three labels are pairwise distinct
    pub fn are_distinct(&self) -> bool {
        self.open != self.close && self.open != self.keep && self.close != self.keep
    }
}

impl Default for StateLabels {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_OPEN, DEFAULT_STATE_CLOSE, DEFAULT_STATE_KEEP)
    }
}

/// Configuration the engine evaluates a sample against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Target temperature in °C (10–30)
    pub target_temp: f64,

    /// Target relative humidity in % (20–80)
    pub target_hum: f64,

    /// Wind speed above which the wind override kicks in
    #[serde(default = "default_wind_limit")]
    pub wind_limit: f64,

    /// Tolerance around the target enthalpy considered comfortable
    #[serde(default = "default_comfort_band")]
    pub comfort_band: f64,

    #[serde(default)]
    pub state_labels: StateLabels,
}

fn default_wind_limit() -> f64 {
    DEFAULT_WIND_LIMIT
}

fn default_comfort_band() -> f64 {
    DEFAULT_COMFORT_BAND
}

impl Thresholds {
    /// Set target temperature and humidity
    pub fn with_target(mut self, temp: f64, hum: f64) -> Self {
        self.target_temp = temp;
        self.target_hum = hum;
        self
    }

    /// Set the state labels
    pub fn with_labels(mut self, labels: StateLabels) -> Self {
        self.state_labels = labels;
        self
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            target_temp: DEFAULT_TARGET_TEMP,
            target_hum: DEFAULT_TARGET_HUM,
            wind_limit: DEFAULT_WIND_LIMIT,
            comfort_band: DEFAULT_COMFORT_BAND,
            state_labels: StateLabels::default(),
        }
    }
}

/// Recommended action for the door or window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Open,
    Close,
    Keep,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Open, Action::Close, Action::Keep];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Open => "OPEN",
            Action::Close => "CLOSE",
            Action::Keep => "KEEP",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a recommendation was made.
///
/// The identifiers are translation-table keys and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    InsufficientIndoorData,
    ComfortableConditions,
    InsufficientOutdoorData,
    StrongWind,
    AlreadyOpenHot,
    OpenHot,
    CloseHotter,
    KeepHot,
    AlreadyOpenWarm,
    OpenWarm,
    CloseCold,
    KeepCold,
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 12] = [
        ReasonCode::InsufficientIndoorData,
        ReasonCode::ComfortableConditions,
        ReasonCode::InsufficientOutdoorData,
        ReasonCode::StrongWind,
        ReasonCode::AlreadyOpenHot,
        ReasonCode::OpenHot,
        ReasonCode::CloseHotter,
        ReasonCode::KeepHot,
        ReasonCode::AlreadyOpenWarm,
        ReasonCode::OpenWarm,
        ReasonCode::CloseCold,
        ReasonCode::KeepCold,
    ];

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::InsufficientIndoorData => "insufficient_indoor_data",
            ReasonCode::ComfortableConditions => "comfortable_conditions",
            ReasonCode::InsufficientOutdoorData => "insufficient_outdoor_data",
            ReasonCode::StrongWind => "strong_wind",
            ReasonCode::AlreadyOpenHot => "already_open_hot",
            ReasonCode::OpenHot => "open_hot",
            ReasonCode::CloseHotter => "close_hotter",
            ReasonCode::KeepHot => "keep_hot",
            ReasonCode::AlreadyOpenWarm => "already_open_warm",
            ReasonCode::OpenWarm => "open_warm",
            ReasonCode::CloseCold => "close_cold",
            ReasonCode::KeepCold => "keep_cold",
        }
    }

    /// Key used in translation files (`reason_<code>`)
    pub fn translation_key(&self) -> String {
        format!("reason_{}", self.as_str())
    }

    /// Inverse of [`ReasonCode::translation_key`]
    pub fn from_translation_key(key: &str) -> Option<Self> {
        let code = key.strip_prefix("reason_")?;
        Self::ALL.into_iter().find(|reason| reason.as_str() == code)
    }

    /// Confidence implied by this reason
    pub fn confidence(&self) -> Confidence {
        match self {
            ReasonCode::InsufficientIndoorData | ReasonCode::InsufficientOutdoorData => {
                Confidence::Low
            }
            _ => Confidence::High,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "LOW"),
            Confidence::High => write!(f, "HIGH"),
        }
    }
}

/// Values that justified a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Indoor enthalpy, 2 decimals
    pub enthalpy_indoor: Option<f64>,
    /// Outdoor enthalpy, 2 decimals
    pub enthalpy_outdoor: Option<f64>,
    /// Target enthalpy, 2 decimals
    pub enthalpy_target: f64,
    /// Wind speed, 1 decimal; only set by the wind override
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wind_speed: Option<f64>,
}

/// The engine's output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    pub reason_code: ReasonCode,
    pub confidence: Confidence,
    pub diagnostics: Diagnostics,
}

impl Recommendation {
    /// Create a recommendation; confidence follows from the reason
    pub fn new(action: Action, reason_code: ReasonCode, diagnostics: Diagnostics) -> Self {
        Self {
            action,
            reason_code,
            confidence: reason_code.confidence(),
            diagnostics,
        }
    }

    /// Label for this recommendation's action
    pub fn label<'a>(&self, labels: &'a StateLabels) -> &'a str {
        labels.label_for(self.action)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, confidence {})",
            self.action, self.reason_code, self.confidence
        )
    }
}

/// Kind of opening the advisor is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Door,
    #[default]
    Window,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Door => "door",
            EntityType::Window => "window",
        }
    }

    /// Parse `door` / `window`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "door" => Some(EntityType::Door),
            "window" => Some(EntityType::Window),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_translation_keys() {
        for reason in ReasonCode::ALL {
            let key = reason.translation_key();
            assert!(key.starts_with("reason_"));
            assert_eq!(ReasonCode::from_translation_key(&key), Some(reason));
        }
        assert_eq!(ReasonCode::from_translation_key("reason_sunny"), None);
        assert_eq!(ReasonCode::from_translation_key("strong_wind"), None);
    }

    #[test]
    fn test_only_insufficient_data_is_low_confidence() {
        let low: Vec<_> = ReasonCode::ALL
            .into_iter()
            .filter(|r| r.confidence() == Confidence::Low)
            .collect();
        assert_eq!(
            low,
            vec![
                ReasonCode::InsufficientIndoorData,
                ReasonCode::InsufficientOutdoorData
            ]
        );
    }

    #[test]
    fn test_reason_serialization_matches_identifier() {
        for reason in ReasonCode::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }

    #[test]
    fn test_state_labels() {
        let labels = StateLabels::default();
        assert_eq!(labels.label_for(Action::Open), "ABRIR");
        assert_eq!(labels.label_for(Action::Close), "FECHAR");
        assert_eq!(labels.label_for(Action::Keep), "MANTER");
        assert_eq!(labels.action_for("FECHAR"), Some(Action::Close));
        assert_eq!(labels.action_for("OPEN"), None);
        assert!(labels.are_distinct());

        let clash = StateLabels::new("GO", "GO", "STAY");
        assert!(!clash.are_distinct());
    }

    #[test]
    fn test_thresholds_defaults() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.target_temp, 22.0);
        assert_eq!(thresholds.target_hum, 55.0);
        assert_eq!(thresholds.wind_limit, 25.0);
        assert_eq!(thresholds.comfort_band, 2.0);

        let parsed: Thresholds =
            serde_json::from_str(r#"{"target_temp": 20.0, "target_hum": 50.0}"#).unwrap();
        assert_eq!(parsed.wind_limit, 25.0);
        assert_eq!(parsed.state_labels, StateLabels::default());
    }

    #[test]
    fn test_recommendation_confidence_follows_reason() {
        let diagnostics = Diagnostics {
            enthalpy_indoor: None,
            enthalpy_outdoor: None,
            enthalpy_target: 26.26,
            wind_speed: None,
        };
        let rec = Recommendation::new(Action::Keep, ReasonCode::InsufficientIndoorData, diagnostics);
        assert_eq!(rec.confidence, Confidence::Low);
        assert_eq!(rec.to_string(), "KEEP (insufficient_indoor_data, confidence LOW)");

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["action"], "KEEP");
        assert_eq!(json["confidence"], "LOW");
        assert!(json["diagnostics"]["enthalpy_indoor"].is_null());
        assert!(json["diagnostics"].get("wind_speed").is_none());
    }

    #[test]
    fn test_sample_from_partial_json() {
        let sample: EnvironmentalSample =
            serde_json::from_str(r#"{"indoor_temp": 21.5, "contact": "off"}"#).unwrap();
        assert_eq!(sample.indoor_temp, Some(21.5));
        assert_eq!(sample.indoor_hum, None);
        assert_eq!(sample.contact.as_deref(), Some("off"));
    }

    #[test]
    fn test_entity_type() {
        assert_eq!(EntityType::default(), EntityType::Window);
        assert_eq!(EntityType::parse("door"), Some(EntityType::Door));
        assert_eq!(EntityType::parse("gate"), None);
    }
}
