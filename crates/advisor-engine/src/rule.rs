//! Decision rules
//!
//! The policy is an ordered list: rules are tried in [`DECISION_ORDER`] and
//! the first one whose guard matches decides. Later rules may assume the
//! guards of earlier ones did not match.

use advisor_core::{Action, EnvironmentalSample, ReasonCode, Thresholds};
use serde::{Deserialize, Serialize};

use crate::contact::is_contact_open;
use crate::enthalpy::{enthalpy, enthalpy_of};

/// One entry of the decision list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Indoor temperature or humidity missing
    InsufficientIndoorData,
    /// Indoor enthalpy within the comfort band of the target
    Comfortable,
    /// Outdoor temperature or humidity missing
    InsufficientOutdoorData,
    /// Wind above the configured limit
    StrongWind,
    /// Indoor enthalpy above target
    IndoorTooHot,
    /// Indoor enthalpy at or below target
    IndoorNotHot,
}

/// Rule evaluation order. Changing it changes observable behavior.
pub const DECISION_ORDER: [DecisionRule; 6] = [
    DecisionRule::InsufficientIndoorData,
    DecisionRule::Comfortable,
    DecisionRule::InsufficientOutdoorData,
    DecisionRule::StrongWind,
    DecisionRule::IndoorTooHot,
    DecisionRule::IndoorNotHot,
];

/// Values the rules look at, computed once per evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionContext {
    pub h_int: Option<f64>,
    pub h_ext: Option<f64>,
    pub h_target: f64,
    pub is_open: bool,
    pub wind_speed: Option<f64>,
    pub wind_limit: f64,
    pub comfort_band: f64,
}

impl DecisionContext {
    /// Compute the three enthalpies and the contact state
    pub fn new(sample: &EnvironmentalSample, thresholds: &Thresholds) -> Self {
        Self {
            h_int: enthalpy(sample.indoor_temp, sample.indoor_hum),
            h_ext: enthalpy(sample.outdoor_temp, sample.outdoor_hum),
            h_target: enthalpy_of(thresholds.target_temp, thresholds.target_hum),
            is_open: is_contact_open(sample.contact.as_deref()),
            wind_speed: sample.wind_speed,
            wind_limit: thresholds.wind_limit,
            comfort_band: thresholds.comfort_band,
        }
    }

    /// `(delta_int, delta_ext)` relative to the target, when both sides are known
    pub fn deltas(&self) -> Option<(f64, f64)> {
        let h_int = self.h_int?;
        let h_ext = self.h_ext?;
        Some((h_int - self.h_target, h_ext - self.h_target))
    }

    fn pick(&self, if_open: (Action, ReasonCode), if_closed: (Action, ReasonCode)) -> (Action, ReasonCode) {
        if self.is_open {
            if_open
        } else {
            if_closed
        }
    }
}

/// Outcome of the rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub rule: DecisionRule,
    pub action: Action,
    pub reason: ReasonCode,
}

impl DecisionRule {
    /// Apply this rule; `None` when its guard does not match
    pub fn apply(&self, ctx: &DecisionContext) -> Option<Decision> {
        let (action, reason) = match self {
            DecisionRule::InsufficientIndoorData => {
                if ctx.h_int.is_some() {
                    return None;
                }
                (Action::Keep, ReasonCode::InsufficientIndoorData)
            }
            DecisionRule::Comfortable => {
                let h_int = ctx.h_int?;
                if (h_int - ctx.h_target).abs() > ctx.comfort_band {
                    return None;
                }
                // already comfortable: stop exchanging air
                ctx.pick(
                    (Action::Close, ReasonCode::CloseCold),
                    (Action::Keep, ReasonCode::ComfortableConditions),
                )
            }
            DecisionRule::InsufficientOutdoorData => {
                if ctx.h_ext.is_some() {
                    return None;
                }
                (Action::Keep, ReasonCode::InsufficientOutdoorData)
            }
            DecisionRule::StrongWind => {
                let wind = ctx.wind_speed?;
                if wind <= ctx.wind_limit {
                    return None;
                }
                ctx.pick(
                    (Action::Close, ReasonCode::StrongWind),
                    (Action::Keep, ReasonCode::StrongWind),
                )
            }
            DecisionRule::IndoorTooHot => {
                let (delta_int, delta_ext) = ctx.deltas()?;
                if delta_int <= 0.0 {
                    return None;
                }
                if delta_ext < delta_int {
                    ctx.pick(
                        (Action::Keep, ReasonCode::AlreadyOpenHot),
                        (Action::Open, ReasonCode::OpenHot),
                    )
                } else {
                    ctx.pick(
                        (Action::Close, ReasonCode::CloseHotter),
                        (Action::Keep, ReasonCode::KeepHot),
                    )
                }
            }
            DecisionRule::IndoorNotHot => {
                let (delta_int, delta_ext) = ctx.deltas()?;
                if delta_int > 0.0 {
                    return None;
                }
                if delta_ext > delta_int {
                    ctx.pick(
                        (Action::Keep, ReasonCode::AlreadyOpenWarm),
                        (Action::Open, ReasonCode::OpenWarm),
                    )
                } else {
                    ctx.pick(
                        (Action::Close, ReasonCode::CloseCold),
                        (Action::Keep, ReasonCode::KeepCold),
                    )
                }
            }
        };

        Some(Decision {
            rule: *self,
            action,
            reason,
        })
    }
}

/// Run the decision list, first match wins
pub fn decide(ctx: &DecisionContext) -> Decision {
    DECISION_ORDER
        .iter()
        .find_map(|rule| rule.apply(ctx))
        // unreachable: with h_int and h_ext both known one of the delta rules matches
        .unwrap_or(Decision {
            rule: DecisionRule::InsufficientIndoorData,
            action: Action::Keep,
            reason: ReasonCode::InsufficientIndoorData,
        })
}

/// Every rule whose guard matches, in decision order
pub fn matching_rules(ctx: &DecisionContext) -> Vec<DecisionRule> {
    DECISION_ORDER
        .iter()
        .filter(|rule| rule.apply(ctx).is_some())
        .copied()
        .collect()
}
