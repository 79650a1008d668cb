//! Advisor Engine: enthalpy comparison and the OPEN/CLOSE/KEEP policy
//!
//! A pure, memoryless function from a sensor sample and thresholds to a
//! recommendation. The only "state" it looks at is the contact sensor value
//! carried by the sample.
//!
//! # Flow
//!
//! ```text
//! EnvironmentalSample ─┐
//!                      ├→ enthalpy ×3 → DecisionContext → decision list → Recommendation
//! Thresholds ──────────┘                                   (first match)
//! ```
//!
//! # Example
//!
//! ```
//! use advisor_core::{Action, EnvironmentalSample, ReasonCode, Thresholds};
//! use advisor_engine::evaluate;
//!
//! let sample = EnvironmentalSample::new()
//!     .indoor(28.0, 60.0)
//!     .outdoor(20.0, 40.0)
//!     .contact("off");
//!
//! let rec = evaluate(&sample, &Thresholds::default());
//! assert_eq!(rec.action, Action::Open);
//! assert_eq!(rec.reason_code, ReasonCode::OpenHot);
//! ```

pub mod contact;
pub mod enthalpy;
pub mod rule;

pub use contact::is_contact_open;
pub use enthalpy::{enthalpy, enthalpy_of};
pub use rule::{decide, matching_rules, Decision, DecisionContext, DecisionRule, DECISION_ORDER};

use advisor_core::{Diagnostics, EnvironmentalSample, Recommendation, Thresholds};

/// Evaluate a sample against the thresholds
pub fn evaluate(sample: &EnvironmentalSample, thresholds: &Thresholds) -> Recommendation {
    explain(sample, thresholds).1
}

/// Like [`evaluate`], also reporting which rule fired
pub fn explain(
    sample: &EnvironmentalSample,
    thresholds: &Thresholds,
) -> (DecisionRule, Recommendation) {
    let ctx = DecisionContext::new(sample, thresholds);
    let decision = decide(&ctx);
    let diagnostics = diagnostics(&ctx, decision.rule);

    (
        decision.rule,
        Recommendation::new(decision.action, decision.reason, diagnostics),
    )
}

fn diagnostics(ctx: &DecisionContext, rule: DecisionRule) -> Diagnostics {
    let wind_speed = match rule {
        DecisionRule::StrongWind => ctx.wind_speed.map(round1),
        _ => None,
    };

    Diagnostics {
        enthalpy_indoor: ctx.h_int.map(round2),
        enthalpy_outdoor: ctx.h_ext.map(round2),
        enthalpy_target: round2(ctx.h_target),
        wind_speed,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
