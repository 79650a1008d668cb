//! Advisor Out: from recommendation to published state
//!
//! Maps an engine [`Recommendation`](advisor_core::Recommendation) onto what a
//! user sees: the configured label, a localized reason, an icon, and the
//! diagnostic attributes.
//!
//! # Flow
//!
//! ```text
//! Recommendation → label (StateLabels) ─┐
//!                → reason (ReasonTable) ├→ EntityState
//!                → icon / names / ids  ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use advisor_core::ReasonCode;
//! use advisor_out::{Language, ReasonTable};
//!
//! let table = ReasonTable::builtin(Language::from_tag("pt-PT"));
//! assert_eq!(table.translate(ReasonCode::StrongWind), "Vento forte detectado");
//! ```

pub mod fallback;
pub mod language;
pub mod presentation;
pub mod state;
pub mod translations;

pub use fallback::builtin_text;
pub use language::Language;
pub use presentation::{
    confidence_label, entity_id_for, friendly_name, icon_for, slugify, unique_id_for,
};
pub use state::{render_state, EntityState, StateAttributes};
pub use translations::{ReasonTable, TranslationError};
