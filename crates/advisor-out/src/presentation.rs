//! Names, ids, icons and labels shown for an advisor

use advisor_core::{Action, Confidence, EntityType, DOMAIN};

use crate::language::Language;

pub use advisor_config::naming::{entity_id_for, slugify};

/// Stable unique id of an advisor entity
pub fn unique_id_for(entry_id: &str) -> String {
    format!("{}_{}", DOMAIN, entry_id)
}

/// Display name with the localized "Advice" suffix
pub fn friendly_name(base: &str, language: Language) -> String {
    format!("{} {}", base, language.advice_suffix())
}

/// Icon for the recommended action
pub fn icon_for(entity_type: EntityType, action: Action) -> &'static str {
    match (entity_type, action) {
        (EntityType::Door, Action::Open) => "mdi:door-open",
        (EntityType::Door, Action::Close) => "mdi:door",
        (EntityType::Window, Action::Open) => "mdi:window-open-variant",
        (EntityType::Window, Action::Close) => "mdi:window-closed-variant",
        (_, Action::Keep) => "mdi:check-circle",
    }
}

/// Confidence as shown in state attributes
pub fn confidence_label(confidence: Confidence, language: Language) -> &'static str {
    match (language, confidence) {
        (Language::Pt, Confidence::High) => "ALTA",
        (Language::Pt, Confidence::Low) => "BAIXA",
        (Language::En, Confidence::High) => "HIGH",
        (Language::En, Confidence::Low) => "LOW",
    }
}
