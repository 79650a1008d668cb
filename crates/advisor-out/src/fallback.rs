//! Built-in reason texts
//!
//! Used when no translation file can be loaded, or when a loaded file lacks a
//! reason. Both dictionaries cover every reason code.

use advisor_core::ReasonCode;

use crate::language::Language;

/// Built-in text for a reason in the given language
pub fn builtin_text(language: Language, reason: ReasonCode) -> &'static str {
    match language {
        Language::En => english(reason),
        Language::Pt => portuguese(reason),
    }
}

fn english(reason: ReasonCode) -> &'static str {
    match reason {
        ReasonCode::InsufficientIndoorData => "Insufficient indoor data",
        ReasonCode::ComfortableConditions => "Comfortable conditions",
        ReasonCode::InsufficientOutdoorData => "Insufficient outdoor data",
        ReasonCode::StrongWind => "Strong wind detected",
        ReasonCode::AlreadyOpenHot => "Already open, allowing hot and humid air to exit",
        ReasonCode::OpenHot => "Open to let hot and humid air exit",
        ReasonCode::CloseHotter => "Close to avoid even hotter air entering",
        ReasonCode::KeepHot => "Keep closed to avoid hotter air entering",
        ReasonCode::AlreadyOpenWarm => "Already open, allowing warmer air to enter",
        ReasonCode::OpenWarm => "Open to let warmer air enter",
        ReasonCode::CloseCold => "Close to conserve indoor heat",
        ReasonCode::KeepCold => "Keep closed to conserve indoor heat",
    }
}

fn portuguese(reason: ReasonCode) -> &'static str {
    match reason {
        ReasonCode::InsufficientIndoorData => "Dados interiores insuficientes",
        ReasonCode::ComfortableConditions => "Condições confortáveis",
        ReasonCode::InsufficientOutdoorData => "Dados exteriores insuficientes",
        ReasonCode::StrongWind => "Vento forte detectado",
        ReasonCode::AlreadyOpenHot => "Já está aberta permitindo saída do ar quente e húmido",
        ReasonCode::OpenHot => "Abrir para deixar sair o ar quente e húmido",
        ReasonCode::CloseHotter => "Fechar para evitar entrada de ar ainda mais quente",
        ReasonCode::KeepHot => "Manter fechada para evitar entrada de ar mais quente",
        ReasonCode::AlreadyOpenWarm => "Já está aberta permitindo entrada do ar mais quente",
        ReasonCode::OpenWarm => "Abrir para deixar entrar o ar mais quente",
        ReasonCode::CloseCold => "Fechar para conservar o calor interior",
        ReasonCode::KeepCold => "Manter fechada para conservar o calor interior",
    }
}
