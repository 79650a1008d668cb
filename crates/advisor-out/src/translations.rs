//! Reason translation tables
//!
//! One [`ReasonTable`] per advisor and language, loaded when the advisor is
//! created or reconfigured and passed to whoever renders its state. Files
//! follow the integration strings format: a top-level `reasons` object keyed
//! by `reason_<code>`.

use advisor_core::{AdvisorError, ReasonCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::fallback::builtin_text;
use crate::language::Language;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no 'reasons' section")]
    MissingReasons,
}

impl From<TranslationError> for AdvisorError {
    fn from(err: TranslationError) -> Self {
        AdvisorError::TranslationError(err.to_string())
    }
}

/// Strings file layout; everything except `reasons` is ignored
#[derive(Debug, Deserialize)]
struct StringsFile {
    reasons: Option<HashMap<String, String>>,
}

/// Reason texts for one language
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonTable {
    language: Language,
    entries: HashMap<ReasonCode, String>,
}

impl ReasonTable {
    /// Table backed by the built-in dictionary only
    pub fn builtin(language: Language) -> Self {
        let entries = ReasonCode::ALL
            .into_iter()
            .map(|reason| (reason, builtin_text(language, reason).to_string()))
            .collect();
        Self { language, entries }
    }

    /// Parse a strings file
    pub fn from_json(json: &str, language: Language) -> Result<Self, TranslationError> {
        let file: StringsFile = serde_json::from_str(json)?;
        let reasons = file.reasons.ok_or(TranslationError::MissingReasons)?;

        let mut entries = HashMap::new();
        for (key, text) in reasons {
            match ReasonCode::from_translation_key(&key) {
                Some(reason) => {
                    entries.insert(reason, text);
                }
                None => tracing::debug!(key = %key, "ignoring unknown reason key"),
            }
        }

        Ok(Self { language, entries })
    }

    /// Read and parse a strings file
    pub fn from_file(path: &Path, language: Language) -> Result<Self, TranslationError> {
        let content = std::fs::read_to_string(path).map_err(|source| TranslationError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content, language)
    }

    /// Load the file for `language` under `locales_dir`, falling back to the
    /// built-in dictionary when it is missing or unusable
    pub fn load(locales_dir: &Path, language: Language) -> Self {
        let path = language.reason_file(locales_dir);

        if !path.exists() {
            tracing::warn!(path = %path.display(), "translation file not found, using built-in reasons");
            return Self::builtin(language);
        }

        match Self::from_file(&path, language) {
            Ok(table) => {
                tracing::debug!(
                    path = %path.display(),
                    count = table.len(),
                    "loaded reason translations"
                );
                table
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load translations, using built-in reasons");
                Self::builtin(language)
            }
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text for a reason; the built-in text when the table lacks it
    pub fn translate(&self, reason: ReasonCode) -> String {
        if let Some(text) = self.entries.get(&reason) {
            return text.clone();
        }

        let fallback = builtin_text(self.language, reason);
        tracing::warn!(
            key = %reason.translation_key(),
            fallback,
            "no translation found, using built-in text"
        );
        fallback.to_string()
    }
}
