//! Host language selection
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Languages with their own reason texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Any `pt*` tag is Portuguese; everything else falls back to English
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("pt") {
            Language::Pt
        } else {
            Language::En
        }
    }

    /// Translation file for this language under a locales directory
    pub fn reason_file(&self, locales_dir: &Path) -> PathBuf {
        match self {
            Language::Pt => locales_dir.join("translations").join("pt.json"),
            Language::En => locales_dir.join("strings.json"),
        }
    }

    /// Suffix appended to the advisor's name
    pub fn advice_suffix(&self) -> &'static str {
        match self {
            Language::Pt => "Conselho",
            Language::En => "Advice",
        }
    }
}
