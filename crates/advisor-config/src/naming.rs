//! Slugs and published entity ids
//!
//! Two entries whose names slug to the same id would publish over each
//! other, so uniqueness is checked on [`entity_id_for`], not on the name.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref UNDERSCORES: Regex = Regex::new(r"_+").unwrap();
}

/// Slug of a display name ("Porta da Cozinha" → "porta_da_cozinha").
///
/// Characters outside `[a-z0-9]` are dropped, not transliterated.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = NON_SLUG.replace_all(&lower, "");
    let spaced = WHITESPACE.replace_all(&stripped, "_");
    let collapsed = UNDERSCORES.replace_all(&spaced, "_");
    collapsed.trim_matches('_').to_string()
}

/// Published entity id (`sensor.<slug>_advice`)
pub fn entity_id_for(name: &str) -> String {
    format!("sensor.{}_advice", slugify(name))
}
