//! Contact sensor interpretation

const OPEN_STATES: [&str; 4] = ["on", "open", "true", "aberto"];

/// Whether a raw contact sensor value means the opening is open.
///
/// Matching is case-insensitive; anything else, including a missing value,
/// counts as closed.
pub fn is_contact_open(contact: Option<&str>) -> bool {
    contact.is_some_and(|value| {
        OPEN_STATES
            .iter()
            .any(|open| open.eq_ignore_ascii_case(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_values() {
        for value in ["on", "ON", "open", "Open", "true", "TRUE", "aberto", "Aberto"] {
            assert!(is_contact_open(Some(value)), "{value} should be open");
        }
    }

    #[test]
    fn test_closed_values() {
        for value in ["off", "closed", "false", "fechado", "", " on", "unknown"] {
            assert!(!is_contact_open(Some(value)), "{value} should be closed");
        }
        assert!(!is_contact_open(None));
    }
}
