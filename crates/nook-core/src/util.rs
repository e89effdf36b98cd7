//! Shared utility functions used across multiple modules.

/// Normalize a free-text query for matching.
///
/// Returns the trimmed, lower-cased query, or `None` when nothing but
/// whitespace remains.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether a query has any non-whitespace content.
pub fn has_text(raw: &str) -> bool {
    !raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_query_rejects_blank() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t\n "), None);
    }

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  PodCast "), Some("podcast".to_string()));
    }

    #[test]
    fn has_text_ignores_whitespace() {
        assert!(has_text(" a "));
        assert!(!has_text("   "));
    }
}
