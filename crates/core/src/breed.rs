//! Breed input rules: name limits, sub-breed list cleaning, search-term
//! normalization and pagination bounds.
//!
//! Everything here is pure so the HTTP layer and the seed loader apply
//! the same rules before anything reaches the repositories.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Column width of `breeds.name` and `sub_breeds.name`.
pub const MAX_NAME_LEN: usize = 255;

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Upper bound on `limit` applied by the API unless configured otherwise.
pub const DEFAULT_MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Trim surrounding whitespace from a breed or sub-breed name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// Returns `true` if the name is empty once trimmed.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Trim every sub-breed name and drop the blank ones.
///
/// Order is preserved and duplicates are kept: two entries that differ
/// only by case, or that are identical, both become rows.
pub fn clean_sub_breed_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Normalize a `?search=` value. Blank or missing means "no filter".
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Escape `\`, `%` and `_` so the term matches literally inside an
/// `ILIKE ... ESCAPE '\'` pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build the `%term%` pattern used for case-insensitive substring search.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_blank_entries() {
        let cleaned = clean_sub_breed_names(["Yellow", "Chocolate", ""]);
        assert_eq!(cleaned, vec!["Yellow", "Chocolate"]);
    }

    #[test]
    fn clean_drops_whitespace_only_and_trims() {
        let cleaned = clean_sub_breed_names(vec!["  Black ".to_string(), "   ".to_string()]);
        assert_eq!(cleaned, vec!["Black"]);
    }

    #[test]
    fn clean_keeps_duplicates_and_order() {
        let cleaned = clean_sub_breed_names(["toy", "Toy", "toy"]);
        assert_eq!(cleaned, vec!["toy", "Toy", "toy"]);
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn normalize_name_trims() {
        assert_eq!(normalize_name("  Labrador "), "Labrador");
    }

    #[test]
    fn empty_search_is_no_filter() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("")), None);
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some(" lab ")), Some("lab".to_string()));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(contains_pattern("lab"), "%lab%");
    }

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_LIMIT, 100), 50);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), DEFAULT_PAGE_LIMIT, 100), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_PAGE_LIMIT, 100), 1);
        assert_eq!(clamp_limit(Some(-3), DEFAULT_PAGE_LIMIT, 100), 1);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(10)), 10);
    }
}
