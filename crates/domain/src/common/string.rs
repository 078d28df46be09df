//! String normalization utilities.

/// Trims an optional string and drops it when nothing is left.
///
/// # Examples
///
/// ```
/// use superhero_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank(Some("  Can fly ".to_string())), Some("Can fly".to_string()));
/// assert_eq!(none_if_blank(Some("   ".to_string())), None);
/// assert_eq!(none_if_blank(None), None);
/// ```
pub fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
