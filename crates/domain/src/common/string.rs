//! String conversion utilities.
//!
//! Wizard form fields arrive as strings where "empty" means "not set". These
//! helpers keep that rule in one place.

/// Converts an empty (or whitespace-only) string to `None`, otherwise returns
/// the trimmed value.
///
/// # Examples
///
/// ```
/// use civmod_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank(" UNIT_ROME "), Some("UNIT_ROME"));
/// assert_eq!(none_if_blank(""), None);
/// assert_eq!(none_if_blank("   "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Owned version of [`none_if_blank`].
///
/// # Examples
///
/// ```
/// use civmod_domain::common::some_if_not_blank;
///
/// assert_eq!(some_if_not_blank("YIELD_GOLD"), Some("YIELD_GOLD".to_string()));
/// assert_eq!(some_if_not_blank(" "), None);
/// ```
pub fn some_if_not_blank(value: impl AsRef<str>) -> Option<String> {
    none_if_blank(value.as_ref()).map(str::to_string)
}

/// Returns true when the string holds something other than whitespace.
pub fn is_populated(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Extension trait providing `into_option` for optional text fields.
///
/// # Examples
///
/// ```
/// use civmod_domain::common::StringExt;
///
/// assert_eq!("hello".to_string().into_option(), Some("hello".to_string()));
/// assert_eq!(String::new().into_option(), None);
/// ```
pub trait StringExt {
    /// Converts to `None` if blank, otherwise the trimmed value.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_blank(self)
    }
}

impl StringExt for Option<String> {
    fn into_option(self) -> Option<String> {
        self.and_then(some_if_not_blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_unset() {
        assert_eq!(none_if_blank("\t\n"), None);
        assert!(!is_populated(" "));
        assert!(is_populated("0"));
    }

    #[test]
    fn option_into_option_flattens_blank() {
        assert_eq!(Some("  ".to_string()).into_option(), None);
        assert_eq!(None::<String>.into_option(), None);
        assert_eq!(Some(" x ".to_string()).into_option(), Some("x".to_string()));
    }
}
