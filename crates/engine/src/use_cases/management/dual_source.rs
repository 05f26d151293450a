//! Form state for fields that take either a catalog pick or free text.

use civmod_domain::{SourcedValue, ValueSource};

/// The dropdown value, the text box value, and the toggle between them.
///
/// Both inputs are kept so flipping the toggle back and forth does not lose
/// what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualSourceInput {
    pub use_custom: bool,
    pub selected: String,
    pub custom_text: String,
}

impl DualSourceInput {
    pub fn catalog(id: impl Into<String>) -> Self {
        Self {
            use_custom: false,
            selected: id.into(),
            custom_text: String::new(),
        }
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self {
            use_custom: true,
            selected: String::new(),
            custom_text: text.into(),
        }
    }

    /// Reopen a stored value in the form.
    ///
    /// Values saved by an editor keep their tag. Values read from a template
    /// are looked up with `in_catalog`; anything not found there, including
    /// when the catalog has not loaded yet, opens as custom text.
    pub fn from_stored(value: Option<&SourcedValue>, in_catalog: impl FnOnce(&str) -> bool) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        let resolved = value.clone().resolve(in_catalog);
        match resolved.source() {
            ValueSource::Catalog => Self::catalog(resolved.into_value()),
            ValueSource::Custom | ValueSource::Unresolved => Self::custom(resolved.into_value()),
        }
    }

    /// The value the toggle points at, or `None` when that side is blank.
    pub fn to_value(&self) -> Option<SourcedValue> {
        if self.use_custom {
            let text = self.custom_text.trim();
            (!text.is_empty()).then(|| SourcedValue::custom(text))
        } else {
            let id = self.selected.trim();
            (!id.is_empty()).then(|| SourcedValue::catalog(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_decides_which_side_is_saved() {
        let mut input = DualSourceInput {
            use_custom: false,
            selected: "UNIT_WARRIOR".into(),
            custom_text: "UNIT_MY_WARRIOR".into(),
        };
        assert_eq!(input.to_value(), Some(SourcedValue::catalog("UNIT_WARRIOR")));

        input.use_custom = true;
        assert_eq!(input.to_value(), Some(SourcedValue::custom("UNIT_MY_WARRIOR")));
    }

    #[test]
    fn blank_authoritative_side_is_none() {
        let input = DualSourceInput {
            use_custom: true,
            selected: "UNIT_WARRIOR".into(),
            custom_text: " ".into(),
        };
        assert_eq!(input.to_value(), None);
    }

    #[test]
    fn stored_tag_wins_over_catalog_lookup() {
        let stored = SourcedValue::custom("UNIT_WARRIOR");
        let input = DualSourceInput::from_stored(Some(&stored), |_| true);
        assert!(input.use_custom);
        assert_eq!(input.custom_text, "UNIT_WARRIOR");
    }

    #[test]
    fn unresolved_value_is_looked_up_in_catalog() {
        let stored = SourcedValue::unresolved("UNIT_WARRIOR");
        assert!(!DualSourceInput::from_stored(Some(&stored), |v| v == "UNIT_WARRIOR").use_custom);
        assert!(DualSourceInput::from_stored(Some(&stored), |_| false).use_custom);
    }
}
