//! Name/value arguments attached to modifiers and requirements.

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;

/// A single `name: value` argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Both halves hold something.
    pub fn is_complete(&self) -> bool {
        none_if_blank(&self.name).is_some() && none_if_blank(&self.value).is_some()
    }
}

/// Parse one argument per line in `Name:Value` form.
///
/// The line is split on its first colon and both sides are trimmed. Lines
/// without a colon, or with nothing before it, are skipped.
///
/// ```
/// use civmod_domain::value_objects::parse_argument_lines;
///
/// let args = parse_argument_lines("YieldType:YIELD_SCIENCE\nAmount:100\nGarbageLine");
/// assert_eq!(args.len(), 2);
/// assert_eq!(args[1].value, "100");
/// ```
pub fn parse_argument_lines(text: &str) -> Vec<Argument> {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .filter_map(|(name, value)| {
            none_if_blank(name).map(|name| Argument::new(name, value.trim()))
        })
        .collect()
}

/// Inverse of [`parse_argument_lines`], used to refill an edit form.
pub fn format_argument_lines(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(|arg| format!("{}:{}", arg.name, arg.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_without_colon_are_ignored() {
        let args = parse_argument_lines("YieldType:YIELD_SCIENCE\nAmount:100\nGarbageLine");
        assert_eq!(
            args,
            vec![
                Argument::new("YieldType", "YIELD_SCIENCE"),
                Argument::new("Amount", "100"),
            ]
        );
    }

    #[test]
    fn splits_on_first_colon_only() {
        let args = parse_argument_lines("Tag: A:B ");
        assert_eq!(args, vec![Argument::new("Tag", "A:B")]);
    }

    #[test]
    fn blank_names_are_skipped() {
        assert!(parse_argument_lines(":orphan\n\n  \n").is_empty());
    }

    #[test]
    fn format_reverses_parse() {
        let text = "YieldType:YIELD_GOLD\nAmount:2";
        assert_eq!(format_argument_lines(&parse_argument_lines(text)), text);
    }

    #[test]
    fn completeness_requires_both_halves() {
        assert!(Argument::new("Foo", "Bar").is_complete());
        assert!(!Argument::new("Foo", " ").is_complete());
        assert!(!Argument::new("", "Bar").is_complete());
    }
}
