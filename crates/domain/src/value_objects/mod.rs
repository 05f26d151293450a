//! Value objects shared by wizard entities.

mod argument;
mod sourced;
mod yield_change;

pub use argument::{format_argument_lines, parse_argument_lines, Argument};
pub use sourced::{SourcedValue, ValueSource};
pub use yield_change::{parse_comma_list, YieldChange};
