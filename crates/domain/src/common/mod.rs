//! Common utilities shared by domain types and the engine.

mod string;

pub use string::{is_populated, none_if_blank, some_if_not_blank, StringExt};
