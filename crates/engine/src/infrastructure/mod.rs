//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, the
//! catalog cache, the wire format, and runner configuration.

pub mod catalog;
pub mod export;
pub mod file_catalog;
pub mod notifier;
pub mod ports;
pub mod settings;
