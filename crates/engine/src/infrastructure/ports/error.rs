//! Error types for port operations.

/// Reference catalog lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The lookup ran but failed - includes the category for tracing.
    #[error("Catalog request for {category} failed: {message}")]
    RequestFailed { category: String, message: String },

    /// No catalog backend is reachable.
    #[error("Catalog service unavailable")]
    Unavailable,

    /// The backend answered with something that is not an option list.
    #[error("Malformed catalog data: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn request_failed(category: impl ToString, message: impl ToString) -> Self {
        Self::RequestFailed {
            category: category.to_string(),
            message: message.to_string(),
        }
    }

    pub fn malformed(message: impl ToString) -> Self {
        Self::Malformed(message.to_string())
    }
}
