//! Grid operation errors

/// Error type for grid operations.
///
/// The taxonomy has two buckets: invalid arguments (a data payload that is
/// not an array of record objects) and invalid state (paging before the
/// first render, or rendering twice). Both abort the triggering call with
/// no partial state mutation. Out-of-range page navigation is deliberately
/// NOT an error; it is ignored.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// A caller-supplied value was unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation that needs a rendered grid ran before `render`.
    #[error("grid has not been rendered; call render first")]
    NotRendered,

    /// `render` was called a second time.
    #[error("render may only be called once per grid; use set_data and re-page to load new data")]
    AlreadyRendered,
}

impl GridError {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns `true` for the invalid-argument bucket of the taxonomy.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for the invalid-state bucket of the taxonomy.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::NotRendered | Self::AlreadyRendered)
    }
}
