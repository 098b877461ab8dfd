//! Error types for the search tree.

use thiserror::Error as ThisError;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the tree.
///
/// A missing key is not an error: lookups report absence with `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A required key was null.
    ///
    /// Raised before any traversal or mutation takes place.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
