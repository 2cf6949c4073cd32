//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The network worker is gone or was never attached
    #[error("Network worker unavailable")]
    NetworkUnavailable,

    /// No post at the given list position
    #[error("Post not found at index {index}")]
    PostNotFound { index: usize },
}
