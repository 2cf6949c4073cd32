//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::board::BoardError;
pub use crate::config::ConfigError;
pub use crate::events::network::NetworkError;
pub use crate::state::StateError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Board API-related errors
    #[error("Board API error: {0}")]
    Board(#[from] BoardError),

    /// Failed network events
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_board_error() {
        let board_error = BoardError::ApiError {
            status: 404,
            message: "Not Found".to_string(),
        };
        let app_error: AppError = board_error.into();
        assert!(matches!(app_error, AppError::Board(_)));
        assert!(app_error.to_string().contains("Board API error"));
        assert!(app_error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_app_error_from_network_error() {
        let network_error = NetworkError::Fetch(BoardError::ApiError {
            status: 502,
            message: "Bad Gateway".to_string(),
        });
        let app_error: AppError = network_error.into();
        assert!(matches!(app_error, AppError::Network(_)));
        assert!(app_error.to_string().contains("Failed to fetch posts"));
    }

    #[test]
    fn test_app_error_from_state_error() {
        let state_error = StateError::NetworkUnavailable;
        let app_error: AppError = state_error.into();
        assert!(matches!(app_error, AppError::State(_)));
        assert!(app_error.to_string().contains("State error"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_logger() {
        let error = AppError::Logger("already set".to_string());
        assert_eq!(error.to_string(), "Logger error: already set");
    }
}
