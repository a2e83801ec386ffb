//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// No capability declaration is registered for a window identity
    #[error("No capability declaration for window: {0}")]
    CapabilityNotFound(String),

    /// Platform service not available
    #[error("Platform service not available: {0}")]
    Unavailable(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
