//! Result and error types for Actuar.

use thiserror::Error;

/// Result type for Actuar operations
pub type ActuarResult<T> = Result<T, ActuarError>;

/// Errors that can occur in Actuar
#[derive(Debug, Error)]
pub enum ActuarError {
    /// A parameterized locator was resolved without all of its arguments
    #[error("locator '{template}' is missing arguments: {missing:?}")]
    MissingArguments {
        /// The locator template that was being resolved
        template: String,
        /// Required placeholder names absent from the supplied arguments,
        /// in declaration order
        missing: Vec<String>,
    },

    /// No element matched the locator within the allotted time
    #[error("timed out after {ms}ms waiting for {waited_for}")]
    Timeout {
        /// Description of what was being waited for
        waited_for: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// A wait condition was not met within the allotted time
    #[error("condition not met after {ms}ms: {description}")]
    ConditionTimeout {
        /// Description of the condition
        description: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Assertion failed
    #[error("assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Driver backend error
    #[error("driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// Invalid state error (operation called in wrong state)
    #[error("invalid state: {message}")]
    InvalidState {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ActuarError {
    /// Wrap a backend error message
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }
}
