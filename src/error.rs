//! Unified error types for WebDriver-Events
//!
//! Faults raised by an underlying driver travel through the interception
//! layer untouched: listeners only ever borrow them, callers receive the
//! very value the driver returned.

use std::sync::Arc;
use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for WebDriver-Events
#[derive(Error, Debug)]
pub enum Error {
    /// No element matched a locator
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// Frame switch target does not exist
    #[error("No such frame: {0}")]
    NoSuchFrame(String),

    /// Window switch target does not exist
    #[error("No such window: {0}")]
    NoSuchWindow(String),

    /// No alert is currently open
    #[error("No alert present: {0}")]
    NoAlertPresent(String),

    /// Element is no longer attached to the DOM
    #[error("Stale element reference: {0}")]
    StaleElement(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Script execution failed
    #[error("Script execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// Invalid argument passed to the driver
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Capability not offered by the driver
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Generic driver failure
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Foreign fault raised by a driver implementation
    #[error(transparent)]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a new no such element error
    pub fn no_such_element<S: Into<String>>(msg: S) -> Self {
        Error::NoSuchElement(msg.into())
    }

    /// Create a new no such frame error
    pub fn no_such_frame<S: Into<String>>(msg: S) -> Self {
        Error::NoSuchFrame(msg.into())
    }

    /// Create a new no such window error
    pub fn no_such_window<S: Into<String>>(msg: S) -> Self {
        Error::NoSuchWindow(msg.into())
    }

    /// Create a new no alert present error
    pub fn no_alert_present<S: Into<String>>(msg: S) -> Self {
        Error::NoAlertPresent(msg.into())
    }

    /// Create a new stale element error
    pub fn stale_element<S: Into<String>>(msg: S) -> Self {
        Error::StaleElement(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new script execution failed error
    pub fn script_execution_failed<S: Into<String>>(msg: S) -> Self {
        Error::ScriptExecutionFailed(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a new unsupported operation error
    pub fn unsupported<S: Into<String>>(operation: S) -> Self {
        Error::Unsupported(operation.into())
    }

    /// Create a new generic driver error
    pub fn webdriver<S: Into<String>>(msg: S) -> Self {
        Error::WebDriver(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Wrap a foreign fault, keeping it shareable by reference
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Other(Arc::new(err))
    }

    /// The shared foreign fault, if this is one
    pub fn as_other(&self) -> Option<&Arc<dyn std::error::Error + Send + Sync>> {
        match self {
            Error::Other(inner) => Some(inner),
            _ => None,
        }
    }
}
