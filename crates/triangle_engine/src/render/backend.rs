//! Graphics backend extension point
//!
//! The lifecycle invokes the backend once, after the window exists and before
//! the main loop starts. Device, swapchain and pipeline setup will live behind
//! this trait.

use thiserror::Error;

/// Graphics backend errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend could not finish its setup; the main loop must not start
    #[error("{backend} backend initialization failed: {reason}")]
    InitializationFailed {
        /// Backend name
        backend: String,
        /// Failure description
        reason: String,
    },
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Graphics backend plugged into the application lifecycle
pub trait GraphicsBackend {
    /// Human-readable backend name for logs and errors
    fn name(&self) -> &str;

    /// One-time setup, called exactly once per run
    ///
    /// Any error is fatal: the application tears down and `run()` returns it.
    fn initialize(&mut self) -> BackendResult<()>;
}

/// Backend that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl GraphicsBackend for NullBackend {
    fn name(&self) -> &str {
        "null"
    }

    fn initialize(&mut self) -> BackendResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_backend_never_fails() {
        let mut backend = NullBackend;
        assert_eq!(backend.name(), "null");
        assert!(backend.initialize().is_ok());
        assert!(backend.initialize().is_ok());
    }

    #[test]
    fn test_error_names_backend() {
        let err = BackendError::InitializationFailed {
            backend: "vulkan".to_string(),
            reason: "no suitable GPU".to_string(),
        };
        assert_eq!(err.to_string(), "vulkan backend initialization failed: no suitable GPU");
    }
}
