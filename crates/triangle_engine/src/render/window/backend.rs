//! Backend-agnostic windowing subsystem trait
//!
//! The windowing library behind the application window is process-wide
//! global state. This module models it as an explicit service object with an
//! init/terminate lifecycle, owned by the application and passed by reference
//! to the window manager and event loop, so tests can substitute a fake.

use crate::core::config::WindowConfig;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The windowing subsystem failed to start
    #[error("Windowing subsystem initialization failed: {0}")]
    SubsystemInit(String),

    /// The subsystem is running but no window handle was obtained
    #[error("Failed to create {width}x{height} window \"{title}\": {reason}")]
    WindowCreation {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
        /// Requested title
        title: String,
        /// Platform-reported reason
        reason: String,
    },
}

impl WindowError {
    /// Build a creation error for the given request
    pub fn creation(config: &WindowConfig, reason: impl Into<String>) -> Self {
        Self::WindowCreation {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
            reason: reason.into(),
        }
    }
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Process-wide windowing service
///
/// Every call happens on the thread that owns the application. Implementations
/// may assume the calling order enforced by [`crate::Application`]:
/// `init` once, then at most one `create_window`, any number of
/// `should_close`/`poll_events` on that window, `destroy_window` with the same
/// handle, and finally `terminate` once.
pub trait WindowingSubsystem {
    /// Opaque handle to one live platform window
    type Window;

    /// Start the subsystem
    ///
    /// Must succeed before any other method is called.
    fn init(&mut self) -> WindowResult<()>;

    /// Create a fixed-size window with no client API attached
    ///
    /// The surface is left for a graphics backend to claim, and the window is
    /// not resizable.
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Self::Window>;

    /// Release the platform resources behind `window`
    ///
    /// The handle is consumed, so a window cannot be destroyed twice.
    fn destroy_window(&mut self, window: Self::Window);

    /// Whether the user has asked for `window` to close
    fn should_close(&self, window: &Self::Window) -> bool;

    /// Drain every pending platform event without blocking
    ///
    /// Returns the number of events delivered to `window`.
    fn poll_events(&mut self, window: &Self::Window) -> usize;

    /// Shut the subsystem down
    ///
    /// Called once, after the last window has been destroyed.
    fn terminate(&mut self);
}
