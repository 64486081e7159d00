//! # Application Configuration
//!
//! Configuration for the window and the engine core. The scaffold runs with
//! the defaults (a fixed 800x600 window titled after the application), but an
//! embedding application can load the same structures from TOML or RON.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// Fixed window width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Fixed window height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// Identity of the scaffold application, also used as its window title
pub const DEFAULT_APPLICATION_NAME: &str = "HelloTriangleApplication";

/// # Window Configuration
///
/// Dimensions and title of the single application window. Windows are always
/// created without a client API and without resizing, so those are not
/// configurable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Window title text
    pub title: String,
}

impl WindowConfig {
    /// Create a new window configuration
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    /// Validate the window parameters before handing them to the platform
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window dimensions must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if self.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_APPLICATION_NAME)
    }
}

/// # Engine Configuration
///
/// Core engine behavior that is not tied to the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration handed to [`crate::Application`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application identity; the window title is derived from it
    pub application_name: String,
    /// Window configuration
    pub window: WindowConfig,
    /// Engine core configuration
    pub engine: EngineConfig,
}

impl ApplicationConfig {
    /// Create a configuration whose window is titled with the application name
    pub fn new(app_name: impl Into<String>) -> Self {
        let application_name = app_name.into();
        Self {
            window: WindowConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, application_name.clone()),
            application_name,
            engine: EngineConfig::default(),
        }
    }

    /// Override the window dimensions
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Override the engine configuration
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.application_name.is_empty() {
            return Err("Application name cannot be empty".to_string());
        }
        if self.window.title != self.application_name {
            return Err(format!(
                "Window title \"{}\" does not match application name \"{}\"",
                self.window.title, self.application_name
            ));
        }
        self.window.validate()
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_APPLICATION_NAME)
    }
}

impl Config for ApplicationConfig {}
