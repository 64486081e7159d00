//! # Core Engine Module
//!
//! Shared configuration used by the lifecycle controller and the window
//! manager.

pub mod config;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    WindowConfig,
    Config,
    ConfigError,
};
