//! # Triangle Engine
//!
//! Lifecycle scaffold for a windowed, Vulkan-ready graphics application.
//!
//! ## Features
//!
//! - **Fixed Lifecycle**: window, graphics backend, main loop, cleanup
//! - **GLFW Windowing**: fixed-size window with no client API attached
//! - **Pluggable Backend**: one initialization hook before the loop starts
//! - **Testable**: the windowing subsystem is a trait, so tests run headless
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use triangle_engine::prelude::*;
//!
//! fn main() {
//!     let config = ApplicationConfig::default();
//!     let mut app = Application::new(config, GlfwSubsystem::new(), NullBackend);
//!     if let Err(e) = app.run() {
//!         eprintln!("Application error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod core;
pub mod events;
pub mod foundation;
pub mod render;

mod application;

pub use application::{AppError, Application, LifecycleState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, Application, LifecycleState,
        core::config::{ApplicationConfig, EngineConfig, WindowConfig, Config},
        events::{EventLoop, LoopStats},
        render::{
            BackendError, GraphicsBackend, NullBackend,
            GlfwSubsystem, WindowError, WindowingSubsystem,
        },
    };
}
