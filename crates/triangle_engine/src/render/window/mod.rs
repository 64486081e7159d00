//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application                 │ ← owns the subsystem and the window
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────────┐
//!      │ WindowingSubsystem  │ ← trait (backend.rs)
//!      └────────┬────────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ vulkan::GlfwSubsystem │ ← GLFW, no client API (vulkan/window.rs)
//!   │ testing::FakeSubsystem│ ← scripted fake for unit tests
//!   └───────────────────────┘
//! ```

pub mod backend;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{WindowError, WindowResult, WindowingSubsystem};
