//! Rendering-facing modules
//!
//! - **`window`**: windowing subsystem contract and errors
//! - **`vulkan`**: GLFW implementation configured for Vulkan
//! - **`backend`**: graphics backend extension point

pub mod backend;
pub mod vulkan;
pub mod window;

pub use backend::{BackendError, GraphicsBackend, NullBackend};
pub use vulkan::GlfwSubsystem;
pub use window::{WindowError, WindowResult, WindowingSubsystem};
