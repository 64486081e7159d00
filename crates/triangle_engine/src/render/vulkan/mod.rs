//! Vulkan-ready platform layer
//!
//! GLFW windows configured for a Vulkan surface. The Vulkan device and
//! swapchain themselves belong to a graphics backend plugged in through
//! [`crate::render::GraphicsBackend`].

pub mod window;

pub use window::{GlfwSubsystem, Window};
