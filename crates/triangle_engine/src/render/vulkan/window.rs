//! Window management using GLFW
//!
//! Windows are created without an OpenGL context so the surface stays free
//! for a Vulkan backend.

use crate::core::config::WindowConfig;
use crate::render::window::{WindowError, WindowResult, WindowingSubsystem};

/// GLFW window with its event receiver
pub struct Window {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    title: String,
}

/// GLFW-backed windowing subsystem
///
/// Holds the library handle between `init` and `terminate`. Each `PWindow`
/// keeps its own reference to the library, so GLFW shuts down once the window
/// and this handle are both released.
#[derive(Default)]
pub struct GlfwSubsystem {
    glfw: Option<glfw::Glfw>,
}

impl GlfwSubsystem {
    /// Create an uninitialized subsystem
    pub fn new() -> Self {
        Self { glfw: None }
    }

    /// Whether `init` succeeded and `terminate` has not run yet
    pub fn is_initialized(&self) -> bool {
        self.glfw.is_some()
    }
}

impl WindowingSubsystem for GlfwSubsystem {
    type Window = Window;

    fn init(&mut self) -> WindowResult<()> {
        if self.glfw.is_some() {
            return Err(WindowError::SubsystemInit("GLFW is already initialized".to_string()));
        }

        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::SubsystemInit(format!("GLFW: {e:?}")))?;

        log::info!("GLFW {} initialized", glfw::get_version_string());
        self.glfw = Some(glfw);
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Window> {
        let glfw = self
            .glfw
            .as_mut()
            .ok_or_else(|| WindowError::creation(config, "GLFW is not initialized"))?;

        config
            .validate()
            .map_err(|reason| WindowError::creation(config, reason))?;

        // No OpenGL context; the surface belongs to the graphics backend
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::creation(config, "GLFW returned no window"))?;

        window.set_close_polling(true);

        log::debug!(
            "Created GLFW window \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Window {
            window,
            events,
            title: config.title.clone(),
        })
    }

    fn destroy_window(&mut self, window: Window) {
        log::debug!("Destroying GLFW window \"{}\"", window.title);
        drop(window);
    }

    fn should_close(&self, window: &Window) -> bool {
        window.window.should_close()
    }

    fn poll_events(&mut self, window: &Window) -> usize {
        let Some(glfw) = self.glfw.as_mut() else {
            return 0;
        };
        glfw.poll_events();

        let mut drained = 0;
        for (time, event) in glfw::flush_messages(&window.events) {
            log::trace!("[{time:.3}] {event:?}");
            drained += 1;
        }
        drained
    }

    fn terminate(&mut self) {
        if self.glfw.take().is_some() {
            log::info!("GLFW terminated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_subsystem_is_uninitialized() {
        let subsystem = GlfwSubsystem::new();
        assert!(!subsystem.is_initialized());
        assert!(!GlfwSubsystem::default().is_initialized());
    }

    #[test]
    fn test_create_window_before_init_fails() {
        let mut subsystem = GlfwSubsystem::new();
        let config = WindowConfig::default();

        let err = subsystem.create_window(&config).err().unwrap();
        assert_eq!(err, WindowError::creation(&config, "GLFW is not initialized"));
    }

    #[test]
    fn test_terminate_without_init_is_noop() {
        let mut subsystem = GlfwSubsystem::new();
        subsystem.terminate();
        subsystem.terminate();
        assert!(!subsystem.is_initialized());
    }
}
