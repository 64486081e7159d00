//! Application lifecycle controller
//!
//! `run()` drives four phases in a fixed order:
//!
//! 1. `init_window` - start the windowing subsystem and create the window
//! 2. `init_graphics_backend` - hand control to the graphics backend once
//! 3. `main_loop` - poll events until the user closes the window
//! 4. `cleanup` - destroy the window and shut the subsystem down
//!
//! Every phase returns a `Result`; the first error stops the sequence, the
//! cleanup phase still runs, and the error is handed back to the caller.
//! Cleanup only releases what was actually acquired.

use crate::core::config::ApplicationConfig;
use crate::events::{EventLoop, LoopStats};
use crate::render::backend::{BackendError, GraphicsBackend};
use crate::render::window::{WindowError, WindowingSubsystem};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Windowing subsystem or window creation failure
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Graphics backend failure
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// `run()` was called on an application that already ran
    #[error("Application has already been run (state: {0:?})")]
    AlreadyRun(LifecycleState),
}

/// Where the application is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, `run()` not called yet
    Created,
    /// Subsystem started and window created
    WindowReady,
    /// Graphics backend initialized
    BackendReady,
    /// Inside the main loop
    Running,
    /// Window closed and resources released
    Finished,
    /// A phase failed; whatever was acquired has been released
    Failed,
}

/// The windowed application
///
/// Owns the windowing subsystem, the window handle and the graphics backend
/// for the whole run. `run()` may be called once.
pub struct Application<S: WindowingSubsystem, B: GraphicsBackend> {
    config: ApplicationConfig,
    subsystem: S,
    backend: B,
    window: Option<S::Window>,
    subsystem_live: bool,
    state: LifecycleState,
    loop_stats: LoopStats,
}

impl<S: WindowingSubsystem, B: GraphicsBackend> Application<S, B> {
    /// Create an application; nothing is acquired until `run()`
    pub fn new(config: ApplicationConfig, subsystem: S, backend: B) -> Self {
        Self {
            config,
            subsystem,
            backend,
            window: None,
            subsystem_live: false,
            state: LifecycleState::Created,
            loop_stats: LoopStats::default(),
        }
    }

    /// Run the full lifecycle
    ///
    /// Returns once the user closes the window, or with the first fatal error.
    /// Teardown has completed in both cases. A second call is rejected with
    /// [`AppError::AlreadyRun`] and leaves everything untouched.
    pub fn run(&mut self) -> Result<(), AppError> {
        if self.state != LifecycleState::Created {
            log::error!("run() called again in state {:?}", self.state);
            return Err(AppError::AlreadyRun(self.state));
        }

        log::info!("Starting {}", self.config.application_name);

        let result = self.run_phases();
        if let Err(e) = &result {
            log::error!("Fatal: {e}");
        }

        self.cleanup();
        self.transition(if result.is_ok() {
            LifecycleState::Finished
        } else {
            LifecycleState::Failed
        });

        result
    }

    fn run_phases(&mut self) -> Result<(), AppError> {
        self.init_window()?;
        self.init_graphics_backend()?;
        self.main_loop();
        Ok(())
    }

    fn init_window(&mut self) -> Result<(), AppError> {
        self.subsystem.init()?;
        self.subsystem_live = true;

        self.config
            .validate()
            .map_err(|reason| WindowError::creation(&self.config.window, reason))?;
        let window = self.subsystem.create_window(&self.config.window)?;
        self.window = Some(window);

        log::info!(
            "Window \"{}\" created ({}x{})",
            self.config.window.title,
            self.config.window.width,
            self.config.window.height
        );
        self.transition(LifecycleState::WindowReady);
        Ok(())
    }

    fn init_graphics_backend(&mut self) -> Result<(), AppError> {
        log::info!("Initializing {} graphics backend", self.backend.name());
        self.backend.initialize()?;
        self.transition(LifecycleState::BackendReady);
        Ok(())
    }

    fn main_loop(&mut self) {
        self.transition(LifecycleState::Running);
        log::info!("Entering main loop");

        if let Some(window) = self.window.as_ref() {
            self.loop_stats = EventLoop::run(&mut self.subsystem, window);
        }
        log::info!("Main loop exited");
    }

    fn cleanup(&mut self) {
        if let Some(window) = self.window.take() {
            self.subsystem.destroy_window(window);
        }

        if self.subsystem_live {
            self.subsystem.terminate();
            self.subsystem_live = false;
            log::info!("Cleanup complete");
        }
    }

    fn transition(&mut self, next: LifecycleState) {
        log::debug!("Lifecycle {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether a window handle is currently held
    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Counters from the last main loop
    pub fn loop_stats(&self) -> LoopStats {
        self.loop_stats
    }

    /// Application configuration
    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    /// The windowing subsystem
    pub fn subsystem(&self) -> &S {
        &self.subsystem
    }

    /// The graphics backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<S: WindowingSubsystem, B: GraphicsBackend> Drop for Application<S, B> {
    fn drop(&mut self) {
        // No-op unless a panic unwound out of run()
        self.cleanup();
    }
}
