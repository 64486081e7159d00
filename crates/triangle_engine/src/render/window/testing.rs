//! Scripted windowing subsystem for unit tests

use super::backend::{WindowError, WindowResult, WindowingSubsystem};
use crate::core::config::WindowConfig;
use std::cell::{Cell, RefCell};

/// One recorded subsystem call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Init,
    CreateWindow { width: u32, height: u32, title: String },
    ShouldClose(u32),
    PollEvents(u32),
    DestroyWindow(u32),
    Terminate,
}

/// Fake window handle
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FakeWindow {
    pub id: u32,
}

/// Records every call and follows a fixed script
#[derive(Debug, Default)]
pub(crate) struct FakeSubsystem {
    /// `init` reports failure
    pub fail_init: bool,
    /// `create_window` reports failure
    pub fail_create: bool,
    /// The close signal is raised once this many polls have happened
    pub close_after_polls: usize,
    /// Events delivered by each poll
    pub events_per_poll: usize,
    calls: RefCell<Vec<Call>>,
    polls: Cell<usize>,
    next_id: u32,
}

impl FakeSubsystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn closing_after(polls: usize) -> Self {
        Self {
            close_after_polls: polls,
            ..Self::default()
        }
    }

    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn with_events_per_poll(mut self, events: usize) -> Self {
        self.events_per_poll = events;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| predicate(*c)).count()
    }

    pub fn polls(&self) -> usize {
        self.polls.get()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl WindowingSubsystem for FakeSubsystem {
    type Window = FakeWindow;

    fn init(&mut self) -> WindowResult<()> {
        self.record(Call::Init);
        if self.fail_init {
            return Err(WindowError::SubsystemInit("fake display unavailable".to_string()));
        }
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<FakeWindow> {
        self.record(Call::CreateWindow {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
        });
        if self.fail_create {
            return Err(WindowError::creation(config, "fake platform refused"));
        }
        config
            .validate()
            .map_err(|reason| WindowError::creation(config, reason))?;

        self.next_id += 1;
        Ok(FakeWindow { id: self.next_id })
    }

    fn destroy_window(&mut self, window: FakeWindow) {
        self.record(Call::DestroyWindow(window.id));
    }

    fn should_close(&self, window: &FakeWindow) -> bool {
        self.record(Call::ShouldClose(window.id));
        self.polls.get() >= self.close_after_polls
    }

    fn poll_events(&mut self, window: &FakeWindow) -> usize {
        self.record(Call::PollEvents(window.id));
        self.polls.set(self.polls.get() + 1);
        self.events_per_poll
    }

    fn terminate(&mut self) {
        self.record(Call::Terminate);
    }
}
