//! Main event loop
//!
//! Busy-polls the platform until the close signal is raised on the window.
//! Each iteration checks the signal first and only then drains the queue, so
//! a window that is already closing is never polled again. There is no sleep
//! between iterations; a per-frame render call will slot in after the drain.

use crate::render::window::WindowingSubsystem;

/// Counters collected over one loop run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    /// Iterations that drained the event queue
    pub iterations: u64,
    /// Total events delivered to the window
    pub events_drained: u64,
}

/// Synchronous polling loop
#[derive(Debug, Default, Clone, Copy)]
pub struct EventLoop;

impl EventLoop {
    /// Poll until `subsystem` reports the close signal for `window`
    pub fn run<S: WindowingSubsystem>(subsystem: &mut S, window: &S::Window) -> LoopStats {
        let mut stats = LoopStats::default();

        while !subsystem.should_close(window) {
            let drained = subsystem.poll_events(window);
            stats.iterations += 1;
            stats.events_drained += drained as u64;
        }

        log::debug!(
            "Close signal observed after {} iterations ({} events)",
            stats.iterations,
            stats.events_drained
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WindowConfig;
    use crate::render::window::testing::{Call, FakeSubsystem};

    fn open(subsystem: &mut FakeSubsystem) -> crate::render::window::testing::FakeWindow {
        subsystem.init().unwrap();
        subsystem.create_window(&WindowConfig::default()).unwrap()
    }

    #[test]
    fn test_close_already_set_skips_polling() {
        let mut subsystem = FakeSubsystem::closing_after(0);
        let window = open(&mut subsystem);

        let stats = EventLoop::run(&mut subsystem, &window);

        assert_eq!(stats, LoopStats::default());
        assert_eq!(subsystem.polls(), 0);
        assert_eq!(subsystem.count(|c| matches!(c, Call::ShouldClose(_))), 1);
    }

    #[test]
    fn test_runs_until_close_signal() {
        let mut subsystem = FakeSubsystem::closing_after(5).with_events_per_poll(3);
        let window = open(&mut subsystem);

        let stats = EventLoop::run(&mut subsystem, &window);

        assert_eq!(stats.iterations, 5);
        assert_eq!(stats.events_drained, 15);
        assert_eq!(subsystem.polls(), 5);
    }

    #[test]
    fn test_each_iteration_checks_before_polling() {
        let mut subsystem = FakeSubsystem::closing_after(2);
        let window = open(&mut subsystem);

        EventLoop::run(&mut subsystem, &window);

        let loop_calls: Vec<Call> = subsystem
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::ShouldClose(_) | Call::PollEvents(_)))
            .collect();
        assert_eq!(
            loop_calls,
            vec![
                Call::ShouldClose(window.id),
                Call::PollEvents(window.id),
                Call::ShouldClose(window.id),
                Call::PollEvents(window.id),
                Call::ShouldClose(window.id),
            ]
        );
    }

    #[test]
    fn test_close_on_first_iteration_drains_once() {
        let mut subsystem = FakeSubsystem::closing_after(1).with_events_per_poll(4);
        let window = open(&mut subsystem);

        let stats = EventLoop::run(&mut subsystem, &window);

        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.events_drained, 4);
    }
}
