//! Timer controller: owns the countdown state and drives its collaborators

use tracing::{debug, info, warn};

use super::{Mode, ModeDurations, TimerState};
use crate::services::{format_clock, Notifier, TimerDisplay};

/// Owns the timer state and notifies the display and notifier
pub struct TimerController {
    state: TimerState,
    display: Box<dyn TimerDisplay>,
    notifier: Box<dyn Notifier>,
}

impl TimerController {
    /// Create an idle focus countdown and render it once
    pub fn new(
        durations: ModeDurations,
        display: Box<dyn TimerDisplay>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let mut controller = Self {
            state: TimerState::new(durations),
            display,
            notifier,
        };
        controller.update_display();
        controller
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Begin counting down. No-op while already running.
    pub fn start(&mut self) {
        if !self.state.is_running {
            info!(
                "Starting {} countdown at {}s",
                self.state.mode.label(),
                self.state.remaining_seconds
            );
            self.state.is_running = true;
        }
    }

    /// Stop counting down. No-op while already paused.
    pub fn pause(&mut self) {
        if self.state.is_running {
            info!("Pausing countdown at {}s", self.state.remaining_seconds);
            self.state.is_running = false;
        }
    }

    /// Pause and restore the full length of the current mode
    pub fn reset(&mut self) {
        self.pause();
        self.state.restore();
        debug!("Reset {} to {}s", self.state.mode.label(), self.state.remaining_seconds);
        self.update_display();
    }

    /// Pause and switch to the full length of `mode`
    pub fn switch_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        self.pause();
        self.state.restore();
        info!("Switched to {} mode", mode.label());
        self.update_display();
    }

    /// Advance the countdown by one second
    pub(crate) fn tick(&mut self) {
        if !self.state.is_running {
            debug!("Ignoring tick while paused");
            return;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            self.update_display();
        }

        if self.state.remaining_seconds == 0 {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.pause();
        info!("{} countdown complete", self.state.mode.label());
        if let Err(e) = self.notifier.play_completion_sound() {
            warn!("Audio play failed: {}", e);
        }
    }

    fn update_display(&mut self) {
        let (minutes, seconds) = format_clock(self.state.remaining_seconds);
        self.display.render(&minutes, &seconds, self.state.mode);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::services::NotificationFailure;

    #[derive(Clone, Default)]
    struct RecordingDisplay {
        frames: Arc<Mutex<Vec<(String, String, Mode)>>>,
    }

    impl RecordingDisplay {
        fn last(&self) -> (String, String, Mode) {
            self.frames.lock().unwrap().last().cloned().unwrap()
        }

        fn count(&self) -> usize {
            self.frames.lock().unwrap().len()
        }
    }

    impl TimerDisplay for RecordingDisplay {
        fn render(&mut self, minutes: &str, seconds: &str, active_mode: Mode) {
            self.frames
                .lock()
                .unwrap()
                .push((minutes.to_string(), seconds.to_string(), active_mode));
        }
    }

    #[derive(Clone, Default)]
    struct CountingNotifier {
        calls: Arc<Mutex<usize>>,
        fail: bool,
    }

    impl CountingNotifier {
        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl Notifier for CountingNotifier {
        fn play_completion_sound(&mut self) -> Result<(), NotificationFailure> {
            *self.calls.lock().unwrap() += 1;
            if self.fail {
                Err(NotificationFailure::NoRuntime)
            } else {
                Ok(())
            }
        }
    }

    fn controller_with(
        durations: ModeDurations,
        notifier: CountingNotifier,
    ) -> (TimerController, RecordingDisplay) {
        let display = RecordingDisplay::default();
        let controller =
            TimerController::new(durations, Box::new(display.clone()), Box::new(notifier));
        (controller, display)
    }

    fn controller() -> (TimerController, RecordingDisplay, CountingNotifier) {
        let notifier = CountingNotifier::default();
        let (controller, display) = controller_with(ModeDurations::default(), notifier.clone());
        (controller, display, notifier)
    }

    fn assert_bounded(controller: &TimerController) {
        let state = controller.state();
        assert!(state.remaining_seconds <= state.full_duration());
    }

    #[test]
    fn construction_renders_idle_focus() {
        let (controller, display, _) = controller();
        let state = controller.state();
        assert_eq!(state.mode, Mode::Focus);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(display.last(), ("25".into(), "00".into(), Mode::Focus));
    }

    #[test]
    fn switch_mode_restores_full_duration_and_pauses() {
        let (mut controller, display, _) = controller();
        for mode in Mode::ALL {
            controller.start();
            controller.tick();
            controller.switch_mode(mode);

            let state = controller.state();
            assert_eq!(state.mode, mode);
            assert_eq!(state.remaining_seconds, ModeDurations::default().seconds(mode));
            assert!(!state.is_running);
            assert_eq!(display.last().2, mode);
            for other in Mode::ALL {
                assert_eq!(state.is_active(other), other == mode);
            }
        }
    }

    #[test]
    fn short_break_shows_five_minutes() {
        let (mut controller, display, _) = controller();
        controller.switch_mode(Mode::ShortBreak);
        assert_eq!(controller.state().remaining_seconds, 300);
        assert_eq!(display.last(), ("05".into(), "00".into(), Mode::ShortBreak));
    }

    #[test]
    fn ticks_decrement_while_running() {
        let (mut controller, display, _) = controller();
        controller.start();
        for _ in 0..3 {
            controller.tick();
            assert_bounded(&controller);
        }
        assert_eq!(controller.state().remaining_seconds, 1497);
        assert!(controller.is_running());
        assert_eq!(display.last(), ("24".into(), "57".into(), Mode::Focus));
    }

    #[test]
    fn start_is_idempotent() {
        let (mut controller, display, _) = controller();
        controller.start();
        controller.start();
        assert!(controller.is_running());
        assert_eq!(display.count(), 1);
    }

    #[test]
    fn pause_then_start_resumes_without_reset() {
        let (mut controller, _, _) = controller();
        controller.start();
        controller.tick();
        controller.tick();
        controller.pause();
        controller.pause();
        assert!(!controller.is_running());
        controller.start();
        controller.tick();
        assert_eq!(controller.state().remaining_seconds, 1497);
    }

    #[test]
    fn ticks_while_paused_are_ignored() {
        let (mut controller, display, notifier) = controller();
        controller.tick();
        assert_eq!(controller.state().remaining_seconds, 1500);
        assert_eq!(display.count(), 1);
        assert_eq!(notifier.calls(), 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut controller, display, _) = controller();
        controller.start();
        controller.tick();
        controller.reset();
        let once = controller.state();
        controller.reset();
        assert_eq!(controller.state(), once);
        assert_eq!(once.remaining_seconds, 1500);
        assert!(!once.is_running);
        assert_eq!(display.last(), ("25".into(), "00".into(), Mode::Focus));
    }

    #[test]
    fn completion_fires_once_on_the_tick_reaching_zero() {
        let (mut controller, display, notifier) = controller();
        controller.start();
        for _ in 0..1499 {
            controller.tick();
        }
        assert_eq!(controller.state().remaining_seconds, 1);
        assert_eq!(notifier.calls(), 0);

        controller.tick();
        let state = controller.state();
        assert_eq!(state.remaining_seconds, 0);
        assert!(!state.is_running);
        assert_eq!(notifier.calls(), 1);
        assert_eq!(display.last(), ("00".into(), "00".into(), Mode::Focus));

        controller.tick();
        assert_eq!(notifier.calls(), 1);
        assert_eq!(controller.state().remaining_seconds, 0);
    }

    #[test]
    fn starting_at_zero_completes_on_next_tick() {
        let (mut controller, display, notifier) = controller();
        controller.switch_mode(Mode::ShortBreak);
        controller.start();
        for _ in 0..300 {
            controller.tick();
        }
        assert_eq!(notifier.calls(), 1);
        let renders = display.count();

        controller.start();
        controller.tick();
        assert_eq!(notifier.calls(), 2);
        assert!(!controller.is_running());
        assert_eq!(controller.state().remaining_seconds, 0);
        assert_eq!(display.count(), renders);
    }

    #[test]
    fn notifier_failure_leaves_timer_usable() {
        let notifier = CountingNotifier {
            fail: true,
            ..Default::default()
        };
        let (mut controller, _) = controller_with(ModeDurations::new(1, 1, 1), notifier.clone());
        controller.start();
        for _ in 0..60 {
            controller.tick();
        }
        assert_eq!(notifier.calls(), 1);
        assert_eq!(controller.state().remaining_seconds, 0);
        assert!(!controller.is_running());

        controller.reset();
        assert_eq!(controller.state().remaining_seconds, 60);
    }
}
