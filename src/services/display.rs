//! Display collaborator and clock formatting

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::state::Mode;

/// Rendering surface notified on every timer state change
pub trait TimerDisplay: Send + 'static {
    /// Show `minutes:seconds` (both zero-padded to two digits) and mark
    /// `active_mode` as the only active mode control
    fn render(&mut self, minutes: &str, seconds: &str, active_mode: Mode);
}

/// Split remaining seconds into zero-padded minute and second texts
pub fn format_clock(remaining_seconds: u64) -> (String, String) {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    (format!("{:02}", minutes), format!("{:02}", seconds))
}

/// Title label shown alongside the clock, e.g. `24:57 - Pomodoro Timer`
pub fn title(minutes: &str, seconds: &str, app_name: &str) -> String {
    format!("{}:{} - {}", minutes, seconds, app_name)
}

/// Last rendered view of the timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub minutes: String,
    pub seconds: String,
    pub active_mode: Mode,
    pub title: String,
}

impl Frame {
    pub fn new(minutes: &str, seconds: &str, active_mode: Mode, app_name: &str) -> Self {
        Self {
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
            active_mode,
            title: title(minutes, seconds, app_name),
        }
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.active_mode == mode
    }

    /// Clock text as `MM:SS`
    pub fn clock(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

/// Display that publishes each frame on a watch channel
#[derive(Debug)]
pub struct WatchDisplay {
    app_name: String,
    frame_tx: watch::Sender<Frame>,
}

impl WatchDisplay {
    /// Create the display together with a receiver of published frames
    pub fn new(app_name: impl Into<String>) -> (Self, watch::Receiver<Frame>) {
        let app_name = app_name.into();
        let (minutes, seconds) = format_clock(0);
        let (frame_tx, frame_rx) =
            watch::channel(Frame::new(&minutes, &seconds, Mode::Focus, &app_name));
        (Self { app_name, frame_tx }, frame_rx)
    }
}

impl TimerDisplay for WatchDisplay {
    fn render(&mut self, minutes: &str, seconds: &str, active_mode: Mode) {
        let frame = Frame::new(minutes, seconds, active_mode, &self.app_name);
        debug!("Rendering {}", frame.title);
        // send_replace keeps publishing even when no receiver is listening
        self.frame_tx.send_replace(frame);
    }
}
