//! Timer state structure and mode durations

use serde::{Deserialize, Serialize};

/// The three preset countdown modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// All modes in display order
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Human readable label for the mode control
    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

/// Configured length of each mode in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeDurations {
    pub focus: u64,
    pub short_break: u64,
    pub long_break: u64,
}

impl ModeDurations {
    pub fn new(focus: u64, short_break: u64, long_break: u64) -> Self {
        Self {
            focus,
            short_break,
            long_break,
        }
    }

    /// Minutes configured for `mode`
    pub fn minutes(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Full countdown length of `mode` in seconds
    pub fn seconds(&self, mode: Mode) -> u64 {
        self.minutes(mode) * 60
    }
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self::new(25, 5, 15)
    }
}

/// Countdown state owned by the timer controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub mode: Mode,
    pub is_running: bool,
    pub durations: ModeDurations,
}

impl TimerState {
    /// Idle focus countdown at full length
    pub fn new(durations: ModeDurations) -> Self {
        Self {
            remaining_seconds: durations.seconds(Mode::Focus),
            mode: Mode::Focus,
            is_running: false,
            durations,
        }
    }

    /// Full length of the current mode in seconds
    pub fn full_duration(&self) -> u64 {
        self.durations.seconds(self.mode)
    }

    /// Restore the full length of the current mode
    pub fn restore(&mut self) {
        self.remaining_seconds = self.full_duration();
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.mode == mode
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(ModeDurations::default())
    }
}
