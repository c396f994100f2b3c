//! Shared application state for the HTTP surface

use std::time::Instant;

use crate::tasks::{TimerClosed, TimerHandle, TimerSnapshot};

/// Handle to the running timer plus server metadata
#[derive(Debug, Clone)]
pub struct AppState {
    pub timer: TimerHandle,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(timer: TimerHandle) -> Self {
        Self {
            timer,
            start_time: Instant::now(),
        }
    }

    /// Current timer state together with the frame rendered for it
    pub async fn snapshot(&self) -> Result<TimerSnapshot, TimerClosed> {
        self.timer.snapshot().await
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
