//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    services::Frame,
    state::{Mode, TimerState},
};

/// One mode control and whether it is the active one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeStatus {
    pub mode: Mode,
    pub label: String,
    pub active: bool,
}

/// Timer status returned by every command endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub minutes: String,
    pub seconds: String,
    pub title: String,
    pub mode: Mode,
    pub is_running: bool,
    pub remaining_seconds: u64,
    pub modes: Vec<ModeStatus>,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusResponse {
    pub fn new(state: &TimerState, frame: Frame, uptime: String) -> Self {
        let modes = Mode::ALL
            .iter()
            .map(|&mode| ModeStatus {
                mode,
                label: mode.label().to_string(),
                active: frame.is_active(mode),
            })
            .collect();

        Self {
            minutes: frame.minutes,
            seconds: frame.seconds,
            title: frame.title,
            mode: state.mode,
            is_running: state.is_running,
            remaining_seconds: state.remaining_seconds,
            modes,
            uptime,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
