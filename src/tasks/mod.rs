//! Background tasks module
//!
//! This module contains the timer loop that runs alongside the HTTP server.

pub mod ticker;

// Re-export main items
pub use ticker::{
    spawn_timer, timer_task, Command, TimerClosed, TimerHandle, TimerSnapshot, TICK_PERIOD,
};
