//! State management module
//! 
//! This module contains the countdown state, the controller that mutates it,
//! and the shared application state used by the HTTP surface.

pub mod timer_state;
pub mod controller;
pub mod app_state;

// Re-export main types
pub use timer_state::{Mode, ModeDurations, TimerState};
pub use controller::TimerController;
pub use app_state::AppState;
