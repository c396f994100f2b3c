//! Pomodoro Timer - a countdown timer for the Pomodoro technique
//! 
//! The timer counts down focus, short break and long break intervals,
//! renders the clock to a display collaborator every second and plays a
//! completion sound when a countdown reaches zero.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Mode, ModeDurations, TimerController, TimerState};
pub use services::{Notifier, NotificationFailure, TimerDisplay};
pub use tasks::{spawn_timer, TimerHandle};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
