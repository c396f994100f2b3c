//! External collaborator module
//! 
//! This module contains the display and completion-sound collaborators
//! that the timer controller drives.

pub mod display;
pub mod notifier;

// Re-export main items
pub use display::*;
pub use notifier::*;
