//! Completion sound notifiers

use std::{
    io::{self, Write},
    path::PathBuf,
};
use thiserror::Error;
use tokio::{process::Command, runtime::Handle};
use tracing::{debug, warn};

/// Failure to play the completion sound
#[derive(Debug, Error)]
pub enum NotificationFailure {
    #[error("no async runtime available to play the completion sound")]
    NoRuntime,

    #[error("failed to write notification: {0}")]
    Io(#[from] io::Error),

    #[error("sound player {player} could not be started: {reason}")]
    Spawn { player: String, reason: String },
}

/// Audio collaborator invoked once when a countdown completes
pub trait Notifier: Send + 'static {
    /// Start playing the completion sound without waiting for it to finish
    fn play_completion_sound(&mut self) -> Result<(), NotificationFailure>;
}

/// Plays a sound file through an external player such as `paplay`
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    pub player: String,
    pub sound: PathBuf,
}

impl CommandNotifier {
    pub fn new(player: impl Into<String>, sound: impl Into<PathBuf>) -> Self {
        Self {
            player: player.into(),
            sound: sound.into(),
        }
    }
}

impl Notifier for CommandNotifier {
    fn play_completion_sound(&mut self) -> Result<(), NotificationFailure> {
        let runtime = Handle::try_current().map_err(|_| NotificationFailure::NoRuntime)?;

        let mut command = Command::new(&self.player);
        command.arg(&self.sound);
        let mut child = command.spawn().map_err(|e| NotificationFailure::Spawn {
            player: self.player.clone(),
            reason: e.to_string(),
        })?;

        debug!("Playing {} with {}", self.sound.display(), self.player);
        let player = self.player.clone();
        runtime.spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!("{} finished playback", player),
                Ok(status) => warn!("Audio play failed: {} exited with {}", player, status),
                Err(e) => warn!("Audio play failed: {}", e),
            }
        });

        Ok(())
    }
}

/// Rings the terminal bell on stdout
#[derive(Debug, Clone, Default)]
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn play_completion_sound(&mut self) -> Result<(), NotificationFailure> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        debug!("Rang the terminal bell");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_notifier_needs_a_runtime() {
        let mut notifier = CommandNotifier::new("paplay", "/tmp/done.wav");
        let result = notifier.play_completion_sound();
        assert!(matches!(result, Err(NotificationFailure::NoRuntime)));
    }

    #[tokio::test]
    async fn missing_player_is_reported_as_spawn_failure() {
        let mut notifier = CommandNotifier::new("definitely-not-a-real-player", "done.wav");
        let result = notifier.play_completion_sound();
        assert!(matches!(result, Err(NotificationFailure::Spawn { .. })));
    }
}
