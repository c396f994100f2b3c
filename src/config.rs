//! Configuration and CLI argument handling

use std::path::PathBuf;
use anyhow::bail;
use clap::Parser;

use crate::{
    services::{BellNotifier, CommandNotifier, Notifier},
    state::ModeDurations,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-timer")]
#[command(about = "A Pomodoro countdown timer controlled over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "25025")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Focus duration in minutes (1-99)
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u64).range(1..=99))]
    pub focus: u64,

    /// Short break duration in minutes (1-99)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..=99))]
    pub short_break: u64,

    /// Long break duration in minutes (1-99)
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..=99))]
    pub long_break: u64,

    /// Name shown after the clock in the title
    #[arg(long, default_value = "Pomodoro Timer")]
    pub app_name: String,

    /// Sound file played on completion (rings the terminal bell when omitted)
    #[arg(long)]
    pub sound: Option<PathBuf>,

    /// Program used to play the completion sound
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn durations(&self) -> ModeDurations {
        ModeDurations::new(self.focus, self.short_break, self.long_break)
    }

    /// Check settings that clap cannot validate on its own
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(sound) = &self.sound {
            if !sound.is_file() {
                bail!("sound file {} does not exist", sound.display());
            }
        }
        if self.app_name.trim().is_empty() {
            bail!("app name must not be empty");
        }
        Ok(())
    }

    /// Notifier selected by the sound settings
    pub fn notifier(&self) -> Box<dyn Notifier> {
        match &self.sound {
            Some(sound) => Box::new(CommandNotifier::new(self.player.clone(), sound.clone())),
            None => Box::new(BellNotifier),
        }
    }
}
