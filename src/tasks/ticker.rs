//! Countdown tick loop and the command handle that feeds it

use std::time::Duration;
use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{interval_at, Instant, Interval},
};
use tracing::{debug, info};

use crate::{
    services::Frame,
    state::{Mode, TimerController, TimerState},
};

/// Period of the countdown tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Commands accepted by the timer loop
#[derive(Debug)]
pub enum Command {
    Start,
    Pause,
    Reset,
    SwitchMode(Mode),
    Snapshot(oneshot::Sender<TimerSnapshot>),
}

/// Timer state paired with the frame rendered for it
#[derive(Debug, Clone)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub frame: Frame,
}

/// The timer loop has stopped and no longer accepts commands
#[derive(Debug, Clone, Copy, Error)]
#[error("timer loop is no longer running")]
pub struct TimerClosed;

/// Cloneable input source for a running timer loop
#[derive(Debug, Clone)]
pub struct TimerHandle {
    command_tx: mpsc::Sender<Command>,
}

impl TimerHandle {
    pub async fn start(&self) -> Result<(), TimerClosed> {
        self.send(Command::Start).await
    }

    pub async fn pause(&self) -> Result<(), TimerClosed> {
        self.send(Command::Pause).await
    }

    pub async fn reset(&self) -> Result<(), TimerClosed> {
        self.send(Command::Reset).await
    }

    pub async fn switch_mode(&self, mode: Mode) -> Result<(), TimerClosed> {
        self.send(Command::SwitchMode(mode)).await
    }

    /// Current timer state, observed after all previously sent commands
    pub async fn state(&self) -> Result<TimerState, TimerClosed> {
        Ok(self.snapshot().await?.state)
    }

    /// State and rendered frame, both read in the same loop iteration
    pub async fn snapshot(&self) -> Result<TimerSnapshot, TimerClosed> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot(reply_tx)).await?;
        reply_rx.await.map_err(|_| TimerClosed)
    }

    async fn send(&self, command: Command) -> Result<(), TimerClosed> {
        self.command_tx.send(command).await.map_err(|_| TimerClosed)
    }
}

/// Spawn the timer loop on the current runtime
///
/// `frames` must receive the frames rendered by the controller's display.
pub fn spawn_timer(controller: TimerController, frames: watch::Receiver<Frame>) -> TimerHandle {
    let (command_tx, command_rx) = mpsc::channel(32);
    tokio::spawn(timer_task(controller, frames, command_rx));
    TimerHandle { command_tx }
}

/// Single loop through which every command and tick mutates the controller
pub async fn timer_task(
    mut controller: TimerController,
    frames: watch::Receiver<Frame>,
    mut command_rx: mpsc::Receiver<Command>,
) {
    info!("Starting timer task");

    // Present only while the controller is running
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                apply(&mut controller, &frames, command);
            }

            _ = next_tick(&mut ticker) => {
                controller.tick();
            }
        }

        sync_schedule(&controller, &mut ticker);
    }

    info!("All timer handles dropped, stopping timer task");
}

fn apply(controller: &mut TimerController, frames: &watch::Receiver<Frame>, command: Command) {
    debug!("Timer task received command: {:?}", command);
    match command {
        Command::Start => controller.start(),
        Command::Pause => controller.pause(),
        Command::Reset => controller.reset(),
        Command::SwitchMode(mode) => controller.switch_mode(mode),
        Command::Snapshot(reply_tx) => {
            let snapshot = TimerSnapshot {
                state: controller.state(),
                frame: frames.borrow().clone(),
            };
            // The requester may have given up waiting
            let _ = reply_tx.send(snapshot);
        }
    }
}

/// Create the tick source when running starts, drop it when running stops
fn sync_schedule(controller: &TimerController, ticker: &mut Option<Interval>) {
    match (controller.is_running(), ticker.is_some()) {
        (true, false) => {
            debug!("Scheduling countdown ticks");
            *ticker = Some(interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD));
        }
        (false, true) => {
            debug!("Cancelling countdown ticks");
            *ticker = None;
        }
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
