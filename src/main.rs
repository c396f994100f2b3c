//! Pomodoro Timer - a countdown timer for the Pomodoro technique
//! 
//! This is the main entry point hosting the timer behind an HTTP surface.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_timer::{
    api::create_router,
    config::Config,
    services::WatchDisplay,
    state::{AppState, TimerController},
    tasks::spawn_timer,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    config.validate()?;

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, focus={}min, short break={}min, long break={}min",
          config.host, config.port, config.focus, config.short_break, config.long_break);

    // Build the controller and hand it to the timer loop
    let (display, frames) = WatchDisplay::new(config.app_name.clone());
    let controller = TimerController::new(config.durations(), Box::new(display), config.notifier());
    let timer = spawn_timer(controller, frames);

    let state = Arc::new(AppState::new(timer));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start       - Start or resume the countdown");
    info!("  POST /pause       - Pause the countdown");
    info!("  POST /reset       - Reset the current mode");
    info!("  POST /mode/:mode  - Switch to focus, short-break or long-break");
    info!("  GET  /status      - Current clock, title and active mode");
    info!("  GET  /health      - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        signal = shutdown_signal() => {
            signal?;
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
