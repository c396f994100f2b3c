//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    state::{AppState, Mode},
    tasks::TimerClosed,
};
use super::responses::{HealthResponse, StatusResponse};

type StatusResult = Result<Json<StatusResponse>, StatusCode>;

/// Handle POST /start - Begin or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> StatusResult {
    info!("Start endpoint called");
    let result = state.timer.start().await;
    respond(&state, result).await
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> StatusResult {
    info!("Pause endpoint called");
    let result = state.timer.pause().await;
    respond(&state, result).await
}

/// Handle POST /reset - Restore the full length of the current mode
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> StatusResult {
    info!("Reset endpoint called");
    let result = state.timer.reset().await;
    respond(&state, result).await
}

/// Handle POST /mode/:mode - Switch to focus, short-break or long-break
pub async fn mode_handler(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<Mode>,
) -> StatusResult {
    info!("Mode endpoint called with {}", mode.label());
    let result = state.timer.switch_mode(mode).await;
    respond(&state, result).await
}

/// Handle GET /status - Return the current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> StatusResult {
    respond(&state, Ok(())).await
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn respond(state: &AppState, result: Result<(), TimerClosed>) -> StatusResult {
    let snapshot = match result {
        Ok(()) => state.snapshot().await,
        Err(e) => Err(e),
    };

    match snapshot {
        Ok(snapshot) => Ok(Json(StatusResponse::new(
            &snapshot.state,
            snapshot.frame,
            state.get_uptime(),
        ))),
        Err(e) => {
            error!("Failed to reach timer: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
