//! /action handler: one typed command per request.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use basecast_core::Command;
use basecast_services::Reply;

use super::{reject, ApiState};

// ── /action (POST) ───────────────────────────────────────────────────────────

pub async fn handle_action(
    State(state): State<ApiState>,
    Json(command): Json<Command>,
) -> Result<Json<Reply>, (StatusCode, String)> {
    let action = command.name();
    match state.dispatcher.dispatch(command).await {
        Ok(reply) => Ok(Json(reply)),
        Err(e) => {
            tracing::warn!(action, error = %e, "action failed");
            Err(reject(e))
        }
    }
}
