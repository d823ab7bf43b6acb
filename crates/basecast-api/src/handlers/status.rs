//! /status and /mounts handlers.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use basecast_services::ClientInfo;

use super::ApiState;

// ── /status ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: BTreeMap<&'static str, String>,
    pub mode: Option<&'static str>,
    pub relay_running: bool,
    pub clients: Vec<ClientInfo>,
}

pub async fn handle_status(State(state): State<ApiState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: state.status.snapshot(),
        mode: state.dispatcher.mode().current_mode().map(|m| m.as_str()),
        relay_running: state.dispatcher.relay().is_running(),
        clients: state.clients.clients(),
    })
}

// ── /mounts ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MountsResponse {
    pub valid: bool,
    pub names: Vec<String>,
    /// Flag-prefixed, carriage-return separated form.
    pub rendered: String,
}

pub async fn handle_mounts(State(state): State<ApiState>) -> Json<MountsResponse> {
    let mounts = state.dispatcher.relay().mounts();
    let rendered = mounts.render();
    let names = mounts.names();
    Json(MountsResponse {
        valid: !names.is_empty(),
        names,
        rendered,
    })
}
