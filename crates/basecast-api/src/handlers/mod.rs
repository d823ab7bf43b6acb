//! HTTP API handlers: station state as JSON, operator actions in.

pub mod action;
pub mod status;

use axum::http::StatusCode;

use basecast_services::{Dispatcher, StationError, StatusRegistry, TcpClients};

#[derive(Clone)]
pub struct ApiState {
    pub status: StatusRegistry,
    /// Rovers currently attached to the caster.
    pub clients: TcpClients,
    pub dispatcher: Dispatcher,
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Map a station error onto the status code the operator sees.
fn error_status(err: &StationError) -> StatusCode {
    match err {
        StationError::Busy(_) => StatusCode::CONFLICT,
        StationError::Coordinate(_)
        | StationError::Command(_)
        | StationError::Configuration(_) => StatusCode::BAD_REQUEST,
        StationError::Transport(_) | StationError::Protocol(_) => StatusCode::BAD_GATEWAY,
        StationError::OutOfMemory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: StationError) -> (StatusCode, String) {
    (error_status(&err), err.to_string())
}

// Re-export handler functions for use in router setup.
pub use action::handle_action;
pub use status::{handle_mounts, handle_status};
