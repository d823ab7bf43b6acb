use basecast_core::{CoordError, HttpError, UbxError};

/// Failure of a one-shot station operation (mode change, discovery, relay).
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    #[error("transport: {0}")]
    Transport(#[from] std::io::Error),

    #[error("protocol: {0}")]
    Protocol(String),

    #[error("buffer limit exceeded: {0}")]
    OutOfMemory(&'static str),

    #[error("configuration: {0}")]
    Configuration(String),

    #[error("command: {0}")]
    Command(#[from] UbxError),

    #[error("coordinate: {0}")]
    Coordinate(#[from] CoordError),

    #[error("busy: {0}")]
    Busy(&'static str),
}

impl From<HttpError> for StationError {
    fn from(e: HttpError) -> Self {
        StationError::Protocol(e.to_string())
    }
}
