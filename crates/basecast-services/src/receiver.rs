//! Receiver link: the two write paths into the GNSS receiver.
//!
//! Configuration commands go to the configuration port as framed UBX
//! messages. Corrections relayed from an upstream caster go verbatim to the
//! correction input.

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use basecast_core::ubx::{self, FramedCommand};

use crate::StationError;

type Port = Arc<Mutex<Box<dyn AsyncWrite + Send + Unpin>>>;

#[derive(Clone)]
pub struct ReceiverLink {
    config: Port,
    correction: Port,
}

impl ReceiverLink {
    pub fn new<C, R>(config: C, correction: R) -> Self
    where
        C: AsyncWrite + Send + Unpin + 'static,
        R: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            config: Arc::new(Mutex::new(Box::new(config))),
            correction: Arc::new(Mutex::new(Box::new(correction))),
        }
    }

    /// Build `descriptor` and write the frame. Returns the bytes written.
    pub async fn send_command(&self, descriptor: &str) -> Result<usize, StationError> {
        let frame = ubx::build(descriptor)?;
        self.send_framed(&frame).await?;
        tracing::debug!(descriptor, frame = hex::encode(frame.as_bytes()), "ubx command sent");
        Ok(frame.len())
    }

    pub async fn send_framed(&self, frame: &FramedCommand) -> Result<(), StationError> {
        let mut port = self.config.lock().await;
        port.write_all(frame.as_bytes()).await?;
        port.flush().await?;
        Ok(())
    }

    /// Write `bytes` unmodified to the correction input.
    pub async fn write_raw(&self, bytes: &[u8]) -> Result<usize, StationError> {
        let mut port = self.correction.lock().await;
        port.write_all(bytes).await?;
        port.flush().await?;
        Ok(bytes.len())
    }
}
