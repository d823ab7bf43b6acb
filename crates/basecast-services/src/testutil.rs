//! In-memory receiver ports for unit tests.

use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::io::AsyncWrite;

use basecast_core::FramedCommand;

use crate::receiver::ReceiverLink;

/// Writer that records everything written to it.
#[derive(Clone, Default)]
pub struct Capture {
    pub bytes: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.bytes.lock().unwrap())
    }

    /// Split everything captured so far into UBX frames.
    pub fn frames(&self) -> Vec<FramedCommand> {
        let bytes = self.take();
        let mut rest = &bytes[..];
        let mut out = Vec::new();
        while let Some((frame, used)) = FramedCommand::split_from(rest) {
            out.push(frame);
            rest = &rest[used..];
        }
        assert!(rest.is_empty(), "trailing bytes after frames: {rest:02x?}");
        out
    }
}

impl AsyncWrite for Capture {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// Writer that accepts `budget` writes and then fails.
pub struct FailAfter {
    pub budget: usize,
}

impl AsyncWrite for FailAfter {
    fn poll_write(mut self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        if self.budget == 0 {
            return Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "port gone")));
        }
        self.budget -= 1;
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// Link whose config and correction ports are both captured.
pub fn captured_link() -> (ReceiverLink, Capture, Capture) {
    let config = Capture::default();
    let correction = Capture::default();
    let link = ReceiverLink::new(config.clone(), correction.clone());
    (link, config, correction)
}
