//! Ingest loops: NMEA status lines and RTCM3 correction chunks from the receiver.

use std::time::Duration;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::broadcast;

use crate::events::EventBus;
use crate::status::{StatusKey, StatusRegistry};

/// Pause after a failed read before trying again.
const READ_BACKOFF: Duration = Duration::from_millis(100);

// ── Line framing ──────────────────────────────────────────────────────────────

/// Splits a byte stream into `\n`-terminated lines of bounded length.
///
/// A line that grows past `max` is dropped whole, up to and including its
/// terminator.
#[derive(Debug)]
pub struct LineAssembler {
    buf: Vec<u8>,
    max: usize,
    overflowed: bool,
}

impl LineAssembler {
    pub fn new(max: usize) -> Self {
        Self {
            buf: Vec::with_capacity(max),
            max,
            overflowed: false,
        }
    }

    /// Feed one byte; returns a finished line (without terminator) if any.
    pub fn push(&mut self, byte: u8) -> Option<Vec<u8>> {
        if byte == b'\n' {
            let overflowed = std::mem::replace(&mut self.overflowed, false);
            let line = std::mem::take(&mut self.buf);
            return (!overflowed).then_some(line);
        }
        if self.overflowed {
            return None;
        }
        if self.buf.len() >= self.max {
            self.buf.clear();
            self.overflowed = true;
            return None;
        }
        self.buf.push(byte);
        None
    }
}

// ── Sentence classification ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentence {
    /// Position fix; stored and forwarded upstream.
    Gga,
    /// Position error statistics; stored only.
    Gst,
}

/// Recognise `$xxGGA` / `$xxGST`. Lines with a `*hh` suffix must carry a
/// matching checksum.
pub fn classify(line: &str) -> Option<Sentence> {
    let bytes = line.as_bytes();
    if bytes.len() < 6 || bytes[0] != b'$' {
        return None;
    }
    let sentence = match &bytes[3..6] {
        b"GGA" => Sentence::Gga,
        b"GST" => Sentence::Gst,
        _ => return None,
    };
    if let Some(star) = line.rfind('*') {
        let expected = u8::from_str_radix(line.get(star + 1..star + 3)?, 16).ok()?;
        let actual = bytes[1..star].iter().fold(0u8, |acc, b| acc ^ b);
        if actual != expected {
            return None;
        }
    }
    Some(sentence)
}

// ── Status loop ───────────────────────────────────────────────────────────────

pub struct StatusReader<R> {
    source: R,
    status: StatusRegistry,
    bus: EventBus,
    line_max: usize,
    shutdown: broadcast::Receiver<()>,
}

impl<R: AsyncRead + Unpin> StatusReader<R> {
    pub fn new(
        source: R,
        status: StatusRegistry,
        bus: EventBus,
        line_max: usize,
        shutdown: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            source,
            status,
            bus,
            line_max,
            shutdown,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut assembler = LineAssembler::new(self.line_max);
        let mut buf = [0u8; 256];

        tracing::info!(line_max = self.line_max, "status reader starting");

        loop {
            let n = tokio::select! {
                _ = self.shutdown.recv() => {
                    tracing::info!("status reader shutting down");
                    return Ok(());
                }
                r = self.source.read(&mut buf) => match r {
                    Ok(0) => {
                        tracing::info!("status port closed");
                        return Ok(());
                    }
                    Ok(n) => n,
                    Err(e) => {
                        tracing::warn!(error = %e, "status read failed");
                        tokio::time::sleep(READ_BACKOFF).await;
                        continue;
                    }
                },
            };

            for &byte in &buf[..n] {
                if let Some(line) = assembler.push(byte) {
                    self.handle_line(&line);
                }
            }
        }
    }

    fn handle_line(&self, raw: &[u8]) {
        let Ok(text) = std::str::from_utf8(raw) else {
            tracing::trace!("non-UTF-8 status line dropped");
            return;
        };
        let line = text.trim();
        match classify(line) {
            Some(Sentence::Gga) => {
                self.status.set(StatusKey::GnssStatus, line);
                self.bus.publish_line(line.to_string());
            }
            Some(Sentence::Gst) => self.status.set(StatusKey::GnssAccuracy, line),
            None => tracing::trace!(line, "status line ignored"),
        }
    }
}

// ── Correction loop ───────────────────────────────────────────────────────────

pub struct CorrectionReader<R> {
    source: R,
    bus: EventBus,
    chunk_size: usize,
    read_timeout: Duration,
    keepalive: Option<Bytes>,
    shutdown: broadcast::Receiver<()>,
}

impl<R: AsyncRead + Unpin> CorrectionReader<R> {
    pub fn new(
        source: R,
        bus: EventBus,
        chunk_size: usize,
        read_timeout: Duration,
        keepalive: Option<Bytes>,
        shutdown: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            source,
            bus,
            chunk_size,
            read_timeout,
            keepalive,
            shutdown,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut buf = vec![0u8; self.chunk_size];

        tracing::info!(
            chunk_size = self.chunk_size,
            read_timeout_ms = self.read_timeout.as_millis() as u64,
            "correction reader starting"
        );

        loop {
            let read = tokio::select! {
                _ = self.shutdown.recv() => {
                    tracing::info!("correction reader shutting down");
                    return Ok(());
                }
                r = tokio::time::timeout(self.read_timeout, self.source.read(&mut buf)) => r,
            };

            match read {
                Ok(Ok(0)) => {
                    tracing::info!("correction port closed");
                    return Ok(());
                }
                Ok(Ok(n)) => {
                    self.bus.publish_chunk(Bytes::copy_from_slice(&buf[..n])).await;
                }
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "correction read failed");
                    tokio::time::sleep(READ_BACKOFF).await;
                }
                Err(_) => {
                    if let Some(keepalive) = &self.keepalive {
                        self.bus.publish_chunk(keepalive.clone()).await;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use futures::future::BoxFuture;
    use tokio::io::AsyncWriteExt;

    use crate::events::ChunkSink;

    #[derive(Default)]
    struct Collect(Mutex<Vec<Bytes>>);

    impl ChunkSink for Collect {
        fn deliver(&self, chunk: Bytes) -> BoxFuture<'_, ()> {
            self.0.lock().unwrap().push(chunk);
            Box::pin(async {})
        }
    }

    fn with_checksum(body: &str) -> String {
        let ck = body.bytes().fold(0u8, |a, b| a ^ b);
        format!("${body}*{ck:02X}")
    }

    #[test]
    fn assembler_drops_overlong_lines() {
        let mut a = LineAssembler::new(4);
        let mut lines = Vec::new();
        for &b in b"abc\nabcdefgh\nxy\n" {
            if let Some(l) = a.push(b) {
                lines.push(l);
            }
        }
        assert_eq!(lines, vec![b"abc".to_vec(), b"xy".to_vec()]);
    }

    #[test]
    fn classify_ignores_talker_and_checks_checksum() {
        let gga = with_checksum("GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        assert_eq!(classify(&gga), Some(Sentence::Gga));
        assert_eq!(classify("$GPGGA,no,checksum"), Some(Sentence::Gga));
        assert_eq!(classify(&with_checksum("GPGST,1,2,3")), Some(Sentence::Gst));

        assert_eq!(classify("$GPGGA,1,2*00"), None);
        assert_eq!(classify("$GPRMC,1,2"), None);
        assert_eq!(classify("GPGGA,1"), None);
        assert_eq!(classify("$GP"), None);
    }

    #[tokio::test]
    async fn status_reader_stores_and_publishes_gga() {
        let (mut port, source) = tokio::io::duplex(1024);
        let status = StatusRegistry::new();
        let bus = EventBus::new();
        let mut lines = bus.subscribe_lines();
        let (_tx, rx) = broadcast::channel(1);

        let reader = StatusReader::new(source, status.clone(), bus.clone(), 256, rx);
        let task = tokio::spawn(reader.run());

        let gga = with_checksum("GNGGA,1,2,3");
        let gst = with_checksum("GNGST,4,5,6");
        port.write_all(format!("{gga}\r\n$GNRMC,x\r\n{gst}\r\n").as_bytes())
            .await
            .unwrap();
        drop(port);
        task.await.unwrap().unwrap();

        assert_eq!(lines.recv().await.as_deref(), Some(gga.as_str()));
        assert!(lines.try_recv().is_err());
        assert_eq!(status.get(StatusKey::GnssStatus).as_deref(), Some(gga.as_str()));
        assert_eq!(status.get(StatusKey::GnssAccuracy).as_deref(), Some(gst.as_str()));
    }

    #[tokio::test]
    async fn correction_reader_publishes_chunks_and_exits_on_eof() {
        let (mut port, source) = tokio::io::duplex(4096);
        let bus = EventBus::new();
        let sink = Arc::new(Collect::default());
        bus.add_chunk_sink(sink.clone());
        let (_tx, rx) = broadcast::channel(1);

        let reader = CorrectionReader::new(source, bus, 2048, Duration::from_secs(5), None, rx);
        port.write_all(&[0xD3, 0x00, 0x01, 0xAA]).await.unwrap();
        drop(port);
        reader.run().await.unwrap();

        let chunks = sink.0.lock().unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(&chunks[0][..], &[0xD3, 0x00, 0x01, 0xAA]);
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_port_sends_keepalive() {
        let (_port, source) = tokio::io::duplex(64);
        let bus = EventBus::new();
        let sink = Arc::new(Collect::default());
        bus.add_chunk_sink(sink.clone());
        let (tx, rx) = broadcast::channel(1);

        let reader = CorrectionReader::new(
            source,
            bus,
            2048,
            Duration::from_secs(1),
            Some(Bytes::from_static(b"GNSS")),
            rx,
        );
        let task = tokio::spawn(reader.run());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        tx.send(()).unwrap();
        task.await.unwrap().unwrap();

        let chunks = sink.0.lock().unwrap();
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| &c[..] == b"GNSS"));
    }
}
