//! Correction relay client.
//!
//! Pulls corrections from an upstream NTRIP caster into the receiver and
//! pushes the receiver's GGA sentences back upstream. Also lists the
//! upstream's mount points on request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use basecast_core::config::RelayConfig;
use basecast_core::ntrip::{self, ChunkedDecoder, ResponseHead};

use crate::events::EventBus;
use crate::mount_table::MountTable;
use crate::receiver::ReceiverLink;
use crate::status::{RelayState, StatusRegistry};
use crate::StationError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest source table accepted from upstream.
const MAX_SOURCE_TABLE: usize = 256 * 1024;

const READ_BUF: usize = 2048;

#[derive(Clone)]
pub struct RelayClient {
    config: Arc<RelayConfig>,
    link: ReceiverLink,
    status: StatusRegistry,
    bus: EventBus,
    mounts: MountTable,
    disconnect: Arc<AtomicBool>,
    running: Arc<AtomicBool>,
}

/// A claimed relay. Dropping it clears the running flag and publishes the
/// final state however the stream ends.
pub struct RelaySession {
    client: RelayClient,
}

impl RelaySession {
    /// Stream corrections from `mountpoint` until disconnected, EOF or error.
    pub async fn stream(self, mountpoint: &str) -> Result<(), StationError> {
        self.client.run_stream(mountpoint).await
    }
}

impl Drop for RelaySession {
    fn drop(&mut self) {
        let client = &self.client;
        client.bus.unsubscribe_lines();
        client.status.set_relay(RelayState::Disconnected);
        client.running.store(false, Ordering::Release);
    }
}

impl RelayClient {
    pub fn new(
        config: RelayConfig,
        link: ReceiverLink,
        status: StatusRegistry,
        bus: EventBus,
        mounts: MountTable,
    ) -> Self {
        if config.is_configured() {
            status.set_relay(RelayState::Disconnected);
        }
        Self {
            config: Arc::new(config),
            link,
            status,
            bus,
            mounts,
            disconnect: Arc::new(AtomicBool::new(false)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn default_mountpoint(&self) -> &str {
        &self.config.mountpoint
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn mounts(&self) -> &MountTable {
        &self.mounts
    }

    /// Ask the streaming loop to stop. It notices within one read timeout.
    pub fn disconnect(&self) {
        self.disconnect.store(true, Ordering::Release);
    }

    // ── Discovery ─────────────────────────────────────────────────────────────

    /// Fetch the upstream source table and rebuild the mount table.
    ///
    /// On failure the previous table is left as it was.
    pub async fn discover_mount_points(&self) -> Result<usize, StationError> {
        let guard = self
            .mounts
            .try_begin_rebuild()
            .ok_or(StationError::Busy("mount point discovery already running"))?;

        let names = match self.fetch_source_table().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(host = %self.config.host, error = %e, "mount point discovery failed");
                return Err(e);
            }
        };
        let count = names.len();
        self.mounts.replace(&guard, names);
        tracing::info!(host = %self.config.host, mounts = count, "mount table rebuilt");
        Ok(count)
    }

    async fn fetch_source_table(&self) -> Result<Vec<String>, StationError> {
        let mut stream = self.open().await?;
        let request = ntrip::get_request(
            &self.config.host,
            self.config.port,
            "",
            &self.config.user,
            &self.config.password,
            false,
        );
        stream.write_all(request.as_bytes()).await?;

        let (head, mut raw) = read_head(&mut stream, self.config.read_timeout()).await?;
        if head.status != 200 {
            return Err(StationError::Protocol(format!(
                "source table request returned {} {}",
                head.status, head.reason
            )));
        }

        // Body ends at EOF, at Content-Length, or at the last chunk.
        let mut decoder = head.is_chunked().then(ChunkedDecoder::new);
        let mut body = Vec::new();
        let mut buf = [0u8; READ_BUF];
        loop {
            match decoder.as_mut() {
                Some(decoder) => decoder.feed(&raw, &mut body)?,
                None => body.extend_from_slice(&raw),
            }
            raw.clear();
            if body.len() > MAX_SOURCE_TABLE {
                return Err(StationError::OutOfMemory("source table too large"));
            }
            let complete = match (&decoder, head.content_length()) {
                (Some(decoder), _) => decoder.is_done(),
                (None, Some(len)) => body.len() >= len,
                (None, None) => false,
            };
            if complete {
                break;
            }

            let n = tokio::time::timeout(self.config.read_timeout(), stream.read(&mut buf))
                .await
                .map_err(|_| StationError::Protocol("source table read timed out".into()))??;
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        if let Some(len) = head.content_length() {
            body.truncate(len);
        }
        Ok(ntrip::parse_source_table(&String::from_utf8_lossy(&body)))
    }

    // ── Streaming ─────────────────────────────────────────────────────────────

    /// Claim the relay for a new stream and clear any earlier disconnect
    /// request. A disconnect issued after this returns stops the stream.
    ///
    /// Returns `Busy` if a stream is already running.
    pub fn claim(&self) -> Result<RelaySession, StationError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(StationError::Busy("relay already connected"));
        }
        self.disconnect.store(false, Ordering::Release);
        self.status.set_relay(RelayState::Connecting);
        Ok(RelaySession {
            client: self.clone(),
        })
    }

    /// Claim the relay and stream `mountpoint` on the current task.
    pub async fn connect(&self, mountpoint: &str) -> Result<(), StationError> {
        self.claim()?.stream(mountpoint).await
    }

    async fn run_stream(&self, mountpoint: &str) -> Result<(), StationError> {
        let (mut stream, leftover) = self.handshake(mountpoint).await.inspect_err(|e| {
            tracing::warn!(mountpoint, error = %e, "relay handshake failed");
        })?;

        self.status.set_relay(RelayState::Connected);
        tracing::info!(host = %self.config.host, mountpoint, "relay connected");

        let result = self.pump(&mut stream, leftover).await;
        let _ = stream.shutdown().await;
        match &result {
            Ok(()) => tracing::info!(mountpoint, "relay disconnected"),
            Err(e) => tracing::warn!(mountpoint, error = %e, "relay stream ended"),
        }
        result
    }

    /// Send the stream request and validate the response head. Returns the
    /// stream and any body bytes read along with the head.
    async fn handshake(&self, mountpoint: &str) -> Result<(TcpStream, Vec<u8>), StationError> {
        let mut stream = self.open().await?;
        let request = ntrip::get_request(
            &self.config.host,
            self.config.port,
            mountpoint,
            &self.config.user,
            &self.config.password,
            true,
        );
        stream.write_all(request.as_bytes()).await?;

        let (head, leftover) = read_head(&mut stream, self.config.read_timeout()).await?;
        if head.status != 200 {
            return Err(StationError::Protocol(format!(
                "stream request returned {} {}",
                head.status, head.reason
            )));
        }
        if !head.is_chunked() {
            return Err(StationError::Protocol("stream response is not chunked".into()));
        }
        Ok((stream, leftover))
    }

    async fn pump(&self, stream: &mut TcpStream, leftover: Vec<u8>) -> Result<(), StationError> {
        let mut lines = self.bus.subscribe_lines();
        let mut decoder = ChunkedDecoder::new();
        let mut payload = Vec::with_capacity(READ_BUF);
        let mut buf = [0u8; READ_BUF];
        let read_timeout = self.config.read_timeout();

        self.forward(&mut decoder, &leftover, &mut payload).await?;

        let (mut reader, mut writer) = stream.split();
        loop {
            if self.disconnect.load(Ordering::Acquire) {
                return Ok(());
            }

            tokio::select! {
                Some(line) = lines.recv() => {
                    // An upstream that stops reading must not wedge the loop.
                    let sentence = format!("{line}\r\n");
                    tokio::time::timeout(read_timeout, writer.write_all(sentence.as_bytes()))
                        .await
                        .map_err(|_| StationError::Protocol("upstream write timed out".into()))??;
                }
                read = tokio::time::timeout(read_timeout, reader.read(&mut buf)) => match read {
                    Ok(Ok(0)) => return Ok(()),
                    Ok(Ok(n)) => {
                        self.forward(&mut decoder, &buf[..n], &mut payload).await?;
                        if decoder.is_done() {
                            return Ok(());
                        }
                    }
                    Ok(Err(e)) => return Err(e.into()),
                    Err(_) => {}
                },
            }
        }
    }

    /// Decode chunked bytes from upstream and write the payload to the receiver.
    async fn forward(
        &self,
        decoder: &mut ChunkedDecoder,
        input: &[u8],
        payload: &mut Vec<u8>,
    ) -> Result<(), StationError> {
        payload.clear();
        decoder.feed(input, payload)?;
        if !payload.is_empty() {
            self.link.write_raw(payload).await?;
        }
        Ok(())
    }

    async fn open(&self) -> Result<TcpStream, StationError> {
        if !self.config.is_configured() {
            return Err(StationError::Configuration("relay host not set".into()));
        }
        let addr = (self.config.host.as_str(), self.config.port);
        tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(addr))
            .await
            .map_err(|_| StationError::Protocol("connect timed out".into()))?
            .map_err(StationError::Transport)
    }
}

/// Read until a full response head arrives. Returns the head and the bytes
/// that followed it.
async fn read_head<R: AsyncRead + Unpin>(
    stream: &mut R,
    read_timeout: Duration,
) -> Result<(ResponseHead, Vec<u8>), StationError> {
    let mut raw = Vec::with_capacity(512);
    let mut buf = [0u8; 512];
    loop {
        let n = tokio::time::timeout(read_timeout, stream.read(&mut buf))
            .await
            .map_err(|_| StationError::Protocol("response head timed out".into()))??;
        if n == 0 {
            return Err(StationError::Protocol("connection closed before response".into()));
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some((head, used)) = ntrip::parse_response_head(&raw)? {
            return Ok((head, raw.split_off(used)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKey;
    use crate::testutil::captured_link;
    use tokio::net::TcpListener;

    fn client_for(host: &str, port: u16) -> (RelayClient, StatusRegistry, MountTable, EventBus) {
        let (link, _config, _correction) = captured_link();
        let status = StatusRegistry::new();
        let bus = EventBus::new();
        let mounts = MountTable::new();
        let config = RelayConfig {
            host: host.into(),
            port,
            user: "u".into(),
            password: "p".into(),
            mountpoint: "MNT1".into(),
            read_timeout_ms: 100,
            auto_connect: false,
        };
        let client = RelayClient::new(config, link, status.clone(), bus.clone(), mounts.clone());
        (client, status, mounts, bus)
    }

    /// Accept one connection, read its request head, reply with `response`.
    async fn one_shot_upstream(response: &'static [u8]) -> (u16, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 512];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).await.unwrap();
                req.extend_from_slice(&buf[..n]);
            }
            sock.write_all(response).await.unwrap();
            sock.shutdown().await.unwrap();
            String::from_utf8(req).unwrap()
        });
        (port, handle)
    }

    #[tokio::test]
    async fn missing_host_is_a_configuration_error() {
        let (client, status, _mounts, _bus) = client_for("", 2101);
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Unavailable"));
        assert!(matches!(
            client.discover_mount_points().await,
            Err(StationError::Configuration(_))
        ));
        assert!(matches!(
            client.connect("MNT1").await,
            Err(StationError::Configuration(_))
        ));
        assert!(!client.is_running());
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Disconnected"));
    }

    #[tokio::test]
    async fn discovery_parses_chunked_source_table() {
        let (port, upstream) = one_shot_upstream(
            b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n\
              10\r\nSTR;ABC;x;RTCM\r\n\r\n\
              10\r\nSTR;DEF;y;RTCM\r\n\r\n\
              10\r\nENDSOURCETABLE\r\n\r\n\
              0\r\n\r\n",
        )
        .await;
        let (client, _status, mounts, _bus) = client_for("127.0.0.1", port);

        assert_eq!(client.discover_mount_points().await.unwrap(), 2);
        assert_eq!(mounts.render(), "1\rABC\rDEF");

        let request = upstream.await.unwrap();
        assert!(request.starts_with("GET / HTTP/1.1\r\n"));
        assert!(request.contains("Connection: close\r\n"));
    }

    #[tokio::test]
    async fn failed_discovery_keeps_previous_table() {
        let (port, _upstream) = one_shot_upstream(b"HTTP/1.1 401 Unauthorized\r\n\r\n").await;
        let (client, _status, mounts, _bus) = client_for("127.0.0.1", port);
        {
            let guard = mounts.try_begin_rebuild().unwrap();
            mounts.replace(&guard, vec!["OLD".into()]);
        }

        assert!(matches!(
            client.discover_mount_points().await,
            Err(StationError::Protocol(_))
        ));
        assert_eq!(mounts.render(), "1\rOLD");
    }

    #[tokio::test]
    async fn concurrent_discovery_is_rejected() {
        let (client, _status, mounts, _bus) = client_for("127.0.0.1", 1);
        let _held = mounts.try_begin_rebuild().unwrap();
        assert!(matches!(
            client.discover_mount_points().await,
            Err(StationError::Busy(_))
        ));
    }

    #[tokio::test]
    async fn non_chunked_stream_is_refused() {
        let (port, _upstream) = one_shot_upstream(b"ICY 200 OK\r\n\r\n").await;
        let (client, status, _mounts, bus) = client_for("127.0.0.1", port);

        assert!(matches!(
            client.connect("MNT1").await,
            Err(StationError::Protocol(_))
        ));
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Disconnected"));
        assert!(!bus.has_line_subscriber());
    }

    #[tokio::test]
    async fn stalled_upstream_ends_the_stream() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let upstream = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 512];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).await.unwrap();
                req.extend_from_slice(&buf[..n]);
            }
            sock.write_all(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n")
                .await
                .unwrap();
            // Hold the socket without ever reading from it again.
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(sock);
        });
        let (client, status, _mounts, bus) = client_for("127.0.0.1", port);
        let task = {
            let client = client.clone();
            tokio::spawn(async move { client.connect("MNT1").await })
        };

        // Oversized sentences fill the socket buffers quickly.
        let sentence = format!("$GPGGA,{}", "0".repeat(64 * 1024));
        let ended = tokio::time::timeout(Duration::from_secs(5), async {
            while !task.is_finished() {
                bus.publish_line(sentence.clone());
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await;
        assert!(ended.is_ok(), "relay stayed blocked on a stalled upstream");

        let result = task.await.unwrap();
        assert!(matches!(result, Err(StationError::Protocol(_))));
        assert!(!client.is_running());
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Disconnected"));
        upstream.abort();
    }

    #[tokio::test]
    async fn claim_is_exclusive_until_the_session_drops() {
        let (client, status, _mounts, _bus) = client_for("127.0.0.1", 1);

        let session = client.claim().unwrap();
        assert!(client.is_running());
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Connecting"));
        assert!(matches!(client.claim(), Err(StationError::Busy(_))));

        drop(session);
        assert!(!client.is_running());
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Disconnected"));
        assert!(client.claim().is_ok());
    }
}
