//! Correction cast server.
//!
//! Serves the NTRIP source table on `GET /` and streams corrections to every
//! client of `GET /<mountpoint>`. Streaming clients live in a registry keyed
//! by a monotonically assigned id; the registry is also the chunk sink that
//! fans corrections out to them.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bytes::Bytes;
use dashmap::DashMap;
use futures::future::{join_all, BoxFuture};
use socket2::{SockRef, TcpKeepalive};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{broadcast, Mutex, Notify};

use basecast_core::config::CasterConfig;
use basecast_core::ntrip::{self, HttpError};

use crate::events::ChunkSink;
use crate::status::{StatusKey, StatusRegistry};

/// Time a client gets to send its request head.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const KEEPALIVE_IDLE: Duration = Duration::from_secs(5);
const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(5);
const KEEPALIVE_RETRIES: u32 = 3;

// ── Client registry ───────────────────────────────────────────────────────────

pub struct CastClient<W> {
    pub id: u64,
    pub peer: SocketAddr,
    pub connected_at: Instant,
    writer: Arc<Mutex<W>>,
    /// Signalled when the registry drops the client.
    closed: Arc<Notify>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ClientInfo {
    pub id: u64,
    pub peer: String,
    pub connected_secs: u64,
}

pub struct ClientRegistry<W> {
    clients: Arc<DashMap<u64, CastClient<W>>>,
    next_id: Arc<AtomicU64>,
    status: StatusRegistry,
    send_timeout: Duration,
}

impl<W> Clone for ClientRegistry<W> {
    fn clone(&self) -> Self {
        Self {
            clients: self.clients.clone(),
            next_id: self.next_id.clone(),
            status: self.status.clone(),
            send_timeout: self.send_timeout,
        }
    }
}

impl<W: AsyncWrite + Unpin + Send + 'static> ClientRegistry<W> {
    pub fn new(status: StatusRegistry, send_timeout: Duration) -> Self {
        Self {
            clients: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
            status,
            send_timeout,
        }
    }

    /// Id for a new connection, registered or not.
    pub fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Start streaming to `writer`. The returned notify fires when the
    /// client is dropped by the registry.
    pub fn register(&self, id: u64, writer: W, peer: SocketAddr) -> Arc<Notify> {
        let closed = Arc::new(Notify::new());
        self.clients.insert(
            id,
            CastClient {
                id,
                peer,
                connected_at: Instant::now(),
                writer: Arc::new(Mutex::new(writer)),
                closed: closed.clone(),
            },
        );
        self.publish_count();
        tracing::info!(id, peer = %peer, clients = self.clients.len(), "cast client registered");
        closed
    }

    /// Drop a client and shut its writer down. Returns false if unknown.
    pub async fn remove(&self, id: u64) -> bool {
        let Some((_, client)) = self.clients.remove(&id) else {
            return false;
        };
        self.publish_count();
        client.closed.notify_one();
        tracing::info!(id, peer = %client.peer, clients = self.clients.len(), "cast client removed");

        let _ = tokio::time::timeout(self.send_timeout, async {
            let mut writer = client.writer.lock().await;
            writer.shutdown().await
        })
        .await;
        true
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn is_registered(&self, id: u64) -> bool {
        self.clients.contains_key(&id)
    }

    /// Only registered streaming connections stay open after a request.
    pub fn should_close(&self, id: u64) -> bool {
        !self.is_registered(id)
    }

    /// Response to write for a protocol error on connection `id`.
    ///
    /// Streaming clients must only ever see correction bytes, so they get
    /// nothing.
    pub fn error_response(&self, id: u64, code: u16) -> Option<String> {
        (!self.is_registered(id)).then(|| ntrip::status_response(code))
    }

    pub fn clients(&self) -> Vec<ClientInfo> {
        let mut out: Vec<ClientInfo> = self
            .clients
            .iter()
            .map(|e| ClientInfo {
                id: e.id,
                peer: e.peer.to_string(),
                connected_secs: e.connected_at.elapsed().as_secs(),
            })
            .collect();
        out.sort_by_key(|c| c.id);
        out
    }

    /// Send `chunk` to every client at once. Clients that fail or miss the
    /// send timeout are removed. Returns how many received the chunk.
    pub async fn fan_out(&self, chunk: Bytes) -> usize {
        let targets: Vec<(u64, Arc<Mutex<W>>)> = self
            .clients
            .iter()
            .map(|e| (*e.key(), e.value().writer.clone()))
            .collect();
        if targets.is_empty() {
            return 0;
        }

        let send_timeout = self.send_timeout;
        let sends = targets.into_iter().map(|(id, writer)| {
            let chunk = chunk.clone();
            async move {
                let result = tokio::time::timeout(send_timeout, async {
                    let mut w = writer.lock().await;
                    w.write_all(&chunk).await?;
                    w.flush().await
                })
                .await;
                (id, result)
            }
        });

        let mut delivered = 0;
        let mut failed = Vec::new();
        for (id, result) in join_all(sends).await {
            match result {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => {
                    tracing::debug!(id, error = %e, "cast send failed");
                    failed.push(id);
                }
                Err(_) => {
                    tracing::debug!(id, timeout_ms = send_timeout.as_millis() as u64, "cast send timed out");
                    failed.push(id);
                }
            }
        }
        for id in failed {
            self.remove(id).await;
        }
        delivered
    }

    fn publish_count(&self) {
        self.status
            .set(StatusKey::NtripCaster, &self.clients.len().to_string());
    }
}

impl<W: AsyncWrite + Unpin + Send + 'static> ChunkSink for ClientRegistry<W> {
    fn deliver(&self, chunk: Bytes) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.fan_out(chunk).await;
        })
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

pub type TcpClients = ClientRegistry<OwnedWriteHalf>;

pub struct CasterServer {
    listener: TcpListener,
    registry: TcpClients,
    mountpoint: Arc<str>,
    source_table: Arc<str>,
    shutdown: broadcast::Receiver<()>,
}

impl CasterServer {
    pub async fn bind(
        config: &CasterConfig,
        registry: TcpClients,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", config.port))
            .await
            .with_context(|| format!("failed to bind caster port {}", config.port))?;
        Ok(Self::new(listener, config, registry, shutdown))
    }

    pub fn new(
        listener: TcpListener,
        config: &CasterConfig,
        registry: TcpClients,
        shutdown: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            listener,
            registry,
            mountpoint: config.mountpoint.as_str().into(),
            source_table: ntrip::source_table_response(&config.mountpoint, &config.lat, &config.lon)
                .into(),
            shutdown,
        }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!(addr = ?self.listener.local_addr().ok(), mountpoint = %self.mountpoint, "caster listening");

        loop {
            tokio::select! {
                _ = self.shutdown.recv() => {
                    tracing::info!("caster shutting down");
                    return Ok(());
                }

                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(a) => a,
                        Err(e) => {
                            tracing::warn!(error = %e, "accept failed");
                            continue;
                        }
                    };
                    if let Err(e) = set_keepalive(&stream) {
                        tracing::debug!(peer = %peer, error = %e, "failed to set TCP keepalive");
                    }

                    let conn = Connection {
                        registry: self.registry.clone(),
                        mountpoint: self.mountpoint.clone(),
                        source_table: self.source_table.clone(),
                    };
                    tokio::spawn(async move {
                        if let Err(e) = conn.handle(stream, peer).await {
                            tracing::debug!(peer = %peer, error = %e, "caster connection ended");
                        }
                    });
                }
            }
        }
    }
}

fn set_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    let keepalive = TcpKeepalive::new()
        .with_time(KEEPALIVE_IDLE)
        .with_interval(KEEPALIVE_INTERVAL)
        .with_retries(KEEPALIVE_RETRIES);
    SockRef::from(stream).set_tcp_keepalive(&keepalive)
}

struct Connection {
    registry: TcpClients,
    mountpoint: Arc<str>,
    source_table: Arc<str>,
}

impl Connection {
    async fn handle(self, mut stream: TcpStream, peer: SocketAddr) -> Result<()> {
        let id = self.registry.allocate_id();

        let request = match read_request(&mut stream).await {
            Ok(Some(req)) => req,
            Ok(None) => return Ok(()),
            Err(e) => {
                tracing::debug!(id, peer = %peer, error = %e, "bad request");
                return self.reject(&mut stream, id, 400).await;
            }
        };
        tracing::debug!(id, peer = %peer, method = %request.method, path = %request.path, "caster request");

        if request.method != "GET" {
            return self.reject(&mut stream, id, 501).await;
        }

        let path = request.path.trim_start_matches('/');
        if path.is_empty() {
            stream.write_all(self.source_table.as_bytes()).await?;
        } else if path == &*self.mountpoint {
            return self.stream_to(stream, id, peer).await;
        } else {
            return self.reject(&mut stream, id, 404).await;
        }

        if self.registry.should_close(id) {
            stream.shutdown().await?;
        }
        Ok(())
    }

    async fn reject(&self, stream: &mut TcpStream, id: u64, code: u16) -> Result<()> {
        if let Some(response) = self.registry.error_response(id, code) {
            stream.write_all(response.as_bytes()).await?;
        }
        if self.registry.should_close(id) {
            stream.shutdown().await?;
        }
        Ok(())
    }

    async fn stream_to(&self, stream: TcpStream, id: u64, peer: SocketAddr) -> Result<()> {
        let (mut reader, mut writer) = stream.into_split();
        // Reply before registering so no chunk can precede it.
        writer
            .write_all(ntrip::ICY_OK.as_bytes())
            .await
            .context("failed to send stream reply")?;
        let closed = self.registry.register(id, writer, peer);

        // Anything a registered client sends from here on is discarded
        // unparsed, so it never gets an error response on this socket.
        tokio::select! {
            _ = closed.notified() => {}
            _ = drain(&mut reader) => {
                self.registry.remove(id).await;
            }
        }
        Ok(())
    }
}

/// Read a request head, `Ok(None)` if the peer closed before sending one.
async fn read_request<R: AsyncRead + Unpin>(
    stream: &mut R,
) -> std::result::Result<Option<ntrip::RequestHead>, HttpError> {
    let mut head = Vec::with_capacity(512);
    let mut buf = [0u8; 512];
    loop {
        let n = match tokio::time::timeout(REQUEST_TIMEOUT, stream.read(&mut buf)).await {
            Ok(Ok(0)) | Ok(Err(_)) => return Ok(None),
            Ok(Ok(n)) => n,
            Err(_) => return Err(HttpError::Malformed("request timed out".into())),
        };
        head.extend_from_slice(&buf[..n]);
        if let Some((req, _)) = ntrip::parse_request_head(&head)? {
            return Ok(Some(req));
        }
    }
}

/// Discard client input until EOF or error.
async fn drain<R: AsyncRead + Unpin>(reader: &mut R) {
    let mut buf = [0u8; 512];
    while let Ok(n) = reader.read(&mut buf).await {
        if n == 0 {
            break;
        }
    }
}
