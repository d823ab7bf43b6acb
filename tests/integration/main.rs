//! basecast integration test harness.
//!
//! Everything runs in-process over loopback TCP and in-memory pipes; no
//! receiver hardware or upstream caster is needed:
//!
//!   cargo test --test integration
//!
//! Each test binds its own ephemeral ports and owns the tasks it spawns.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::broadcast;

use basecast_core::config::{CasterConfig, RelayConfig};

mod caster;
mod relay;
mod station;

// ── Harness ───────────────────────────────────────────────────────────────────

pub const MOUNTPOINT: &str = "BASE";

/// Sample GGA sentence with a valid checksum.
pub const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

pub fn caster_config() -> CasterConfig {
    CasterConfig {
        port: 0,
        mountpoint: MOUNTPOINT.into(),
        lat: "21.028511".into(),
        lon: "105.804817".into(),
        send_timeout_ms: 500,
        keepalive: "GNSS".into(),
    }
}

pub fn relay_config(port: u16, mountpoint: &str) -> RelayConfig {
    RelayConfig {
        host: "127.0.0.1".into(),
        port,
        user: "rover".into(),
        password: "secret".into(),
        mountpoint: mountpoint.into(),
        read_timeout_ms: 100,
        auto_connect: false,
    }
}

/// Shutdown channel for a test; keep the sender alive for the test's length.
pub fn shutdown() -> broadcast::Sender<()> {
    broadcast::channel::<()>(1).0
}

/// Poll `check` every 10 ms until it holds or `timeout` passes.
pub async fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> Result<()> {
    let deadline = tokio::time::Instant::now() + timeout;
    while !check() {
        if tokio::time::Instant::now() >= deadline {
            bail!("condition not met within {:?}", timeout);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    Ok(())
}

/// Read until `needle` has been seen. Returns everything read.
pub async fn read_until<R: AsyncRead + Unpin>(reader: &mut R, needle: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut buf = [0u8; 1024];
    while !out.windows(needle.len()).any(|w| w == needle) {
        let n = tokio::time::timeout(Duration::from_secs(2), reader.read(&mut buf))
            .await
            .context("read timed out")??;
        if n == 0 {
            bail!(
                "EOF before {:?}; got {:?}",
                String::from_utf8_lossy(needle),
                String::from_utf8_lossy(&out)
            );
        }
        out.extend_from_slice(&buf[..n]);
    }
    Ok(out)
}

/// Read exactly `len` bytes with a timeout.
pub async fn read_exact<R: AsyncRead + Unpin>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    tokio::time::timeout(Duration::from_secs(2), reader.read_exact(&mut out))
        .await
        .context("read timed out")??;
    Ok(out)
}
