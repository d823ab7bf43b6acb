//! Receiver transports: the configuration, status and correction UARTs.
//!
//! Each device is opened once with `serialport` (8N1, no flow control).
//! Reading and writing use separate cloned handles, each driven by its own
//! thread and exposed to the async side as an in-memory pipe. A write to a
//! port never waits behind a read that is idle on the same port.

use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::runtime::Handle;

use basecast_core::config::ReceiverConfig;

/// Bytes buffered between a UART thread and its async end.
const PIPE_CAPACITY: usize = 8192;

/// Blocking read wait on the device before the pump loops again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Transports {
    /// UBX commands go out here.
    pub config: DuplexStream,
    /// NMEA status sentences come in here.
    pub status: DuplexStream,
    pub correction_rx: DuplexStream,
    pub correction_tx: DuplexStream,
}

fn open(path: &Path, baud: u32) -> Result<Box<dyn SerialPort>> {
    let name = path.to_string_lossy();
    serialport::new(name.as_ref(), baud)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(POLL_INTERVAL)
        .open()
        .with_context(|| format!("failed to open receiver transport {}", path.display()))
}

fn clone_port(port: &dyn SerialPort, path: &Path) -> Result<Box<dyn SerialPort>> {
    port.try_clone()
        .with_context(|| format!("failed to clone receiver transport {}", path.display()))
}

/// Open every receiver transport. Any failure is fatal to the daemon.
///
/// Must be called from inside the runtime; the pump threads use its handle.
pub fn open_all(config: &ReceiverConfig) -> Result<Transports> {
    let runtime = Handle::current();

    let config_port = open(&config.config_path, config.uart1_baud)?;
    // The status sentences usually share the configuration UART. Ports are
    // opened exclusively, so reuse the handle rather than open it twice.
    let status_port = if config.status_path == config.config_path {
        clone_port(config_port.as_ref(), &config.config_path)?
    } else {
        open(&config.status_path, config.uart1_baud)?
    };
    let correction_port = open(&config.correction_path, config.uart2_baud)?;
    let correction_out = clone_port(correction_port.as_ref(), &config.correction_path)?;

    let transports = Transports {
        config: pump_writes("uart-config", config_port, runtime.clone())?,
        status: pump_reads("uart-status", status_port, runtime.clone())?,
        correction_rx: pump_reads("uart-rtcm-rx", correction_port, runtime.clone())?,
        correction_tx: pump_writes("uart-rtcm-tx", correction_out, runtime)?,
    };

    tracing::info!(
        config = %config.config_path.display(),
        status = %config.status_path.display(),
        correction = %config.correction_path.display(),
        uart1_baud = config.uart1_baud,
        uart2_baud = config.uart2_baud,
        "receiver transports open"
    );
    Ok(transports)
}

// ── Pump threads ──────────────────────────────────────────────────────────────

/// Copy bytes from a blocking `source` into the returned pipe.
///
/// Device EOF or a read error closes the pipe, which the async reader sees
/// as EOF. The thread also exits once the async end has been dropped.
fn pump_reads<R>(name: &str, mut source: R, runtime: Handle) -> io::Result<DuplexStream>
where
    R: Read + Send + 'static,
{
    let (near, mut far) = tokio::io::duplex(PIPE_CAPACITY);
    let label = name.to_string();
    std::thread::Builder::new()
        .name(label.clone())
        .spawn(move || {
            let mut buf = [0u8; 1024];
            loop {
                let n = match source.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(e) if is_idle(&e) => continue,
                    Err(e) => {
                        tracing::warn!(port = %label, error = %e, "UART read failed");
                        break;
                    }
                };
                if runtime.block_on(far.write_all(&buf[..n])).is_err() {
                    break;
                }
            }
            tracing::debug!(port = %label, "UART reader stopped");
        })?;
    Ok(near)
}

/// Copy bytes written to the returned pipe onto a blocking `sink`.
///
/// A device write error ends the thread and closes the pipe, so later
/// writes on the async end fail with a broken pipe.
fn pump_writes<W>(name: &str, mut sink: W, runtime: Handle) -> io::Result<DuplexStream>
where
    W: Write + Send + 'static,
{
    let (near, mut far) = tokio::io::duplex(PIPE_CAPACITY);
    let label = name.to_string();
    std::thread::Builder::new()
        .name(label.clone())
        .spawn(move || {
            let mut buf = [0u8; 1024];
            loop {
                let n = match runtime.block_on(far.read(&mut buf)) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => n,
                };
                if let Err(e) = write_fully(&mut sink, &buf[..n]) {
                    tracing::warn!(port = %label, error = %e, "UART write failed");
                    break;
                }
            }
            tracing::debug!(port = %label, "UART writer stopped");
        })?;
    Ok(near)
}

/// `write_all` that keeps going through device timeouts.
fn write_fully<W: Write>(sink: &mut W, mut data: &[u8]) -> io::Result<()> {
    while !data.is_empty() {
        match sink.write(data) {
            Ok(0) => return Err(ErrorKind::WriteZero.into()),
            Ok(n) => data = &data[n..],
            Err(e) if is_idle(&e) => continue,
            Err(e) => return Err(e),
        }
    }
    sink.flush()
}

fn is_idle(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
    )
}
