//! Configuration system for basecast.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $BASECAST_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/basecast/config.toml
//!   3. ~/.config/basecast/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasecastConfig {
    pub receiver: ReceiverConfig,
    pub caster: CasterConfig,
    pub relay: RelayConfig,
    pub base: BaseConfig,
    pub api: ApiConfig,
    pub mode: ModeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverConfig {
    /// Device the UBX configuration commands are written to.
    pub config_path: PathBuf,
    /// Device NMEA status sentences are read from.
    pub status_path: PathBuf,
    /// Device RTCM3 corrections are read from and relayed corrections written to.
    pub correction_path: PathBuf,
    /// Bounded wait on the correction port before a keepalive is sent.
    pub read_timeout_ms: u64,
    /// Longest NMEA line kept; longer lines are dropped.
    pub line_max: usize,
    /// Correction read buffer size.
    pub chunk_size: usize,
    /// Line rate of the configuration/status UART.
    pub uart1_baud: u32,
    /// Baud rate programmed into the receiver's correction UART. The host
    /// side of the correction port is opened at the same rate.
    pub uart2_baud: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CasterConfig {
    pub port: u16,
    pub mountpoint: String,
    /// Advertised in the source table.
    pub lat: String,
    pub lon: String,
    /// Per-client write deadline. A client that misses it is dropped.
    pub send_timeout_ms: u64,
    /// Sent to clients when the receiver is quiet. Empty = disabled.
    pub keepalive: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Upstream caster host. Empty = relay not configured.
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub mountpoint: String,
    pub read_timeout_ms: u64,
    /// Connect to `mountpoint` at startup.
    pub auto_connect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupMode {
    Rover,
    SurveyIn,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    /// Mode entered after the startup defaults.
    pub startup_mode: StartupMode,
    /// Fixed position as decimal strings (degrees, degrees, metres).
    pub lat: String,
    pub lon: String,
    pub alt: String,
    pub survey_min_duration_secs: u32,
    /// Metres, decimal string.
    pub survey_accuracy_m: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Pause after each mode change so the receiver can apply it.
    pub settle_delay_ms: u64,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("/dev/ttyS1"),
            status_path: PathBuf::from("/dev/ttyS1"),
            correction_path: PathBuf::from("/dev/ttyS2"),
            read_timeout_ms: 1000,
            line_max: 256,
            chunk_size: 2048,
            uart1_baud: 38_400,
            uart2_baud: 115_200,
        }
    }
}

impl Default for CasterConfig {
    fn default() -> Self {
        Self {
            port: 2101,
            mountpoint: "BASE".into(),
            lat: "21.028511".into(),
            lon: "105.804817".into(),
            send_timeout_ms: 2000,
            keepalive: "GNSS".into(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 2101,
            user: String::new(),
            password: String::new(),
            mountpoint: String::new(),
            read_timeout_ms: 1000,
            auto_connect: false,
        }
    }
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            startup_mode: StartupMode::Rover,
            lat: String::new(),
            lon: String::new(),
            alt: String::new(),
            survey_min_duration_secs: 60,
            survey_accuracy_m: "2.0".into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 1000,
        }
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────────

impl ReceiverConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

impl CasterConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    pub fn keepalive_payload(&self) -> Option<&[u8]> {
        (!self.keepalive.is_empty()).then(|| self.keepalive.as_bytes())
    }
}

impl RelayConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }
}

impl ModeConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_or_home().join(".config"))
        .join("basecast")
}

fn dirs_or_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
    #[error("failed to write {0}: {1}")]
    WriteFailed(PathBuf, std::io::Error),
    #[error("failed to serialize: {0}")]
    SerializeFailed(toml::ser::Error),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl BasecastConfig {
    /// Load config: env vars → file → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::file_path();
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadFailed(path.clone(), e))?;
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.clone(), e))?
        } else {
            BasecastConfig::default()
        };
        config.apply_env_overrides(|k| std::env::var(k).ok());
        Ok(config)
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var("BASECAST_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Write default config if none exists. Returns the path.
    pub fn write_default_if_missing() -> Result<PathBuf, ConfigError> {
        let path = Self::file_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::WriteFailed(path.clone(), e))?;
            }
            let text = toml::to_string_pretty(&BasecastConfig::default())
                .map_err(ConfigError::SerializeFailed)?;
            std::fs::write(&path, text)
                .map_err(|e| ConfigError::WriteFailed(path.clone(), e))?;
        }
        Ok(path)
    }

    /// Apply BASECAST_* overrides. `lookup` is `std::env::var` outside tests.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(p) = lookup("BASECAST_CASTER__PORT").and_then(|v| v.parse().ok()) {
            self.caster.port = p;
        }
        if let Some(v) = lookup("BASECAST_RELAY__HOST") {
            self.relay.host = v;
        }
        if let Some(p) = lookup("BASECAST_RELAY__PORT").and_then(|v| v.parse().ok()) {
            self.relay.port = p;
        }
        if let Some(v) = lookup("BASECAST_RELAY__USER") {
            self.relay.user = v;
        }
        if let Some(v) = lookup("BASECAST_RELAY__PASSWORD") {
            self.relay.password = v;
        }
        if let Some(v) = lookup("BASECAST_RELAY__MOUNTPOINT") {
            self.relay.mountpoint = v;
        }
        if let Some(p) = lookup("BASECAST_API__PORT").and_then(|v| v.parse().ok()) {
            self.api.port = p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_field_deployment() {
        let config = BasecastConfig::default();
        assert_eq!(config.caster.port, 2101);
        assert_eq!(config.caster.mountpoint, "BASE");
        assert_eq!(config.caster.keepalive_payload(), Some(&b"GNSS"[..]));
        assert_eq!(config.receiver.line_max, 256);
        assert_eq!(config.receiver.chunk_size, 2048);
        assert_eq!(config.receiver.uart1_baud, 38_400);
        assert_eq!(config.receiver.uart2_baud, 115_200);
        assert_eq!(config.api.port, 8080);
        assert!(!config.relay.is_configured());
        assert_eq!(config.base.startup_mode, StartupMode::Rover);
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            ("BASECAST_CASTER__PORT", "2102"),
            ("BASECAST_RELAY__HOST", "caster.example"),
            ("BASECAST_RELAY__PORT", "not-a-port"),
            ("BASECAST_RELAY__MOUNTPOINT", "MNT1"),
        ]
        .into_iter()
        .collect();

        let mut config = BasecastConfig::default();
        config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.caster.port, 2102);
        assert_eq!(config.relay.host, "caster.example");
        // Unparsable values leave the previous setting alone.
        assert_eq!(config.relay.port, 2101);
        assert_eq!(config.relay.mountpoint, "MNT1");
        assert!(config.relay.is_configured());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let text = r#"
            [caster]
            keepalive = ""

            [base]
            startup_mode = "fixed"
            lat = "21.0285110"
        "#;
        let config: BasecastConfig = toml::from_str(text).unwrap();
        assert_eq!(config.caster.keepalive_payload(), None);
        assert_eq!(config.caster.port, 2101);
        assert_eq!(config.base.startup_mode, StartupMode::Fixed);
        assert_eq!(config.base.lat, "21.0285110");
        assert_eq!(config.mode.settle_delay(), Duration::from_secs(1));
    }

    #[test]
    fn write_default_if_missing_creates_file() {
        let tmp = std::env::temp_dir()
            .join(format!("basecast-config-test-{}", std::process::id()));
        let config_path = tmp.join("config.toml");
        std::fs::create_dir_all(&tmp).unwrap();

        unsafe {
            std::env::set_var("BASECAST_CONFIG", config_path.to_str().unwrap());
        }

        let path = BasecastConfig::write_default_if_missing().expect("write_default_if_missing failed");
        assert!(path.exists());

        let config = BasecastConfig::load().expect("load should succeed");
        assert_eq!(config.caster.mountpoint, "BASE");

        unsafe {
            std::env::remove_var("BASECAST_CONFIG");
        }
        let _ = std::fs::remove_dir_all(&tmp);
    }
}
