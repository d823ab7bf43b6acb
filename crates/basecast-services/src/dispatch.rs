//! Routes operator commands to the mode controller and relay client.

use serde::Serialize;

use basecast_core::Command;

use crate::mode::ModeController;
use crate::relay::RelayClient;
use crate::StationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub action: &'static str,
    pub detail: String,
}

#[derive(Clone)]
pub struct Dispatcher {
    mode: ModeController,
    relay: RelayClient,
}

impl Dispatcher {
    pub fn new(mode: ModeController, relay: RelayClient) -> Self {
        Self { mode, relay }
    }

    pub fn relay(&self) -> &RelayClient {
        &self.relay
    }

    pub fn mode(&self) -> &ModeController {
        &self.mode
    }

    pub async fn dispatch(&self, command: Command) -> Result<Reply, StationError> {
        let action = command.name();
        tracing::info!(action, "dispatching command");

        let detail = match command {
            Command::SetRover => {
                self.mode.set_rover().await?;
                "rover".to_string()
            }
            Command::SetSurveyIn {
                min_duration_secs,
                accuracy_limit_m,
            } => {
                self.mode
                    .set_survey_in(min_duration_secs, &accuracy_limit_m)
                    .await?;
                format!("survey-in for at least {min_duration_secs}s to {accuracy_limit_m} m")
            }
            Command::SetFixed { lat, lon, alt } => {
                self.mode.set_fixed(&lat, &lon, &alt).await?;
                format!("fixed at {lat}, {lon}, {alt} m")
            }
            Command::DiscoverMounts => {
                let count = self.relay.discover_mount_points().await?;
                format!("{count} mount points")
            }
            Command::RelayConnect { mountpoint } => {
                let mountpoint = mountpoint
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| self.relay.default_mountpoint().to_string());
                self.spawn_relay(mountpoint)?
            }
            Command::RelayDisconnect => {
                self.relay.disconnect();
                "disconnect requested".to_string()
            }
        };
        Ok(Reply { action, detail })
    }

    /// Run the relay stream in the background. The relay is claimed before
    /// this returns, so a disconnect dispatched right after always applies
    /// to this stream.
    pub fn spawn_relay(&self, mountpoint: String) -> Result<String, StationError> {
        if mountpoint.is_empty() {
            return Err(StationError::Configuration("no mount point given".into()));
        }
        let session = self.relay.claim()?;
        let detail = format!("connecting to {mountpoint}");
        tokio::spawn(async move {
            if let Err(e) = session.stream(&mountpoint).await {
                tracing::warn!(mountpoint = %mountpoint, error = %e, "relay connect failed");
            }
        });
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use basecast_core::config::RelayConfig;

    use crate::events::EventBus;
    use crate::mount_table::MountTable;
    use crate::status::{StatusKey, StatusRegistry};
    use crate::testutil::captured_link;

    fn dispatcher() -> (Dispatcher, StatusRegistry) {
        dispatcher_with(RelayConfig::default())
    }

    fn dispatcher_with(relay_config: RelayConfig) -> (Dispatcher, StatusRegistry) {
        let (link, _config, _correction) = captured_link();
        let status = StatusRegistry::new();
        let mode = ModeController::new(link.clone(), status.clone(), Duration::ZERO);
        let relay = RelayClient::new(
            relay_config,
            link,
            status.clone(),
            EventBus::new(),
            MountTable::new(),
        );
        (Dispatcher::new(mode, relay), status)
    }

    #[tokio::test]
    async fn mode_commands_update_status() {
        let (d, status) = dispatcher();
        let reply = d
            .dispatch(Command::SetSurveyIn {
                min_duration_secs: 60,
                accuracy_limit_m: "2.0".into(),
            })
            .await
            .unwrap();
        assert_eq!(reply.action, "set_survey_in");
        assert_eq!(status.get(StatusKey::GnssMode).as_deref(), Some("Base-Survey"));

        d.dispatch(Command::SetRover).await.unwrap();
        assert_eq!(status.get(StatusKey::GnssMode).as_deref(), Some("Rover"));
    }

    #[tokio::test]
    async fn errors_are_returned_to_the_caller() {
        let (d, _status) = dispatcher();
        let err = d
            .dispatch(Command::SetFixed {
                lat: "north".into(),
                lon: "105.8048170".into(),
                alt: "10.50".into(),
            })
            .await;
        assert!(matches!(err, Err(StationError::Coordinate(_))));

        // Default relay config has no mount point.
        let err = d.dispatch(Command::RelayConnect { mountpoint: None }).await;
        assert!(matches!(err, Err(StationError::Configuration(_))));
    }

    #[tokio::test]
    async fn disconnect_right_after_connect_stops_the_stream() {
        let upstream = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = upstream.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (mut sock, _) = upstream.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 512];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).await.unwrap();
                head.extend_from_slice(&buf[..n]);
            }
            sock.write_all(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n")
                .await
                .unwrap();
            // Never ends the stream; only the disconnect can.
            let mut rest = Vec::new();
            let _ = sock.read_to_end(&mut rest).await;
        });

        let (d, status) = dispatcher_with(RelayConfig {
            host: "127.0.0.1".into(),
            port,
            mountpoint: "MNT1".into(),
            read_timeout_ms: 100,
            ..RelayConfig::default()
        });

        // Back to back, before the stream task has had a chance to run.
        d.dispatch(Command::RelayConnect { mountpoint: None })
            .await
            .unwrap();
        assert!(d.relay().is_running());
        d.dispatch(Command::RelayDisconnect).await.unwrap();

        let stopped = tokio::time::timeout(Duration::from_secs(2), async {
            while d.relay().is_running() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;
        assert!(stopped.is_ok(), "relay kept streaming after disconnect");
        assert_eq!(status.get(StatusKey::NtripClient).as_deref(), Some("Disconnected"));
        tokio::time::timeout(Duration::from_secs(2), server)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn second_connect_is_busy_before_the_first_stream_runs() {
        let (d, _status) = dispatcher_with(RelayConfig {
            host: "127.0.0.1".into(),
            port: 1,
            mountpoint: "MNT1".into(),
            ..RelayConfig::default()
        });
        d.dispatch(Command::RelayConnect { mountpoint: None })
            .await
            .unwrap();
        let err = d.dispatch(Command::RelayConnect { mountpoint: None }).await;
        assert!(matches!(err, Err(StationError::Busy(_))));
    }
}
