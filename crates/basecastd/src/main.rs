//! basecastd: GNSS RTK base station daemon.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;

use basecast_core::config::{BasecastConfig, StartupMode};
use basecast_services::{
    CasterServer, ClientRegistry, CorrectionReader, Dispatcher, EventBus, ModeController,
    MountTable, ReceiverLink, RelayClient, StatusReader, StatusRegistry, TcpClients,
};

mod transport;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config
    if let Err(e) = BasecastConfig::write_default_if_missing() {
        tracing::warn!(error = %e, "failed to write default config");
    }
    let config = BasecastConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        BasecastConfig::default()
    });
    tracing::info!(
        caster_port = config.caster.port,
        mountpoint = %config.caster.mountpoint,
        api_port = config.api.port,
        "basecastd starting"
    );

    let ports = transport::open_all(&config.receiver)?;

    // Shared state
    let status = StatusRegistry::new();
    let bus = EventBus::new();
    let link = ReceiverLink::new(ports.config, ports.correction_tx);
    let mode = ModeController::new(link.clone(), status.clone(), config.mode.settle_delay());

    let clients: TcpClients = ClientRegistry::new(status.clone(), config.caster.send_timeout());
    bus.add_chunk_sink(Arc::new(clients.clone()));

    let relay = RelayClient::new(
        config.relay.clone(),
        link,
        status.clone(),
        bus.clone(),
        MountTable::new(),
    );
    let dispatcher = Dispatcher::new(mode.clone(), relay.clone());

    // Receiver baseline, then the configured operating mode
    mode.set_defaults(config.receiver.uart2_baud)
        .await
        .context("failed to apply receiver defaults")?;
    let base = &config.base;
    let startup = match base.startup_mode {
        StartupMode::Rover => mode.set_rover().await,
        StartupMode::SurveyIn => {
            mode.set_survey_in(base.survey_min_duration_secs, &base.survey_accuracy_m)
                .await
        }
        StartupMode::Fixed => mode.set_fixed(&base.lat, &base.lon, &base.alt).await,
    };
    if let Err(e) = startup {
        tracing::error!(mode = ?base.startup_mode, error = %e, "startup mode not applied");
    }

    // ── Shutdown channel ─────────────────────────────────────────────────────
    let (shutdown_tx, _) = tokio::sync::broadcast::channel::<()>(1);

    {
        let shutdown = shutdown_tx.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutdown signal received");
            let _ = shutdown.send(());
        });
    }

    // ── Spawn tasks ──────────────────────────────────────────────────────────

    let status_task = tokio::spawn(
        StatusReader::new(
            ports.status,
            status.clone(),
            bus.clone(),
            config.receiver.line_max,
            shutdown_tx.subscribe(),
        )
        .run(),
    );

    let correction_task = tokio::spawn(
        CorrectionReader::new(
            ports.correction_rx,
            bus.clone(),
            config.receiver.chunk_size,
            config.receiver.read_timeout(),
            config.caster.keepalive_payload().map(Bytes::copy_from_slice),
            shutdown_tx.subscribe(),
        )
        .run(),
    );

    let caster = CasterServer::bind(&config.caster, clients.clone(), shutdown_tx.subscribe())
        .await?;
    let caster_task = tokio::spawn(caster.run());

    let status_printer = {
        let status = status.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(30));
            loop {
                interval.tick().await;
                for (key, value) in status.snapshot() {
                    tracing::debug!(key, value = %value, "status");
                }
            }
        })
    };

    // Control API
    let api_port = config.api.port;
    let api_task = {
        let state = basecast_api::ApiState {
            status: status.clone(),
            clients: clients.clone(),
            dispatcher: dispatcher.clone(),
        };
        tokio::spawn(async move {
            if let Err(e) = basecast_api::serve(state, api_port).await {
                tracing::error!(error = %e, "control API failed");
            }
        })
    };

    if config.relay.auto_connect {
        match dispatcher.spawn_relay(config.relay.mountpoint.clone()) {
            Ok(detail) => tracing::info!(detail = %detail, "relay auto-connect"),
            Err(e) => tracing::warn!(error = %e, "relay auto-connect skipped"),
        }
    }

    // ── Wait for exit ────────────────────────────────────────────────────────

    let mut shutdown_rx = shutdown_tx.subscribe();

    tokio::select! {
        _ = shutdown_rx.recv()  => tracing::info!("shutting down"),
        r = status_task         => tracing::error!("status reader exited: {:?}", r),
        r = correction_task     => tracing::error!("correction reader exited: {:?}", r),
        r = caster_task         => tracing::error!("caster exited: {:?}", r),
        r = api_task            => tracing::error!("control API exited: {:?}", r),
        r = status_printer      => tracing::error!("status printer exited: {:?}", r),
    }

    relay.disconnect();
    let _ = shutdown_tx.send(());
    Ok(())
}
