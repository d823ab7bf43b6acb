//! Receiver ports through to rovers: ingest, fan-out, mode commands.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use basecast_core::{Command, FramedCommand};
use basecast_services::{
    CasterServer, ClientRegistry, CorrectionReader, Dispatcher, EventBus, ModeController,
    MountTable, ReceiverLink, RelayClient, StatusKey, StatusReader, StatusRegistry, TcpClients,
};

use crate::*;

#[tokio::test]
async fn receiver_corrections_reach_a_rover() {
    let config = caster_config();
    let status = StatusRegistry::new();
    let bus = EventBus::new();
    let clients: TcpClients = ClientRegistry::new(status.clone(), config.send_timeout());
    bus.add_chunk_sink(Arc::new(clients.clone()));
    let shutdown = shutdown();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = CasterServer::new(listener, &config, clients.clone(), shutdown.subscribe());
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());

    let (mut receiver_out, station_in) = tokio::io::duplex(4096);
    let reader = tokio::spawn(
        CorrectionReader::new(
            station_in,
            bus.clone(),
            2048,
            Duration::from_millis(100),
            config.keepalive_payload().map(Bytes::copy_from_slice),
            shutdown.subscribe(),
        )
        .run(),
    );

    let mut rover = TcpStream::connect(addr).await.unwrap();
    rover.write_all(b"GET /BASE HTTP/1.1\r\n\r\n").await.unwrap();
    read_until(&mut rover, b"ICY 200 OK\r\n").await.unwrap();
    wait_until(Duration::from_secs(2), || clients.len() == 1)
        .await
        .unwrap();

    // An idle receiver still produces keepalives.
    read_until(&mut rover, b"GNSS").await.unwrap();

    let frame = b"\xd3\x00\x13\x3e\xd0\x00";
    receiver_out.write_all(frame).await.unwrap();
    read_until(&mut rover, frame).await.unwrap();

    // Receiver port EOF ends the reader.
    drop(receiver_out);
    let result = tokio::time::timeout(Duration::from_secs(2), reader)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn status_sentences_update_registry_and_feed_the_relay() {
    let status = StatusRegistry::new();
    let bus = EventBus::new();
    let shutdown = shutdown();
    let mut lines = bus.subscribe_lines();

    let (mut receiver_out, station_in) = tokio::io::duplex(4096);
    tokio::spawn(
        StatusReader::new(station_in, status.clone(), bus.clone(), 256, shutdown.subscribe())
            .run(),
    );

    let gst = "$GPGST,123519,1.2,0.9,0.7,45.0,0.8,0.6,1.5";
    let input = format!("$GPGSV,1,1,00\r\n{GGA}\r\n$GPGGA,1,2,3*00\r\n{gst}\r\n");
    receiver_out.write_all(input.as_bytes()).await.unwrap();

    let forwarded = tokio::time::timeout(Duration::from_secs(2), lines.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(forwarded, GGA);

    wait_until(Duration::from_secs(2), || {
        status.get(StatusKey::GnssAccuracy).as_deref() == Some(gst)
    })
    .await
    .unwrap();
    // The corrupt GGA did not replace the good one.
    assert_eq!(status.get(StatusKey::GnssStatus).as_deref(), Some(GGA));
    assert!(lines.try_recv().is_err());
}

#[tokio::test]
async fn fixed_position_command_reaches_the_config_port() {
    let (config_port, mut config_rx) = tokio::io::duplex(8192);
    let link = ReceiverLink::new(config_port, tokio::io::sink());
    let status = StatusRegistry::new();
    let mode = ModeController::new(link.clone(), status.clone(), Duration::ZERO);
    let relay = RelayClient::new(
        relay_config(2101, ""),
        link,
        status.clone(),
        EventBus::new(),
        MountTable::new(),
    );
    let dispatcher = Dispatcher::new(mode, relay);

    let reply = dispatcher
        .dispatch(Command::SetFixed {
            lat: "21.0285110".into(),
            lon: "105.8048170".into(),
            alt: "10.50".into(),
        })
        .await
        .unwrap();
    assert_eq!(reply.action, "set_fixed");
    assert_eq!(status.get(StatusKey::GnssMode).as_deref(), Some("Base-Fixed"));

    // Ten single-key VALSET frames, all written before the reply.
    let mut written = vec![0u8; 8192];
    let n = tokio::time::timeout(Duration::from_secs(1), config_rx.read(&mut written))
        .await
        .unwrap()
        .unwrap();
    let mut rest = &written[..n];
    let mut values = Vec::new();
    while let Some((frame, used)) = FramedCommand::split_from(rest) {
        for (key, value) in frame.valset_entries().unwrap() {
            values.push((key.name, key.kind.decode_int(value).unwrap()));
        }
        rest = &rest[used..];
    }
    assert!(rest.is_empty());
    assert_eq!(values.len(), 10);
    assert!(values.contains(&("TMODE-LAT", 210285110)));
    assert!(values.contains(&("TMODE-LAT_HP", 10)));
    assert!(values.contains(&("TMODE-LON", 1058048170)));
    assert!(values.contains(&("TMODE-HEIGHT", 1050)));
    assert_eq!(values.last(), Some(&("UART2OUTPROT-RTCM3X", 1)));
}
