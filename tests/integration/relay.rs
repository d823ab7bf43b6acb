use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::{TcpListener, TcpStream};

use basecast_services::{
    EventBus, MountTable, ReceiverLink, RelayClient, StationError, StatusKey, StatusRegistry,
};

use crate::*;

struct Relay {
    client: RelayClient,
    status: StatusRegistry,
    bus: EventBus,
    /// Receiver end of the correction port.
    correction: DuplexStream,
}

fn relay_to(port: u16) -> Relay {
    let (station_end, correction) = tokio::io::duplex(4096);
    let link = ReceiverLink::new(tokio::io::sink(), station_end);
    let status = StatusRegistry::new();
    let bus = EventBus::new();
    let client = RelayClient::new(
        relay_config(port, "MNT1"),
        link,
        status.clone(),
        bus.clone(),
        MountTable::new(),
    );
    Relay {
        client,
        status,
        bus,
        correction,
    }
}

fn relay_state(status: &StatusRegistry) -> String {
    status.get(StatusKey::NtripClient).unwrap_or_default()
}

/// Accept one connection and return it with its request head.
async fn accept_request(listener: &TcpListener) -> (TcpStream, String) {
    let (mut sock, _) = listener.accept().await.unwrap();
    let head = read_until(&mut sock, b"\r\n\r\n").await.unwrap();
    (sock, String::from_utf8(head).unwrap())
}

#[tokio::test]
async fn relay_streams_corrections_and_forwards_position() {
    let upstream = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut relay = relay_to(upstream.local_addr().unwrap().port());
    assert_eq!(relay_state(&relay.status), "Disconnected");

    let stream_task = {
        let client = relay.client.clone();
        tokio::spawn(async move { client.connect("MNT1").await })
    };

    let (mut sock, request) = accept_request(&upstream).await;
    assert!(request.starts_with("GET /MNT1 HTTP/1.1\r\n"));
    assert!(request.contains("Ntrip-Version: Ntrip/2.0\r\n"));
    assert!(request.contains("Authorization: Basic cm92ZXI6c2VjcmV0\r\n"));

    sock.write_all(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n")
        .await
        .unwrap();
    wait_until(Duration::from_secs(2), || relay_state(&relay.status) == "Connected")
        .await
        .unwrap();

    // Upstream chunk payload lands on the correction port, framing removed.
    sock.write_all(b"3\r\n\x01\x02\x03\r\n").await.unwrap();
    assert_eq!(
        read_exact(&mut relay.correction, 3).await.unwrap(),
        vec![1, 2, 3]
    );

    // Position sentences go upstream with CRLF.
    wait_until(Duration::from_secs(2), || relay.bus.has_line_subscriber())
        .await
        .unwrap();
    assert!(relay.bus.publish_line(GGA.to_string()));
    let forwarded = read_until(&mut sock, b"\r\n").await.unwrap();
    assert_eq!(forwarded, format!("{GGA}\r\n").into_bytes());

    // Disconnect is noticed within a read timeout or so.
    let started = Instant::now();
    relay.client.disconnect();
    let result = tokio::time::timeout(Duration::from_secs(2), stream_task)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
    assert!(started.elapsed() < Duration::from_millis(500));

    assert_eq!(relay_state(&relay.status), "Disconnected");
    assert!(!relay.client.is_running());
    assert!(!relay.bus.has_line_subscriber());

    // Upstream sees the connection close.
    let mut rest = Vec::new();
    sock.read_to_end(&mut rest).await.unwrap();
}

#[tokio::test]
async fn second_connect_is_busy_while_streaming() {
    let upstream = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let relay = relay_to(upstream.local_addr().unwrap().port());

    let stream_task = {
        let client = relay.client.clone();
        tokio::spawn(async move { client.connect("MNT1").await })
    };
    let (mut sock, _request) = accept_request(&upstream).await;
    sock.write_all(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n")
        .await
        .unwrap();
    wait_until(Duration::from_secs(2), || relay_state(&relay.status) == "Connected")
        .await
        .unwrap();

    assert!(matches!(
        relay.client.connect("MNT1").await,
        Err(StationError::Busy(_))
    ));
    assert_eq!(relay_state(&relay.status), "Connected");

    // Upstream ends the stream with the last chunk.
    sock.write_all(b"0\r\n\r\n").await.unwrap();
    let result = tokio::time::timeout(Duration::from_secs(2), stream_task)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
    assert_eq!(relay_state(&relay.status), "Disconnected");
}

#[tokio::test]
async fn discovery_reads_a_plain_source_table() {
    let upstream = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let relay = relay_to(upstream.local_addr().unwrap().port());

    let server = tokio::spawn(async move {
        let (mut sock, request) = accept_request(&upstream).await;
        let body = "STR;HN01;Hanoi;RTCM 3.2;\r\nSTR;HN02;Hanoi;RTCM 3.2;\r\nENDSOURCETABLE\r\n";
        let response = format!(
            "SOURCETABLE 200 OK\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(response.as_bytes()).await.unwrap();
        // Leave the socket open: Content-Length alone must end the read.
        tokio::time::sleep(Duration::from_secs(1)).await;
        request
    });

    assert_eq!(relay.client.discover_mount_points().await.unwrap(), 2);
    assert_eq!(relay.client.mounts().render(), "1\rHN01\rHN02");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET / HTTP/1.1\r\n"));
}
