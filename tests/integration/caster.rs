use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use basecast_services::{
    CasterServer, ClientRegistry, EventBus, StatusKey, StatusRegistry, TcpClients,
};

use crate::*;

struct Caster {
    addr: SocketAddr,
    clients: TcpClients,
    status: StatusRegistry,
    bus: EventBus,
    _shutdown: broadcast::Sender<()>,
}

async fn start_caster() -> Caster {
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

    Caster {
        addr,
        clients,
        status,
        bus,
        _shutdown: shutdown,
    }
}

async fn attach_rover(caster: &Caster) -> TcpStream {
    let mut rover = TcpStream::connect(caster.addr).await.unwrap();
    rover
        .write_all(b"GET /BASE HTTP/1.1\r\nUser-Agent: NTRIP test\r\n\r\n")
        .await
        .unwrap();
    let reply = read_until(&mut rover, b"\r\n").await.unwrap();
    assert_eq!(reply, b"ICY 200 OK\r\n");
    rover
}

#[tokio::test]
async fn source_table_lists_the_mountpoint() {
    let caster = start_caster().await;
    let mut client = TcpStream::connect(caster.addr).await.unwrap();
    client.write_all(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();

    let mut response = String::new();
    client.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("SOURCETABLE 200 OK\r\n"));
    assert!(response.contains("Content-Length: 115\r\n"));
    assert!(response.contains("STR;BASE;BASE;RTCM 3;"));
    assert!(response.ends_with("ENDSOURCETABLE\r\n\r\n"));
    assert!(caster.clients.is_empty());
}

#[tokio::test]
async fn rover_receives_published_chunks() {
    let caster = start_caster().await;
    let mut rover = attach_rover(&caster).await;

    wait_until(Duration::from_secs(2), || caster.clients.len() == 1)
        .await
        .unwrap();
    assert_eq!(caster.status.get(StatusKey::NtripCaster).as_deref(), Some("1"));

    caster.bus.publish_chunk(Bytes::from_static(&[1, 2, 3])).await;
    assert_eq!(read_exact(&mut rover, 3).await.unwrap(), vec![1, 2, 3]);

    // Closing the rover frees its slot.
    drop(rover);
    wait_until(Duration::from_secs(2), || caster.clients.is_empty())
        .await
        .unwrap();
    assert_eq!(caster.status.get(StatusKey::NtripCaster).as_deref(), Some("0"));
}

#[tokio::test]
async fn every_rover_gets_every_chunk_in_order() {
    let caster = start_caster().await;
    let mut rovers = Vec::new();
    for _ in 0..3 {
        rovers.push(attach_rover(&caster).await);
    }
    wait_until(Duration::from_secs(2), || caster.clients.len() == 3)
        .await
        .unwrap();

    for chunk in [&b"\xd3\x00\x01"[..], &b"\xd3\x00\x02"[..]] {
        caster.bus.publish_chunk(Bytes::copy_from_slice(chunk)).await;
    }
    for rover in &mut rovers {
        assert_eq!(
            read_exact(rover, 6).await.unwrap(),
            b"\xd3\x00\x01\xd3\x00\x02".to_vec()
        );
    }
}

#[tokio::test]
async fn unknown_mountpoint_is_not_found() {
    let caster = start_caster().await;
    let mut client = TcpStream::connect(caster.addr).await.unwrap();
    client.write_all(b"GET /OTHER HTTP/1.1\r\n\r\n").await.unwrap();

    let mut response = String::new();
    client.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(caster.clients.is_empty());
}

#[tokio::test]
async fn non_get_method_is_not_implemented() {
    let caster = start_caster().await;
    let mut client = TcpStream::connect(caster.addr).await.unwrap();
    client
        .write_all(b"POST /BASE HTTP/1.1\r\nContent-Length: 0\r\n\r\n")
        .await
        .unwrap();

    let mut response = String::new();
    client.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 501 Not Implemented\r\n"));
    assert!(caster.clients.is_empty());
}

#[tokio::test]
async fn malformed_request_head_is_a_bad_request() {
    let caster = start_caster().await;
    let mut client = TcpStream::connect(caster.addr).await.unwrap();
    client.write_all(b"HELLO\r\n\r\n").await.unwrap();

    let mut response = String::new();
    client.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(caster.clients.is_empty());
}

#[tokio::test]
async fn streaming_rover_never_sees_an_error_response() {
    let caster = start_caster().await;
    let mut rover = attach_rover(&caster).await;
    wait_until(Duration::from_secs(2), || caster.clients.len() == 1)
        .await
        .unwrap();

    // A second request on a streaming socket is ignored, not answered.
    rover.write_all(b"HELLO\r\n\r\n").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    caster.bus.publish_chunk(Bytes::from_static(b"\xd3\x00\x00")).await;
    assert_eq!(
        read_exact(&mut rover, 3).await.unwrap(),
        b"\xd3\x00\x00".to_vec()
    );
    assert_eq!(caster.clients.len(), 1);
}

#[tokio::test]
async fn shutdown_stops_accepting() {
    let config = caster_config();
    let status = StatusRegistry::new();
    let clients: TcpClients = ClientRegistry::new(status, config.send_timeout());
    let shutdown = shutdown();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = CasterServer::new(listener, &config, clients, shutdown.subscribe());
    let task = tokio::spawn(server.run());

    shutdown.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(2), task)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}
