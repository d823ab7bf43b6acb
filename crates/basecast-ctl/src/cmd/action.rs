//! Operator actions: receiver mode and relay control.

use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};

use super::http::{base_url, post_json_body};

#[derive(Deserialize)]
struct Reply {
    action: String,
    detail: String,
}

async fn send(port: u16, body: Value) -> Result<()> {
    let reply: Reply = post_json_body(&format!("{}/action", base_url(port)), &body).await?;
    println!("{}: {}", reply.action, reply.detail);
    Ok(())
}

pub async fn cmd_rover(port: u16) -> Result<()> {
    send(port, json!({ "action": "set_rover" })).await
}

pub async fn cmd_survey(port: u16, min_duration_secs: u32, accuracy_limit_m: &str) -> Result<()> {
    send(
        port,
        json!({
            "action": "set_survey_in",
            "min_duration_secs": min_duration_secs,
            "accuracy_limit_m": accuracy_limit_m,
        }),
    )
    .await
}

pub async fn cmd_fixed(port: u16, lat: &str, lon: &str, alt: &str) -> Result<()> {
    send(
        port,
        json!({ "action": "set_fixed", "lat": lat, "lon": lon, "alt": alt }),
    )
    .await
}

pub async fn cmd_discover(port: u16) -> Result<()> {
    send(port, json!({ "action": "discover_mounts" })).await
}

pub async fn cmd_connect(port: u16, mountpoint: Option<&str>) -> Result<()> {
    send(
        port,
        json!({ "action": "relay_connect", "mountpoint": mountpoint }),
    )
    .await
}

pub async fn cmd_disconnect(port: u16) -> Result<()> {
    send(port, json!({ "action": "relay_disconnect" })).await
}
