//! Station status and mount table commands.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Deserialize;

use super::http::{base_url, get_json};

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StatusResponse {
    status: BTreeMap<String, String>,
    mode: Option<String>,
    relay_running: bool,
    clients: Vec<ClientInfo>,
}

#[derive(Deserialize)]
struct ClientInfo {
    id: u64,
    peer: String,
    connected_secs: u64,
}

#[derive(Deserialize)]
struct MountsResponse {
    valid: bool,
    names: Vec<String>,
}

// ── Commands ──────────────────────────────────────────────────────────────────

pub async fn cmd_status(port: u16) -> Result<()> {
    let resp: StatusResponse = get_json(&format!("{}/status", base_url(port))).await?;
    let field = |key: &str| resp.status.get(key).map(String::as_str).unwrap_or("-");

    println!("═══════════════════════════════════════");
    println!("  Base Station Status");
    println!("═══════════════════════════════════════");
    println!("  Mode          : {}", resp.mode.as_deref().unwrap_or("unset"));
    println!("  Relay         : {}", field("NTRIP_CLI_STATUS"));
    println!("  Relay running : {}", if resp.relay_running { "yes" } else { "no" });
    println!("  Rovers        : {}", field("NTRIP_CAS_STATUS"));
    println!("  Last GGA      : {}", field("GNSS_STATUS"));
    println!("  Last GST      : {}", field("GNSS_ACCURACY"));

    if resp.clients.is_empty() {
        println!("\n  No rovers connected.");
    } else {
        println!("\n  Rovers:");
        for c in &resp.clients {
            println!("  ┌─ #{}", c.id);
            println!("  │  peer   : {}", c.peer);
            println!("  └─ uptime : {}s", c.connected_secs);
        }
    }

    Ok(())
}

pub async fn cmd_mounts(port: u16) -> Result<()> {
    let resp: MountsResponse = get_json(&format!("{}/mounts", base_url(port))).await?;

    if !resp.valid {
        println!("No mount points known. Run `basecast-ctl discover` first.");
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  Upstream Mount Points ({})", resp.names.len());
    println!("═══════════════════════════════════════");
    for name in &resp.names {
        println!("  {}", name);
    }

    Ok(())
}
