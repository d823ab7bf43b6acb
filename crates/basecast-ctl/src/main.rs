//! basecast-ctl: command-line interface for the base station daemon.

use anyhow::{Context, Result};

mod cmd;

use cmd::{action, status};

const DEFAULT_PORT: u16 = 8080;

fn print_usage() {
    println!("Usage: basecast-ctl [--port <port>] <command>");
    println!();
    println!("Commands:");
    println!("  status                      Show receiver, relay and caster status");
    println!("  rover                       Switch the receiver to rover mode");
    println!("  survey <secs> <acc_m>       Start a survey-in");
    println!("  fixed <lat> <lon> <alt>     Use a known base position");
    println!("  discover                    Fetch the upstream source table");
    println!("  mounts                      List upstream mount points");
    println!("  connect [mountpoint]        Relay corrections from the upstream caster");
    println!("  disconnect                  Stop the relay");
    println!();
    println!("Options:");
    println!("  --port <port>   Control API port (default: {})", DEFAULT_PORT);
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Parse --port option
    let mut port = DEFAULT_PORT;
    let mut remaining: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--port" {
            i += 1;
            port = args
                .get(i)
                .context("--port requires a value")?
                .parse()
                .context("--port must be a number")?;
        } else {
            remaining.push(&args[i]);
        }
        i += 1;
    }

    match remaining.as_slice() {
        ["status"] | [] => status::cmd_status(port).await,
        ["mounts"] => status::cmd_mounts(port).await,
        ["rover"] => action::cmd_rover(port).await,
        ["survey", secs, acc] => {
            let secs = secs.parse().context("survey duration must be whole seconds")?;
            action::cmd_survey(port, secs, acc).await
        }
        ["fixed", lat, lon, alt] => action::cmd_fixed(port, lat, lon, alt).await,
        ["discover"] => action::cmd_discover(port).await,
        ["connect"] => action::cmd_connect(port, None).await,
        ["connect", mountpoint] => action::cmd_connect(port, Some(*mountpoint)).await,
        ["disconnect"] => action::cmd_disconnect(port).await,
        ["help"] | ["--help"] | ["-h"] => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}
