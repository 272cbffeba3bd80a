//! Shutterbug headless runner.
//!
//! Reads commands from stdin (see `input`), writes one JSON snapshot per line
//! to stdout and logs to stderr.
//!
//! ```text
//! shutterbug [--config <path>] [--events-only]
//! ```

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shutterbug_app::game_loop;
use shutterbug_app::input;
use shutterbug_app::state::{GameLoopCommand, SharedSnapshot};
use shutterbug_sim::SimConfig;

struct Args {
    config: Option<String>,
    events_only: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        events_only: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(iter.next().context("--config needs a path")?);
            }
            "--events-only" => args.events_only = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => SimConfig::load(path).with_context(|| format!("loading config {path}"))?,
        None => SimConfig::default(),
    };
    info!(seed = config.seed, "starting shutterbug");

    let latest = SharedSnapshot::new();
    let events_only = args.events_only;
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, latest.clone(), move |snapshot| {
        if events_only && snapshot.events.is_empty() {
            return;
        }
        let mut out = std::io::stdout().lock();
        match serde_json::to_string(snapshot) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(err) => warn!(%err, "failed to serialize snapshot"),
        }
    })?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match input::parse_line(&line) {
            Ok(Some(GameLoopCommand::Shutdown)) => break,
            Ok(Some(command)) => {
                if cmd_tx.send(command).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => warn!("{err:#}"),
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        bail!("game loop thread panicked");
    }

    if let Some(snapshot) = latest.latest() {
        info!(
            photos = snapshot.score.photos_taken,
            captured = snapshot.score.targets_captured,
            "{}",
            snapshot.score.label
        );
    }
    Ok(())
}
