//! Breath trend viewer binary.
//!
//! Usage:
//!   breathscope [--config path/to/config.yaml] [path/to/signal.csv | https://host/signal.csv]
//!
//! Without `--config`, `~/.breathscope/config.yaml` is used if it exists.
//! Set `RUST_LOG=debug` for verbose output.

use std::path::PathBuf;

use breathscope::{run_viewer, ViewerConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut csv_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next().map(PathBuf::from);
        } else if csv_path.is_none() {
            csv_path = Some(PathBuf::from(arg));
        }
    }

    let loaded = match &config_path {
        Some(p) => ViewerConfig::load_from(p),
        None => ViewerConfig::load_or_default(),
    };
    let mut cfg = loaded.unwrap_or_else(|e| {
        log::warn!("{}; using default configuration", e);
        ViewerConfig::default()
    });
    if csv_path.is_some() {
        cfg.initial_path = csv_path;
    }

    log::info!("breathscope starting up");
    run_viewer(cfg)
}
