use std::path::PathBuf;

use anyhow::Context;
use slopewatch::config::{MonitorConfig, CONFIG_ENV_VAR};

fn main() -> anyhow::Result<()> {
    slopewatch::logging::init();

    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR))
        .map(PathBuf::from);
    let cfg = match path {
        Some(p) => MonitorConfig::load(&p)?,
        None => MonitorConfig::default(),
    };

    slopewatch::run_monitor(cfg)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("dashboard window failed")
}
