// gamepage desktop library.
// Everything the `gamepage` binary does short of parsing argv and exiting,
// so the launch sequence can be driven from tests with a fake facility.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod facility;
pub mod launcher;
pub mod webview;

use anyhow::Context;
use gamepage_common::path::executable_dir;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::LaunchArgs;
use crate::config::LauncherConfig;
use crate::webview::WebviewFacility;

/// Install the global `fmt` subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Open the configured page and block until its window is closed.
pub fn run(args: LaunchArgs) -> anyhow::Result<()> {
    let exe_dir = executable_dir().context("failed to locate the gamepage executable")?;

    let (mut config, source) = LauncherConfig::discover(args.config.as_deref(), &exe_dir)
        .context("failed to load launcher config")?;
    info!(%source, "loaded launcher config");
    config.apply_args(&args);

    let spec = launcher::build_window_spec(&config, &exe_dir)?;
    let facility = WebviewFacility::new().context("failed to initialize the windowing system")?;
    launcher::launch(facility, spec).context("desktop window failed")
}
