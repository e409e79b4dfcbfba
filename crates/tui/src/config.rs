use anyhow::Context;

pub use todo_core::config::*;

use crate::cli::Cli;

pub fn from_cli(cli: &Cli) -> anyhow::Result<AppConfig> {
    let overrides = ConfigOverrides {
        theme: cli.theme,
        toast_ms: cli.toast_ms,
        panel_ms: cli.panel_ms,
    };
    AppConfig::discover(overrides).context("failed to resolve configuration")
}
