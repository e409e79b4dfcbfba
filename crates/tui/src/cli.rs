use clap::{value_parser, Parser, Subcommand};

use crate::config::ThemeChoice;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "todo",
    version,
    about = "A single-screen to-do list.",
    after_help = "Examples:\n  todo                 Open the desktop window (same as `todo desktop`)\n  todo tui             Run the same screen in the terminal\n  todo --theme light --toast-ms 3000"
)]
pub struct Cli {
    /// Colour theme (auto follows the system preference)
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeChoice>,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long = "toast-ms", value_name = "MILLIS", global = true, value_parser = value_parser!(u64))]
    pub toast_ms: Option<u64>,

    /// Drawer slide duration, in milliseconds (0 disables the animation)
    #[arg(long = "panel-ms", value_name = "MILLIS", global = true, value_parser = value_parser!(u64))]
    pub panel_ms: Option<u64>,

    /// Tracing filter for the desktop window, e.g. "info" or "info,todo_core=debug"
    #[arg(long = "log", value_name = "FILTER", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Open the iced desktop window (default command)
    Desktop,
    /// Run the keyboard-driven terminal UI
    Tui,
}
