use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = todo::cli::Cli::parse();
    let config = todo::config::from_cli(&cli)?;

    match cli.command.clone() {
        Some(todo::cli::CliCommand::Tui) => {
            todo::tui::run(config)?;
        }
        Some(todo::cli::CliCommand::Desktop) | None => {
            let options = todo::DesktopOptions {
                config,
                log_filter: cli.log_filter.clone(),
            };
            todo::desktop::run(options)?;
        }
    }

    Ok(())
}
