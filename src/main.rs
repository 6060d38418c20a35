//! planet CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use planet::api::HttpClient;
use planet::cli::{Cli, CommandDispatcher};
use planet::config::ClientConfig;
use planet::input::StdinSource;
use planet::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout only carries API output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("planet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("planet=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("planet starting with command: {}", cli.command.name());

    let mut ui = TerminalUI::new();

    let config = ClientConfig::default()
        .with_api_key(cli.api_key.clone())
        .with_base_url(cli.base_url.clone());

    let client = match HttpClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            ui.error(&e.to_string());
            return ExitCode::from(1);
        }
    };

    let mut input = StdinSource;
    let mut dispatcher = CommandDispatcher::new(&client, &mut input);

    match dispatcher.dispatch(&cli.command, &mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
