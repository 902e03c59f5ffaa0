//! GNS3 Manager CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gns3_manager::cli::{Cli, CommandDispatcher};
use gns3_manager::shell::install_handler;
use gns3_manager::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with the menu.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gns3_manager=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gns3_manager=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gns3-manager starting with args: {:?}", cli);

    if let Err(e) = install_handler() {
        tracing::warn!("Ctrl-C handling unavailable: {}", e);
    }

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(cli.output_mode());
    let dispatcher = CommandDispatcher::new(cli.settings());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::debug!("Exiting after error: {:?}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
