//! create-smithery CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use create_smithery::cli::{Cli, CommandDispatcher};
use create_smithery::shell::{has_tty, install_interrupt_handler, is_ci};
use create_smithery::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("create_smithery=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("create_smithery=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    install_interrupt_handler();

    tracing::debug!("create-smithery starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("An error occurred: cannot read current directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let is_interactive = !cli.non_interactive && !is_ci() && has_tty();
    let mut ui = create_ui(is_interactive, cli.output_mode());

    let dispatcher = CommandDispatcher::new(base_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_status()),
        Err(e) if e.is_cancellation() => {
            ui.warning("Cancelled");
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&format!("An error occurred: {}", e));
            ExitCode::from(1)
        }
    }
}
