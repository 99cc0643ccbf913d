//! pathdiag CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pathdiag::cli::{Cli, CommandDispatcher};
use pathdiag::ui::{create_ui, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `-v` sets level to DEBUG, `-vv` to TRACE
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so stdout stays usable for `--json`.
fn init_tracing(mode: OutputMode) {
    let filter = match mode.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pathdiag=warn")),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output_mode = OutputMode::from_verbosity(cli.verbosity);
    init_tracing(output_mode);

    tracing::debug!("pathdiag starting with args: {:?}", cli);

    // Resolved once; the UI never checks the terminal again
    let colors = should_use_colors(cli.no_color);
    let mut ui = create_ui(output_mode, colors);

    let dispatcher = CommandDispatcher::new(cli.variable.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
