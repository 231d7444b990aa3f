//! nocturne CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use nocturne::cli::{commands, Cli};
use nocturne::ui::NocturneTheme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nocturne=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nocturne=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("nocturne starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    match commands::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let theme = if cli.no_color {
                NocturneTheme::plain()
            } else {
                NocturneTheme::new()
            };
            eprintln!("{}", theme.format_error(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
