//! CLI command implementations.
//!
//! Each subcommand lives in its own module; [`execute`] routes a parsed
//! [`Cli`] to the right one and returns a process exit code.

pub mod completions;
pub mod list;
pub mod run;
pub mod schema;
pub mod show;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Dispatch a parsed CLI invocation.
pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(args, cli.no_color),
        Commands::List => list::execute(cli.no_color),
        Commands::Show(args) => show::execute(args, cli.no_color),
        Commands::Schema => schema::execute(),
        Commands::Completions(args) => completions::execute(args),
    }
}
