//! Shell completions generation.
//!
//! The `nocturne completions` command generates shell completion scripts.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;

/// Execute the completions command.
pub fn execute(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "nocturne", &mut std::io::stdout());
    Ok(())
}
