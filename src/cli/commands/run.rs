//! Run command implementation.
//!
//! The `nocturne run` command executes a flow interactively and optionally
//! writes the run record to a JSON file.

use std::time::Duration;

use crate::cli::args::RunArgs;
use crate::config;
use crate::error::{NocturneError, Result};
use crate::runner::{FlowRunner, RunOptions, TerminalPrompter};
use crate::ui::NocturneTheme;

/// Execute the run command.
pub fn execute(args: &RunArgs, no_color: bool) -> Result<()> {
    let definition = config::resolve(&args.flow)?;

    if !console::Term::stdout().is_term() {
        return Err(NocturneError::PromptFailed {
            message: "running a flow requires an interactive terminal".to_string(),
        });
    }

    let theme = if no_color {
        NocturneTheme::plain()
    } else {
        NocturneTheme::new()
    };
    let prompter = if no_color {
        TerminalPrompter::plain()
    } else {
        TerminalPrompter::new()
    };

    println!("{}", theme.format_header(&definition.title));
    if let Some(description) = &definition.description {
        println!("{}", theme.dim.apply_to(description));
    }

    let options = RunOptions {
        auto_advance: !args.no_auto_advance,
        auto_advance_delay: Duration::from_millis(args.delay),
        reduced_motion: args.reduced_motion,
        show_progress: true,
    };

    let mut runner = FlowRunner::new(&definition, prompter).with_options(options);
    let record = runner.run()?;

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| NocturneError::Other(e.into()))?;
        std::fs::write(path, json)?;
        println!(
            "{}",
            theme.dim.apply_to(format!("Saved to {}", path.display()))
        );
    }

    Ok(())
}
