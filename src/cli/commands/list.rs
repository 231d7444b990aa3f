//! List command implementation.
//!
//! The `nocturne list` command lists the built-in flows.

use crate::config;
use crate::error::Result;
use crate::ui::NocturneTheme;

/// Execute the list command.
pub fn execute(no_color: bool) -> Result<()> {
    let theme = if no_color {
        NocturneTheme::plain()
    } else {
        NocturneTheme::new()
    };

    let flows = config::builtin_flows()?;

    println!("{}", theme.format_header("Built-in flows"));
    for flow in &flows {
        let questions: usize = flow.steps.iter().map(|s| s.questions.len()).sum();
        println!(
            "  {}  {} {}",
            theme.highlight.apply_to(&flow.name),
            flow.title,
            theme.step_number.apply_to(format!(
                "({} steps, {} questions)",
                flow.total_steps(),
                questions
            ))
        );
    }
    println!();
    println!(
        "{}",
        theme
            .hint
            .apply_to("Run one with: nocturne run <name>, or pass a path to your own YAML file")
    );

    Ok(())
}
