//! Show command implementation.
//!
//! The `nocturne show` command prints a flow's steps and questions along
//! with the progress accounting a run of it would report.

use crate::cli::args::ShowArgs;
use crate::config;
use crate::error::Result;
use crate::flow::SkipPolicy;
use crate::questions::should_auto_advance;
use crate::ui::NocturneTheme;

/// Execute the show command.
pub fn execute(args: &ShowArgs, no_color: bool) -> Result<()> {
    let theme = if no_color {
        NocturneTheme::plain()
    } else {
        NocturneTheme::new()
    };

    let definition = config::resolve(&args.flow)?;
    let step_config = definition.step_config();
    let total = definition.total_steps();

    println!("{}", theme.format_header(&definition.title));
    if let Some(description) = &definition.description {
        println!("{}", theme.dim.apply_to(description));
    }
    println!(
        "{}",
        theme
            .step_number
            .apply_to(format!("{} steps across {} screens", total, definition.steps.len()))
    );

    for step in &definition.steps {
        let offset = step_config.step_offset_default(&step.id);
        let count = step.step_count();
        let range = match count {
            0 => "-".to_string(),
            1 => format!("{}", offset + 1),
            _ => format!("{}-{}", offset + 1, offset + count),
        };

        println!();
        println!(
            "{} {}",
            theme.highlight.apply_to(&step.title),
            theme.step_number.apply_to(format!("[{}/{}]", range, total))
        );

        for question in &step.questions {
            let mut markers = Vec::new();
            if question.skip == SkipPolicy::Required {
                markers.push("required");
            }
            if should_auto_advance(question.kind, &question.config) {
                markers.push("auto");
            }
            let suffix = if markers.is_empty() {
                String::new()
            } else {
                format!(" ({})", markers.join(", "))
            };

            println!(
                "    {} {}{}",
                theme.dim.apply_to(format!("{:?}", question.kind)),
                question.text,
                theme.hint.apply_to(suffix)
            );
        }
    }

    Ok(())
}
