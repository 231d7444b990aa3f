//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// nocturne - Guided flows for journaling rituals and surveys.
#[derive(Debug, Parser)]
#[command(name = "nocturne")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a guided flow interactively
    Run(RunArgs),

    /// List built-in flows
    List,

    /// Show a flow's steps, questions, and progress accounting
    Show(ShowArgs),

    /// Print the JSON Schema for flow definition files
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Built-in flow name or path to a definition file
    pub flow: String,

    /// Write the run record to this JSON file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Auto-advance delay in milliseconds
    #[arg(long, default_value_t = 400)]
    pub delay: u64,

    /// Disable auto-advance entirely
    #[arg(long)]
    pub no_auto_advance: bool,

    /// Skip auto-advance pauses, as if reduced motion were requested
    #[arg(long)]
    pub reduced_motion: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Built-in flow name or path to a definition file
    pub flow: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
