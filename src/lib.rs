//! nocturne - Guided multi-step flows for journaling rituals and surveys.
//!
//! nocturne drives guided terminal interactions - morning and night
//! journaling rituals, census-style questionnaires - from declarative YAML
//! flow definitions, on top of a reusable navigation state machine.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Flow definition loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`flow`] - The generic flow engine: sequencing, sub-steps, accounting,
//!   validation-gated advancement, and debounced auto-advance
//! - [`questions`] - Question catalog, answer validity, and question-level
//!   navigation
//! - [`runner`] - Interactive execution of a flow definition
//! - [`ui`] - Theme, progress display, and accessibility signals
//!
//! # Example
//!
//! ```
//! use nocturne::flow::{button_state, ButtonLabel, SkipPolicy};
//!
//! // An unanswered optional question offers "Skip" instead of blocking.
//! let button = button_state(false, SkipPolicy::Optional, false);
//! assert_eq!(button.label, ButtonLabel::Skip);
//! assert!(!button.disabled);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod questions;
pub mod runner;
pub mod ui;

pub use error::{NocturneError, Result};
