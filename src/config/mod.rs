//! Flow definition loading, parsing, and validation.
//!
//! This module handles the declarative side of nocturne:
//! - Schema definitions in [`schema`]
//! - File and built-in loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use nocturne::config::{load_builtin, FlowDefinition};
//!
//! let morning: FlowDefinition = load_builtin("morning").unwrap();
//! assert!(morning.total_steps() > 0);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{builtin_flows, load_builtin, load_file, resolve};
pub use schema::{FlowDefinition, StepDefinition};
