//! Question catalog and question-level navigation.
//!
//! The flow engine consumes opaque step identifiers; this module supplies
//! the question semantics layered on top of it:
//!
//! - [`QuestionKind`] / [`QuestionSpec`] - The closed question-type catalog
//! - [`should_auto_advance`] - Which kinds advance on a single tap
//! - [`has_valid_answer`] - Per-kind answer validity
//! - [`QuestionNavigator`] - Linear navigation over a question list with
//!   validation-gated buttons and auto-advance gating
//!
//! # Example
//!
//! ```
//! use nocturne::questions::{should_auto_advance, QuestionKind, QuestionOptions};
//!
//! let single_tap = QuestionOptions::default();
//! assert!(should_auto_advance(QuestionKind::Binary, &single_tap));
//! assert!(!should_auto_advance(QuestionKind::Text, &single_tap));
//! ```

pub mod auto_advance;
pub mod model;
pub mod navigation;
pub mod validation;

pub use auto_advance::should_auto_advance;
pub use model::{BinaryVariant, QuestionKind, QuestionOptions, QuestionSpec};
pub use navigation::QuestionNavigator;
pub use validation::has_valid_answer;
