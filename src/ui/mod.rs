//! Terminal presentation: theme, progress, and accessibility signals.
//!
//! This module provides:
//! - [`NocturneTheme`] for consistent styling
//! - [`FlowProgress`] and counter/duration formatting
//! - [`SystemMotion`], the live reduced-motion signal
//!
//! The interactive prompting itself lives in [`crate::runner`], behind the
//! `QuestionPrompter` trait, so it can be scripted in tests.

pub mod motion;
pub mod progress;
pub mod theme;

pub use motion::{SystemMotion, REDUCED_MOTION_ENV};
pub use progress::{format_duration, step_counter, FlowProgress};
pub use theme::{should_use_colors, NocturneTheme};
