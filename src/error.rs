//! Error types for nocturne operations.
//!
//! This module defines [`NocturneError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NocturneError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `NocturneError::Other`) for unexpected errors
//! - Navigation bounds violations are never errors: out-of-range `next`,
//!   `back`, and `go_to_step` calls are silently absorbed by the engine
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nocturne operations.
#[derive(Debug, Error)]
pub enum NocturneError {
    /// Flow definition file not found at expected location.
    #[error("Flow definition not found: {path}")]
    DefinitionNotFound { path: PathBuf },

    /// Failed to parse a flow definition file.
    #[error("Failed to parse flow definition at {path}: {message}")]
    DefinitionParseError { path: PathBuf, message: String },

    /// Invalid flow definition structure or values.
    #[error("Invalid flow definition: {message}")]
    DefinitionInvalid { message: String },

    /// Referenced built-in flow does not exist.
    #[error("Unknown flow: {name}")]
    UnknownFlow { name: String },

    /// A flow or sub-step sequence was constructed with no steps.
    #[error("A flow requires at least one step")]
    EmptyFlow,

    /// The completion callback supplied by the caller failed.
    #[error("Flow completion failed: {message}")]
    CompletionFailed { message: String },

    /// An interactive prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nocturne operations.
pub type Result<T> = std::result::Result<T, NocturneError>;
