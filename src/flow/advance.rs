//! Validation-gated advancement.
//!
//! Maps (current validity, skip policy, last-step flag) to a forward-button
//! presentation. Invalid input never strands the user without a visible
//! forward action: optional steps relabel themselves "Skip" instead of
//! disabling, and only a strictly required step blocks progress.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How skipping is handled for a step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// Blocks advancement until the step has valid input.
    Required,
    /// Always advanceable; relabels the button "Skip" when invalid.
    #[default]
    Optional,
    /// Same treatment as [`SkipPolicy::Optional`].
    Skippable,
}

/// Label shown on the forward button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    /// Advance to the next step.
    Next,
    /// Advance past an unanswered optional step.
    Skip,
    /// Finish the flow.
    Complete,
}

impl std::fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ButtonLabel::Next => "Next",
            ButtonLabel::Skip => "Skip",
            ButtonLabel::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}

/// Visual emphasis of the forward button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEmphasis {
    /// The main call to action.
    Primary,
    /// De-emphasised (skippable or blocked).
    Secondary,
}

/// Presentation of the forward button for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: ButtonLabel,
    pub emphasis: ButtonEmphasis,
    pub disabled: bool,
}

/// Compute the forward-button presentation for a step.
///
/// The last step always offers "Complete"; validity only disables it under a
/// strictly [`SkipPolicy::Required`] policy. Non-last steps relabel to
/// "Skip" rather than disabling, so the user is never stuck without a
/// visible forward action except under required-and-invalid.
pub fn button_state(is_valid: bool, skip: SkipPolicy, is_last: bool) -> ButtonState {
    if is_last {
        return ButtonState {
            label: ButtonLabel::Complete,
            emphasis: ButtonEmphasis::Primary,
            disabled: !is_valid && skip == SkipPolicy::Required,
        };
    }

    if is_valid {
        return ButtonState {
            label: ButtonLabel::Next,
            emphasis: ButtonEmphasis::Primary,
            disabled: false,
        };
    }

    match skip {
        SkipPolicy::Required => ButtonState {
            label: ButtonLabel::Next,
            emphasis: ButtonEmphasis::Secondary,
            disabled: true,
        },
        SkipPolicy::Optional | SkipPolicy::Skippable => ButtonState {
            label: ButtonLabel::Skip,
            emphasis: ButtonEmphasis::Secondary,
            disabled: false,
        },
    }
}

/// Whether forward motion is permitted at all for a step.
///
/// Only a required step with invalid input blocks advancement.
pub fn can_advance(is_valid: bool, skip: SkipPolicy) -> bool {
    skip != SkipPolicy::Required || is_valid
}
