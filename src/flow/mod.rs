//! Generic multi-step flow engine.
//!
//! This module provides the navigation state machine that drives every
//! guided interaction in nocturne:
//!
//! - [`Flow`] - Top-level sequencer over an ordered step list
//! - [`SubStepFlow`] - Nested sub-step composer inside one parent step
//! - [`StepConfig`] - Step accounting for progress display
//! - [`button_state`] - Validation-gated advancement decision
//! - [`CommitScheduler`] - Debounced auto-advance commits
//! - [`FlowNavigator`] - Positional peek helpers over a step list
//!
//! The engine consumes only opaque step identifiers and an accumulated data
//! object; it never inspects step content. Collaborators plug in through
//! plain callbacks (`on_complete`, `on_cancel`, `on_back`), so nested flows
//! compose without a global event bus.
//!
//! # Example
//!
//! ```
//! use nocturne::flow::{Flow, FlowConfig, FlowDirection};
//!
//! let mut flow = Flow::new(FlowConfig {
//!     steps: vec!["start", "details", "confirm"],
//!     initial_data: Default::default(),
//!     on_complete: Box::new(|_data| Ok(())),
//!     on_cancel: None,
//! })
//! .unwrap();
//!
//! flow.next();
//! assert_eq!(*flow.current_step(), "details");
//! assert_eq!(flow.direction(), FlowDirection::Forward);
//! ```

pub mod accounting;
pub mod advance;
pub mod debounce;
pub mod navigator;
pub mod sequencer;
pub mod substep;

pub use accounting::{flow_progress_percent, StepConfig};
pub use advance::{button_state, can_advance, ButtonEmphasis, ButtonLabel, ButtonState, SkipPolicy};
pub use debounce::{CommitFn, CommitScheduler, MotionSignal, StaticMotion, AUTO_ADVANCE_DELAY};
pub use navigator::FlowNavigator;
pub use sequencer::{CancelFn, CompleteFn, Flow, FlowConfig, FlowData};
pub use substep::SubStepFlow;

/// Direction of the most recent navigation action.
///
/// Consumed only for transition animation; carries no correctness weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowDirection {
    /// The last navigation moved forward.
    #[default]
    Forward,
    /// The last navigation moved back.
    Back,
}

impl FlowDirection {
    /// Check if the last navigation moved forward.
    pub fn is_forward(&self) -> bool {
        matches!(self, FlowDirection::Forward)
    }
}

impl std::fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FlowDirection::Forward => "forward",
            FlowDirection::Back => "back",
        };
        write!(f, "{}", s)
    }
}
