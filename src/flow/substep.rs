//! Nested sub-step composer.
//!
//! One top-level step can contain its own linear sequence of sub-steps with
//! independent position and direction. Advancing past the last sub-step
//! signals completion of the parent step; going back from the first
//! delegates to the parent's back handler. Delegation happens through plain
//! callbacks, so sub-flows nest without shared mutable state.

use crate::error::{NocturneError, Result};
use crate::flow::FlowDirection;

/// Parent-delegation callback.
pub type ParentFn = Box<dyn FnMut()>;

/// A linear sub-step sequence scoped to one parent step.
///
/// The composer holds no data of its own; anything produced inside
/// sub-steps is written into the parent flow's accumulator by the caller.
/// Validation is also the caller's responsibility, invoked before
/// [`SubStepFlow::go_next`].
pub struct SubStepFlow<S> {
    steps: Vec<S>,
    sub_index: usize,
    direction: FlowDirection,
    on_complete: ParentFn,
    on_back: ParentFn,
}

impl<S> SubStepFlow<S> {
    /// Create a sub-step flow seeded with the parent's current direction.
    ///
    /// Returns [`NocturneError::EmptyFlow`] for an empty step list.
    pub fn new(
        steps: Vec<S>,
        parent_direction: FlowDirection,
        on_complete: ParentFn,
        on_back: ParentFn,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(NocturneError::EmptyFlow);
        }

        Ok(Self {
            steps,
            sub_index: 0,
            direction: parent_direction,
            on_complete,
            on_back,
        })
    }

    /// The current sub-step identifier.
    pub fn sub_step(&self) -> &S {
        &self.steps[self.sub_index]
    }

    /// Position within the sub-step list.
    pub fn sub_index(&self) -> usize {
        self.sub_index
    }

    /// Whether the current sub-step is the last one.
    pub fn is_last_sub_step(&self) -> bool {
        self.sub_index == self.steps.len() - 1
    }

    /// Direction of the most recent navigation, seeded from the parent.
    pub fn direction(&self) -> FlowDirection {
        self.direction
    }

    /// Advance one sub-step, or signal parent completion from the last one.
    ///
    /// Completion is a terminal transition out of the composer, not a step
    /// within it: the position does not move past the last index. Driving
    /// the composer after completion has been signalled is a caller
    /// precondition violation; the engine does not assume idempotence.
    pub fn go_next(&mut self) {
        if self.is_last_sub_step() {
            (self.on_complete)();
        } else {
            self.direction = FlowDirection::Forward;
            self.sub_index += 1;
        }
    }

    /// Retreat one sub-step, or delegate to the parent's back handler from
    /// the first one.
    pub fn go_back(&mut self) {
        if self.sub_index == 0 {
            (self.on_back)();
        } else {
            self.direction = FlowDirection::Back;
            self.sub_index -= 1;
        }
    }
}
