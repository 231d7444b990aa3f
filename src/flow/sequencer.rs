//! Top-level flow sequencer.
//!
//! [`Flow`] owns the ordered step list, the accumulated data object,
//! loading/error state around asynchronous completion, and the direction
//! metadata used for transition animation. Step identifiers are opaque to
//! the engine; per-step content and validation live with the caller.

use crate::error::{NocturneError, Result};
use crate::flow::FlowDirection;

/// Accumulated per-flow data, merged shallowly on each update.
pub type FlowData = serde_json::Map<String, serde_json::Value>;

/// Completion callback supplied by the caller. The sequencer surfaces its
/// error as both stored state and a returned error.
pub type CompleteFn = Box<dyn FnMut(&FlowData) -> anyhow::Result<()>>;

/// Cancellation callback supplied by the caller.
pub type CancelFn = Box<dyn FnMut()>;

/// Construction inputs for a [`Flow`].
pub struct FlowConfig<S> {
    /// Ordered step list; identifiers are opaque to the engine.
    pub steps: Vec<S>,
    /// Initial value of the data accumulator.
    pub initial_data: FlowData,
    /// Invoked by [`Flow::complete`] with the accumulated data.
    pub on_complete: CompleteFn,
    /// Invoked by [`Flow::cancel`] when present.
    pub on_cancel: Option<CancelFn>,
}

/// The top-level navigation state machine for one guided interaction.
///
/// All actions are synchronous state updates; only [`Flow::complete`] calls
/// out to the caller. Out-of-range navigation is silently absorbed, so the
/// step index is always valid.
pub struct Flow<S> {
    steps: Vec<S>,
    step_index: usize,
    data: FlowData,
    is_loading: bool,
    error: Option<String>,
    direction: FlowDirection,
    on_complete: CompleteFn,
    on_cancel: Option<CancelFn>,
}

impl<S> Flow<S> {
    /// Create a flow positioned at its first step.
    ///
    /// Returns [`NocturneError::EmptyFlow`] for an empty step list, since the
    /// step-index invariant cannot hold.
    pub fn new(config: FlowConfig<S>) -> Result<Self> {
        if config.steps.is_empty() {
            return Err(NocturneError::EmptyFlow);
        }

        Ok(Self {
            steps: config.steps,
            step_index: 0,
            data: config.initial_data,
            is_loading: false,
            error: None,
            direction: FlowDirection::Forward,
            on_complete: config.on_complete,
            on_cancel: config.on_cancel,
        })
    }

    /// The step identifier at the current index.
    pub fn current_step(&self) -> &S {
        &self.steps[self.step_index]
    }

    /// Current position, always in `[0, total_steps)`.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Number of steps; immutable for the life of the flow.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Whether the current step is the last one.
    pub fn is_last_step(&self) -> bool {
        self.step_index == self.steps.len() - 1
    }

    /// The accumulated data object.
    pub fn data(&self) -> &FlowData {
        &self.data
    }

    /// Whether a completion attempt is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the most recent failed completion attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Direction of the most recent navigation action.
    pub fn direction(&self) -> FlowDirection {
        self.direction
    }

    /// Advance one step. No-op at the last index.
    pub fn next(&mut self) {
        if self.step_index < self.steps.len() - 1 {
            self.direction = FlowDirection::Forward;
            self.step_index += 1;
        }
    }

    /// Retreat one step. No-op at index 0.
    pub fn back(&mut self) {
        if self.step_index > 0 {
            self.direction = FlowDirection::Back;
            self.step_index -= 1;
        }
    }

    /// Skip the current step. Skipping and advancing are the same
    /// transition; the distinction is purely presentational.
    pub fn skip(&mut self) {
        self.next();
    }

    /// Jump to `index`. Out-of-range targets are ignored, not clamped;
    /// direction is derived by comparing the target to the current index.
    pub fn go_to_step(&mut self, index: usize) {
        if index < self.steps.len() {
            self.direction = if index > self.step_index {
                FlowDirection::Forward
            } else {
                FlowDirection::Back
            };
            self.step_index = index;
        }
    }

    /// Shallow-merge `updates` into the data accumulator. Last write wins on
    /// key collision; no validation is performed here.
    pub fn update_data(&mut self, updates: FlowData) {
        for (key, value) in updates {
            self.data.insert(key, value);
        }
    }

    /// Run the caller-supplied completion callback with the accumulated data.
    ///
    /// Clears any previous error before the attempt. On failure the error
    /// message is stored for display, the loading flag is reset, and the
    /// error is returned so the caller can react as well. Accumulated data
    /// is never rolled back; retrying is the caller's decision. Calling this
    /// again after a successful completion is a caller-precondition
    /// violation, not something the engine guards against.
    pub fn complete(&mut self) -> Result<()> {
        self.is_loading = true;
        self.error = None;

        let result = (self.on_complete)(&self.data);
        self.is_loading = false;

        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                let message = err.to_string();
                tracing::warn!("Flow completion failed: {}", message);
                self.error = Some(message.clone());
                Err(NocturneError::CompletionFailed { message })
            }
        }
    }

    /// Invoke the caller-supplied cancellation callback, if any. The
    /// sequencer holds no cancelled state of its own.
    pub fn cancel(&mut self) {
        if let Some(on_cancel) = self.on_cancel.as_mut() {
            on_cancel();
        }
    }
}
