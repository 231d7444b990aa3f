//! Step accounting for progress display.
//!
//! Flows mix single-question and multi-part steps, so a progress bar cannot
//! just count top-level steps. [`StepConfig`] maps each step group to its
//! fixed sub-step count and derives totals and cumulative offsets for any
//! ordering, including partial orders used by variant flows that skip groups.

use std::collections::HashMap;
use std::hash::Hash;

/// Fixed sub-step counts per step group, with a default group ordering.
///
/// Pure derivations over the mapping; no caching, no mutation. Unknown
/// groups contribute zero rather than erroring so callers can pass partial
/// orders for variant flows.
#[derive(Debug, Clone)]
pub struct StepConfig<S> {
    step_counts: HashMap<S, usize>,
    default_order: Vec<S>,
}

impl<S: Eq + Hash + Clone> StepConfig<S> {
    /// Create a step configuration from counts and a default ordering.
    pub fn new(step_counts: HashMap<S, usize>, default_order: Vec<S>) -> Self {
        Self {
            step_counts,
            default_order,
        }
    }

    /// Get the sub-step count for a single group (0 when unknown).
    pub fn step_count(&self, step: &S) -> usize {
        self.step_counts.get(step).copied().unwrap_or(0)
    }

    /// The default group ordering supplied at construction.
    pub fn default_order(&self) -> &[S] {
        &self.default_order
    }

    /// Total sub-steps across `order`.
    pub fn total_steps(&self, order: &[S]) -> usize {
        order.iter().map(|step| self.step_count(step)).sum()
    }

    /// Total sub-steps across the default ordering.
    pub fn total_steps_default(&self) -> usize {
        self.total_steps(&self.default_order)
    }

    /// Cumulative sub-steps strictly before `target`'s first occurrence in
    /// `order`. Returns 0 when `target` is not in `order`.
    pub fn step_offset(&self, target: &S, order: &[S]) -> usize {
        let Some(index) = order.iter().position(|step| step == target) else {
            return 0;
        };

        order[..index]
            .iter()
            .map(|step| self.step_count(step))
            .sum()
    }

    /// Cumulative sub-steps before `target` in the default ordering.
    pub fn step_offset_default(&self, target: &S) -> usize {
        self.step_offset(target, &self.default_order)
    }
}

/// Progress through a step list as a rounded percentage.
///
/// The step after the last one reports 100; a step not in the list reports 0.
pub fn flow_progress_percent<S: PartialEq>(current: &S, steps: &[S]) -> u8 {
    let Some(index) = steps.iter().position(|step| step == current) else {
        return 0;
    };

    (((index + 1) as f64 / steps.len() as f64) * 100.0).round() as u8
}
