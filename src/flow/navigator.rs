//! Positional peek helpers over a step list.
//!
//! Some callers keep their own step state and only need the arithmetic:
//! where a step sits, whether it is first or last, and which steps neighbor
//! it. [`FlowNavigator`] borrows the list and answers those questions
//! without owning any position of its own.

/// Stateless lookup helpers over an ordered step list.
#[derive(Debug, Clone, Copy)]
pub struct FlowNavigator<'a, S> {
    steps: &'a [S],
}

impl<'a, S: PartialEq> FlowNavigator<'a, S> {
    /// Wrap a step list.
    pub fn new(steps: &'a [S]) -> Self {
        Self { steps }
    }

    /// Index of `step`, or `None` when it is not in the list.
    pub fn step_index(&self, step: &S) -> Option<usize> {
        self.steps.iter().position(|s| s == step)
    }

    /// Whether `step` is the first step.
    pub fn is_first(&self, step: &S) -> bool {
        self.step_index(step) == Some(0)
    }

    /// Whether `step` is the last step.
    pub fn is_last(&self, step: &S) -> bool {
        !self.steps.is_empty() && self.step_index(step) == Some(self.steps.len() - 1)
    }

    /// The step after `current`, without navigating. `None` at the end or
    /// when `current` is not in the list.
    pub fn next_step(&self, current: &S) -> Option<&'a S> {
        let index = self.step_index(current)?;
        self.steps.get(index + 1)
    }

    /// The step before `current`, without navigating. `None` at the start
    /// or when `current` is not in the list.
    pub fn previous_step(&self, current: &S) -> Option<&'a S> {
        let index = self.step_index(current)?;
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [&str; 3] = ["start", "details", "confirm"];

    #[test]
    fn step_index_finds_position() {
        let nav = FlowNavigator::new(&STEPS);
        assert_eq!(nav.step_index(&"start"), Some(0));
        assert_eq!(nav.step_index(&"confirm"), Some(2));
        assert_eq!(nav.step_index(&"missing"), None);
    }

    #[test]
    fn first_and_last_detection() {
        let nav = FlowNavigator::new(&STEPS);
        assert!(nav.is_first(&"start"));
        assert!(!nav.is_first(&"details"));
        assert!(nav.is_last(&"confirm"));
        assert!(!nav.is_last(&"start"));
        assert!(!nav.is_last(&"missing"));
    }

    #[test]
    fn next_step_peeks_without_navigating() {
        let nav = FlowNavigator::new(&STEPS);
        assert_eq!(nav.next_step(&"start"), Some(&"details"));
        assert_eq!(nav.next_step(&"confirm"), None);
        assert_eq!(nav.next_step(&"missing"), None);
    }

    #[test]
    fn previous_step_peeks_without_navigating() {
        let nav = FlowNavigator::new(&STEPS);
        assert_eq!(nav.previous_step(&"details"), Some(&"start"));
        assert_eq!(nav.previous_step(&"start"), None);
        assert_eq!(nav.previous_step(&"missing"), None);
    }

    #[test]
    fn empty_list_has_no_positions() {
        let steps: [&str; 0] = [];
        let nav = FlowNavigator::new(&steps);
        assert!(!nav.is_first(&"anything"));
        assert!(!nav.is_last(&"anything"));
    }
}
