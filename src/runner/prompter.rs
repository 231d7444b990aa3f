//! Prompter seam between the runner and the terminal.
//!
//! The runner never talks to dialoguer directly; it goes through
//! [`QuestionPrompter`] so tests can script every interaction. The scripted
//! implementation captures what was shown for later assertion.

use std::collections::VecDeque;

use serde_json::Value;

use crate::config::StepDefinition;
use crate::error::{NocturneError, Result};
use crate::flow::ButtonState;
use crate::questions::QuestionSpec;

/// The user's reaction to one question.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResponse {
    /// An answer value to record.
    Answer(Value),
    /// Move past the question without recording anything.
    Skip,
    /// Go back one question (or out of the step).
    Back,
}

/// The user's reaction to an informational step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAck {
    Continue,
    Back,
}

/// UI seam for driving one flow run.
pub trait QuestionPrompter {
    /// A step became active. `counter` is empty for steps excluded from
    /// progress accounting.
    fn begin_step(&mut self, step: &StepDefinition, counter: &str) -> Result<()>;

    /// Show an informational (question-less) step and wait for direction.
    fn acknowledge(&mut self, step: &StepDefinition) -> Result<StepAck>;

    /// Ask one question. `existing` carries a previously recorded answer;
    /// `button` describes the available forward action; `can_go_back` is
    /// false at the very start of the flow.
    fn ask(
        &mut self,
        question: &QuestionSpec,
        existing: Option<&Value>,
        button: &ButtonState,
        can_go_back: bool,
    ) -> Result<PromptResponse>;

    /// The recorded answer was rejected for a required question.
    fn notify_invalid(&mut self, question: &QuestionSpec) -> Result<()>;

    /// The flow finished successfully.
    fn finish(&mut self, message: &str) -> Result<()>;
}

/// Scripted prompter for tests.
///
/// Responses are consumed in order; interactions are captured for later
/// assertion. Running out of scripted responses is an error so a test that
/// drifts from its script fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: VecDeque<PromptResponse>,
    acks: VecDeque<StepAck>,
    steps_seen: Vec<String>,
    asked: Vec<String>,
    invalid_notices: Vec<String>,
    finish_messages: Vec<String>,
}

impl ScriptedPrompter {
    /// Create an empty scripted prompter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue responses for upcoming `ask` calls.
    pub fn queue_responses(&mut self, responses: impl IntoIterator<Item = PromptResponse>) {
        self.responses.extend(responses);
    }

    /// Queue acknowledgements for upcoming informational steps. When the
    /// queue is empty, [`StepAck::Continue`] is assumed.
    pub fn queue_acks(&mut self, acks: impl IntoIterator<Item = StepAck>) {
        self.acks.extend(acks);
    }

    /// Step ids shown so far, in order (repeats included).
    pub fn steps_seen(&self) -> &[String] {
        &self.steps_seen
    }

    /// Question ids asked so far, in order (repeats included).
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Question ids that were rejected as invalid.
    pub fn invalid_notices(&self) -> &[String] {
        &self.invalid_notices
    }

    /// Finish messages received.
    pub fn finish_messages(&self) -> &[String] {
        &self.finish_messages
    }
}

impl QuestionPrompter for ScriptedPrompter {
    fn begin_step(&mut self, step: &StepDefinition, _counter: &str) -> Result<()> {
        self.steps_seen.push(step.id.clone());
        Ok(())
    }

    fn acknowledge(&mut self, _step: &StepDefinition) -> Result<StepAck> {
        Ok(self.acks.pop_front().unwrap_or(StepAck::Continue))
    }

    fn ask(
        &mut self,
        question: &QuestionSpec,
        _existing: Option<&Value>,
        _button: &ButtonState,
        _can_go_back: bool,
    ) -> Result<PromptResponse> {
        self.asked.push(question.id.clone());
        self.responses
            .pop_front()
            .ok_or_else(|| NocturneError::PromptFailed {
                message: format!("script exhausted at question '{}'", question.id),
            })
    }

    fn notify_invalid(&mut self, question: &QuestionSpec) -> Result<()> {
        self.invalid_notices.push(question.id.clone());
        Ok(())
    }

    fn finish(&mut self, message: &str) -> Result<()> {
        self.finish_messages.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{button_state, SkipPolicy};
    use crate::questions::{QuestionKind, QuestionOptions};
    use serde_json::json;

    fn question(id: &str) -> QuestionSpec {
        QuestionSpec {
            id: id.into(),
            text: "?".into(),
            description: None,
            kind: QuestionKind::ShortText,
            skip: SkipPolicy::Optional,
            config: QuestionOptions::default(),
        }
    }

    #[test]
    fn scripted_responses_are_consumed_in_order() {
        let mut prompter = ScriptedPrompter::new();
        prompter.queue_responses([
            PromptResponse::Answer(json!("first")),
            PromptResponse::Skip,
        ]);

        let button = button_state(false, SkipPolicy::Optional, false);
        let first = prompter
            .ask(&question("a"), None, &button, false)
            .unwrap();
        let second = prompter.ask(&question("b"), None, &button, true).unwrap();

        assert_eq!(first, PromptResponse::Answer(json!("first")));
        assert_eq!(second, PromptResponse::Skip);
        assert_eq!(prompter.asked(), ["a", "b"]);
    }

    #[test]
    fn exhausted_script_errors() {
        let mut prompter = ScriptedPrompter::new();
        let button = button_state(false, SkipPolicy::Optional, false);
        let result = prompter.ask(&question("a"), None, &button, false);
        assert!(matches!(result, Err(NocturneError::PromptFailed { .. })));
    }

    #[test]
    fn acknowledge_defaults_to_continue() {
        let mut prompter = ScriptedPrompter::new();
        let step = StepDefinition {
            id: "welcome".into(),
            title: "Welcome".into(),
            description: None,
            questions: vec![],
            count: None,
        };
        assert_eq!(prompter.acknowledge(&step).unwrap(), StepAck::Continue);

        prompter.queue_acks([StepAck::Back]);
        assert_eq!(prompter.acknowledge(&step).unwrap(), StepAck::Back);
    }
}
