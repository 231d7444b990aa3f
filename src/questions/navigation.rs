//! Linear navigation over a question list.
//!
//! [`QuestionNavigator`] composes the engine pieces for the common case of
//! one question per screen: it owns the answer map and position, derives
//! button state from validity and skip policy, and decides when a single
//! tap may auto-advance. Revisited questions are treated gently: a returning
//! user with an unchanged answer gets a de-emphasised button and never
//! auto-advances out from under their review.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{NocturneError, Result};
use crate::flow::{button_state, can_advance, ButtonEmphasis, ButtonState, FlowDirection, SkipPolicy};
use crate::questions::auto_advance::should_auto_advance;
use crate::questions::model::QuestionSpec;
use crate::questions::validation::has_valid_answer;

/// Completion callback; receives the final answer map.
pub type AnswersFn = Box<dyn FnMut(&HashMap<String, Value>)>;

/// Navigation state over an ordered question list.
pub struct QuestionNavigator {
    questions: Vec<QuestionSpec>,
    initial_answers: HashMap<String, Value>,
    answers: HashMap<String, Value>,
    current_index: usize,
    direction: FlowDirection,
    on_complete: AnswersFn,
}

impl QuestionNavigator {
    /// Create a navigator positioned at the first question.
    ///
    /// `initial_answers` seeds the answer map; questions that already carry
    /// an initial answer are treated as revisits for presentation and
    /// auto-advance purposes.
    pub fn new(
        questions: Vec<QuestionSpec>,
        initial_answers: HashMap<String, Value>,
        on_complete: AnswersFn,
    ) -> Result<Self> {
        if questions.is_empty() {
            return Err(NocturneError::EmptyFlow);
        }

        Ok(Self {
            questions,
            answers: initial_answers.clone(),
            initial_answers,
            current_index: 0,
            direction: FlowDirection::Forward,
            on_complete,
        })
    }

    /// The question at the current position.
    pub fn current_question(&self) -> &QuestionSpec {
        &self.questions[self.current_index]
    }

    /// Current position in the question list.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Direction of the most recent navigation.
    pub fn direction(&self) -> FlowDirection {
        self.direction
    }

    /// The accumulated answer map.
    pub fn answers(&self) -> &HashMap<String, Value> {
        &self.answers
    }

    /// The current question's answer, if any.
    pub fn current_answer(&self) -> Option<&Value> {
        self.answers.get(&self.current_question().id)
    }

    /// Whether the current question is the first one.
    pub fn is_first_question(&self) -> bool {
        self.current_index == 0
    }

    /// Whether the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        self.current_index == self.questions.len() - 1
    }

    /// Whether the current answer is valid for the current question.
    pub fn is_valid(&self) -> bool {
        has_valid_answer(self.current_question(), self.current_answer())
    }

    /// Whether the user is revisiting a question answered before this
    /// session of navigation.
    pub fn is_returning(&self) -> bool {
        self.initial_answers
            .contains_key(&self.current_question().id)
    }

    /// Whether a revisited answer differs from its initial value.
    pub fn is_modified(&self) -> bool {
        self.is_returning()
            && self.current_answer() != self.initial_answers.get(&self.current_question().id)
    }

    /// Whether forward motion is currently permitted.
    pub fn can_go_forward(&self) -> bool {
        can_advance(self.is_valid(), self.skip_policy())
    }

    /// The current question's skip policy.
    pub fn skip_policy(&self) -> SkipPolicy {
        self.current_question().skip
    }

    /// Whether auto-advance applies to the current question right now.
    ///
    /// Never on the last question (completion must be deliberate), never on
    /// a revisit, and only for kinds the static classification allows.
    pub fn auto_advance_enabled(&self) -> bool {
        if self.is_last_question() || self.is_returning() {
            return false;
        }
        let question = self.current_question();
        should_auto_advance(question.kind, &question.config)
    }

    /// The forward button's presentation for the current question.
    ///
    /// A returning user with an unmodified valid answer gets a secondary
    /// button on non-last questions: the primary emphasis is reserved for
    /// motion that records something new.
    pub fn button_state(&self) -> ButtonState {
        let base = button_state(self.is_valid(), self.skip_policy(), self.is_last_question());

        if self.is_valid() && self.is_returning() && !self.is_modified() && !self.is_last_question()
        {
            return ButtonState {
                emphasis: ButtonEmphasis::Secondary,
                ..base
            };
        }

        base
    }

    /// Record an answer for the current question.
    pub fn set_answer(&mut self, value: Value) {
        let id = self.current_question().id.clone();
        self.answers.insert(id, value);
    }

    /// Retreat one question. No-op at the first one.
    pub fn go_back(&mut self) {
        if self.current_index > 0 {
            self.direction = FlowDirection::Back;
            self.current_index -= 1;
        }
    }

    /// Advance one question, or complete from the last one.
    ///
    /// Blocked entirely when the current question is required and invalid.
    pub fn go_forward(&mut self) {
        if !self.can_go_forward() {
            return;
        }
        if self.is_last_question() {
            (self.on_complete)(&self.answers);
        } else {
            self.direction = FlowDirection::Forward;
            self.current_index += 1;
        }
    }
}
