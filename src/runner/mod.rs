//! Flow execution orchestration.
//!
//! [`FlowRunner`] drives one [`FlowDefinition`] through the engine: a
//! [`Flow`] tracks top-level position and accumulates answers, a
//! [`SubStepFlow`] walks the questions inside each step, button state and
//! skip policy gate every forward action, and qualifying single-tap answers
//! pause briefly through the debounced commit scheduler before advancing.
//!
//! All terminal interaction goes through the [`QuestionPrompter`] seam, so
//! the whole runner is drivable from tests with a scripted prompter.

pub mod prompter;
pub mod terminal;

pub use prompter::{PromptResponse, QuestionPrompter, ScriptedPrompter, StepAck};
pub use terminal::TerminalPrompter;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{FlowDefinition, StepDefinition};
use crate::error::{NocturneError, Result};
use crate::flow::{
    button_state, can_advance, CommitScheduler, Flow, FlowConfig, FlowData, MotionSignal,
    SubStepFlow, AUTO_ADVANCE_DELAY,
};
use crate::questions::{has_valid_answer, should_auto_advance};
use crate::ui::{format_duration, step_counter, FlowProgress, SystemMotion};

/// Options for running a flow.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Pause-and-advance after qualifying single-tap answers.
    pub auto_advance: bool,
    /// Delay before an auto-advance commits.
    pub auto_advance_delay: Duration,
    /// Force reduced motion regardless of the environment signal.
    pub reduced_motion: bool,
    /// Render the progress bar.
    pub show_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            auto_advance: true,
            auto_advance_delay: AUTO_ADVANCE_DELAY,
            reduced_motion: false,
            show_progress: true,
        }
    }
}

/// Result of a completed flow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Flow name.
    pub flow: String,
    /// Flow display title.
    pub title: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
    /// Accumulated answers, keyed by question id.
    pub answers: FlowData,
}

/// Motion signal for runs: a forced CLI flag layered over the live
/// environment signal.
struct RunnerMotion {
    forced: bool,
}

impl MotionSignal for RunnerMotion {
    fn reduced_motion(&self) -> bool {
        self.forced || SystemMotion::new().reduced_motion()
    }
}

/// How a step's question loop ended.
enum StepOutcome {
    /// The step's last question was passed; move forward.
    Completed,
    /// The user backed out of the step's first question.
    Backed,
}

/// Drives one flow definition interactively.
pub struct FlowRunner<'a, P> {
    definition: &'a FlowDefinition,
    prompter: P,
    options: RunOptions,
}

impl<'a, P: QuestionPrompter> FlowRunner<'a, P> {
    /// Create a runner with default options.
    pub fn new(definition: &'a FlowDefinition, prompter: P) -> Self {
        Self {
            definition,
            prompter,
            options: RunOptions::default(),
        }
    }

    /// Replace the run options.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// The prompter, for inspection after a run.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Run the flow to completion and return the record.
    pub fn run(&mut self) -> Result<RunRecord> {
        let definition = self.definition;
        definition.validate()?;

        let started_at = Utc::now();
        let step_config = definition.step_config();
        let total = definition.total_steps();
        let progress = if self.options.show_progress {
            FlowProgress::new(total)
        } else {
            FlowProgress::hidden()
        };

        tracing::debug!("Starting flow '{}' ({} sub-steps)", definition.name, total);

        let saved: Rc<Cell<Option<FlowData>>> = Rc::new(Cell::new(None));
        let saved_inner = Rc::clone(&saved);

        let mut flow = Flow::new(FlowConfig {
            steps: definition.step_order(),
            initial_data: FlowData::new(),
            on_complete: Box::new(move |data: &FlowData| {
                saved_inner.set(Some(data.clone()));
                Ok(())
            }),
            on_cancel: None,
        })?;

        loop {
            let step_id = flow.current_step().clone();
            let step =
                definition
                    .step(&step_id)
                    .ok_or_else(|| NocturneError::DefinitionInvalid {
                        message: format!("unknown step id '{}'", step_id),
                    })?;
            let offset = step_config.step_offset_default(&step_id);

            let outcome = if step.questions.is_empty() {
                let counter = if step.step_count() == 0 {
                    String::new()
                } else {
                    step_counter(offset + 1, total)
                };
                self.prompter.begin_step(step, &counter)?;
                progress.set_position((offset + step.step_count()).min(total));
                match self.prompter.acknowledge(step)? {
                    StepAck::Continue => StepOutcome::Completed,
                    StepAck::Back => StepOutcome::Backed,
                }
            } else {
                self.run_questions(step, &mut flow, offset, total, &progress)?
            };

            match outcome {
                StepOutcome::Completed => {
                    if flow.is_last_step() {
                        flow.complete()?;
                        break;
                    }
                    flow.next();
                }
                // At index 0 this is absorbed and the step replays.
                StepOutcome::Backed => flow.back(),
            }
        }

        progress.clear();
        let answers = saved.take().unwrap_or_default();
        let finished_at = Utc::now();

        self.prompter.finish(&format!(
            "{} complete ({})",
            definition.title,
            format_duration(progress.elapsed())
        ))?;

        Ok(RunRecord {
            flow: definition.name.clone(),
            title: definition.title.clone(),
            started_at,
            finished_at,
            answers,
        })
    }

    /// Walk one step's questions through a sub-step flow.
    fn run_questions(
        &mut self,
        step: &StepDefinition,
        flow: &mut Flow<String>,
        offset: usize,
        total: usize,
        progress: &FlowProgress,
    ) -> Result<StepOutcome> {
        let question_ids: Vec<String> = step.questions.iter().map(|q| q.id.clone()).collect();

        let completed = Rc::new(Cell::new(false));
        let backed = Rc::new(Cell::new(false));
        let completed_inner = Rc::clone(&completed);
        let backed_inner = Rc::clone(&backed);

        let mut sub = SubStepFlow::new(
            question_ids,
            flow.direction(),
            Box::new(move || completed_inner.set(true)),
            Box::new(move || backed_inner.set(true)),
        )?;

        self.prompter
            .begin_step(step, &step_counter(offset + 1, total))?;

        loop {
            let question = &step.questions[sub.sub_index()];
            progress.set_position(offset + sub.sub_index());

            let existing = flow.data().get(&question.id).cloned();
            let existing_valid = has_valid_answer(question, existing.as_ref());
            let is_last_overall = flow.is_last_step() && sub.is_last_sub_step();
            let button = button_state(existing_valid, question.skip, is_last_overall);
            let can_go_back = !(flow.step_index() == 0 && sub.sub_index() == 0);

            match self
                .prompter
                .ask(question, existing.as_ref(), &button, can_go_back)?
            {
                PromptResponse::Answer(value) => {
                    let valid_now = has_valid_answer(question, Some(&value));
                    let is_revisit = existing.is_some();

                    let mut updates = FlowData::new();
                    updates.insert(question.id.clone(), value);
                    flow.update_data(updates);

                    if can_advance(valid_now, question.skip) {
                        if valid_now
                            && !is_last_overall
                            && !is_revisit
                            && should_auto_advance(question.kind, &question.config)
                        {
                            self.auto_advance_pause();
                        }
                        sub.go_next();
                    } else {
                        self.prompter.notify_invalid(question)?;
                    }
                }
                PromptResponse::Skip => {
                    if can_advance(existing_valid, question.skip) {
                        sub.go_next();
                    } else {
                        self.prompter.notify_invalid(question)?;
                    }
                }
                PromptResponse::Back => sub.go_back(),
            }

            if completed.get() {
                return Ok(StepOutcome::Completed);
            }
            if backed.get() {
                return Ok(StepOutcome::Backed);
            }
        }
    }

    /// Hold briefly before advancing, through the debounced scheduler, so a
    /// reduced-motion preference or disabled auto-advance skips the pause.
    fn auto_advance_pause(&self) {
        let (tx, rx) = mpsc::channel();
        let motion: Arc<dyn MotionSignal> = Arc::new(RunnerMotion {
            forced: self.options.reduced_motion,
        });

        let mut scheduler = CommitScheduler::new(
            Some(Box::new(move || {
                let _ = tx.send(());
            })),
            self.options.auto_advance_delay,
            !self.options.auto_advance,
            motion,
        );

        scheduler.schedule_commit();
        if scheduler.is_pending() {
            let _ = rx.recv_timeout(self.options.auto_advance_delay + Duration::from_millis(200));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEFINITION: &str = r#"
name: evening
title: Evening check-in
steps:
  - id: welcome
    title: Welcome
  - id: reflect
    title: Reflect
    questions:
      - id: mood
        text: How was your day?
        kind: statement
      - id: highlight
        text: One highlight?
        kind: short_text
        skip: required
  - id: close
    title: Close
    count: 0
"#;

    fn definition() -> FlowDefinition {
        serde_yaml::from_str(DEFINITION).unwrap()
    }

    fn quiet_options() -> RunOptions {
        RunOptions {
            auto_advance: false,
            show_progress: false,
            ..Default::default()
        }
    }

    #[test]
    fn runs_a_flow_front_to_back() {
        let definition = definition();
        let mut prompter = ScriptedPrompter::new();
        prompter.queue_responses([
            PromptResponse::Answer(json!(4)),
            PromptResponse::Answer(json!("shipped the release")),
        ]);

        let mut runner =
            FlowRunner::new(&definition, prompter).with_options(quiet_options());
        let record = runner.run().unwrap();

        assert_eq!(record.flow, "evening");
        assert_eq!(record.answers.get("mood"), Some(&json!(4)));
        assert_eq!(
            record.answers.get("highlight"),
            Some(&json!("shipped the release"))
        );
        assert!(record.finished_at >= record.started_at);

        let prompter = runner.prompter();
        assert_eq!(prompter.steps_seen(), ["welcome", "reflect", "close"]);
        assert_eq!(prompter.asked(), ["mood", "highlight"]);
        assert_eq!(prompter.finish_messages().len(), 1);
    }

    #[test]
    fn optional_question_can_be_skipped() {
        let definition = definition();
        let mut prompter = ScriptedPrompter::new();
        prompter.queue_responses([
            PromptResponse::Skip,
            PromptResponse::Answer(json!("a quiet walk")),
        ]);

        let mut runner =
            FlowRunner::new(&definition, prompter).with_options(quiet_options());
        let record = runner.run().unwrap();

        assert!(record.answers.get("mood").is_none());
        assert_eq!(record.answers.get("highlight"), Some(&json!("a quiet walk")));
    }

    #[test]
    fn required_question_rejects_skip_and_invalid_answers() {
        let definition = definition();
        let mut prompter = ScriptedPrompter::new();
        prompter.queue_responses([
            PromptResponse::Answer(json!(3)),
            // Required question: a skip and a blank answer both bounce.
            PromptResponse::Skip,
            PromptResponse::Answer(json!("")),
            PromptResponse::Answer(json!("made it through")),
        ]);

        let mut runner =
            FlowRunner::new(&definition, prompter).with_options(quiet_options());
        let record = runner.run().unwrap();

        assert_eq!(
            record.answers.get("highlight"),
            Some(&json!("made it through"))
        );
        assert_eq!(runner.prompter().invalid_notices(), ["highlight", "highlight"]);
        assert_eq!(
            runner.prompter().asked(),
            ["mood", "highlight", "highlight", "highlight"]
        );
    }

    #[test]
    fn back_navigation_replays_the_previous_question() {
        let definition = definition();
        let mut prompter = ScriptedPrompter::new();
        prompter.queue_responses([
            PromptResponse::Answer(json!(2)),
            PromptResponse::Back,
            PromptResponse::Answer(json!(5)),
            PromptResponse::Answer(json!("turned it around")),
        ]);

        let mut runner =
            FlowRunner::new(&definition, prompter).with_options(quiet_options());
        let record = runner.run().unwrap();

        assert_eq!(record.answers.get("mood"), Some(&json!(5)));
        assert_eq!(
            runner.prompter().asked(),
            ["mood", "highlight", "mood", "highlight"]
        );
    }

    #[test]
    fn backing_out_of_a_step_returns_to_the_previous_step() {
        let definition = definition();
        let mut prompter = ScriptedPrompter::new();
        // Back out of the first question of 'reflect' into 'welcome'.
        prompter.queue_responses([
            PromptResponse::Back,
            PromptResponse::Answer(json!(4)),
            PromptResponse::Answer(json!("recovered")),
        ]);

        let mut runner =
            FlowRunner::new(&definition, prompter).with_options(quiet_options());
        runner.run().unwrap();

        assert_eq!(
            runner.prompter().steps_seen(),
            ["welcome", "reflect", "welcome", "reflect", "close"]
        );
    }

    #[test]
    fn invalid_definition_is_rejected_before_prompting() {
        let mut definition = definition();
        definition.steps.clear();

        let mut runner = FlowRunner::new(&definition, ScriptedPrompter::new())
            .with_options(quiet_options());
        let err = runner.run().unwrap_err();
        assert!(matches!(err, NocturneError::DefinitionInvalid { .. }));
    }
}
