//! Terminal prompter backed by dialoguer.
//!
//! Maps each question kind onto a terminal control: selects for choices and
//! scales, multi-selects for multiple answers, free input for text and
//! numbers. Skip and back are offered inline where the button state allows.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use serde_json::{json, Value};

use crate::config::StepDefinition;
use crate::error::{NocturneError, Result};
use crate::flow::{ButtonLabel, ButtonState};
use crate::questions::{BinaryVariant, QuestionKind, QuestionSpec};
use crate::runner::prompter::{PromptResponse, QuestionPrompter, StepAck};
use crate::ui::NocturneTheme;

/// Anchors for Likert statement scales, stored as 1-based values.
const STATEMENT_ANCHORS: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

/// Anchors for the standardized frequency scale.
const FREQUENCY_ANCHORS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Very often"];

/// Token typed into free-text inputs to navigate backwards.
const BACK_TOKEN: &str = ":back";

/// Interactive prompter for a real terminal session.
pub struct TerminalPrompter {
    theme: NocturneTheme,
    dialog_theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    /// Create a prompter with the default theme.
    pub fn new() -> Self {
        Self {
            theme: NocturneTheme::new(),
            dialog_theme: ColorfulTheme::default(),
        }
    }

    /// Create a prompter without colors.
    pub fn plain() -> Self {
        Self {
            theme: NocturneTheme::plain(),
            dialog_theme: ColorfulTheme::default(),
        }
    }

    fn select(
        &self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize> {
        Select::with_theme(&self.dialog_theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn input_text(&self, prompt: &str, placeholder: Option<&str>) -> Result<String> {
        let full_prompt = match placeholder {
            Some(hint) => format!("{} ({})", prompt, hint),
            None => prompt.to_string(),
        };
        Input::<String>::with_theme(&self.dialog_theme)
            .with_prompt(full_prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    /// Run a select over the question's options plus the navigation extras
    /// the current button state allows.
    fn choose_one(
        &self,
        question: &QuestionSpec,
        options: &[String],
        existing: Option<&Value>,
        button: &ButtonState,
        can_go_back: bool,
    ) -> Result<PromptResponse> {
        let mut items: Vec<String> = options.to_vec();
        let base_len = items.len();

        let other_index = if question.config.allow_other {
            items.push("Other…".to_string());
            Some(items.len() - 1)
        } else {
            None
        };
        let skip_index = if button.label == ButtonLabel::Skip && !button.disabled {
            items.push("Skip this question".to_string());
            Some(items.len() - 1)
        } else {
            None
        };
        let back_index = if can_go_back {
            items.push("Go back".to_string());
            Some(items.len() - 1)
        } else {
            None
        };

        let default = existing
            .and_then(Value::as_str)
            .and_then(|answer| options.iter().position(|o| o == answer))
            .unwrap_or(0);

        let choice = self.select(&question.text, &items, default)?;

        if choice < base_len {
            return Ok(PromptResponse::Answer(json!(items[choice])));
        }
        if Some(choice) == other_index {
            let custom = self.input_text("Your answer", None)?;
            if custom.trim().is_empty() {
                return Ok(PromptResponse::Skip);
            }
            return Ok(PromptResponse::Answer(json!(custom.trim())));
        }
        if Some(choice) == skip_index {
            return Ok(PromptResponse::Skip);
        }
        if Some(choice) == back_index {
            return Ok(PromptResponse::Back);
        }

        Ok(PromptResponse::Skip)
    }

    fn choose_many(&self, question: &QuestionSpec, options: &[String]) -> Result<PromptResponse> {
        let selected = MultiSelect::with_theme(&self.dialog_theme)
            .with_prompt(question.text.clone())
            .items(options)
            .interact()
            .map_err(prompt_error)?;

        if selected.is_empty() {
            return Ok(PromptResponse::Skip);
        }

        let values: Vec<Value> = selected.iter().map(|&i| json!(options[i])).collect();
        Ok(PromptResponse::Answer(Value::Array(values)))
    }

    fn free_text(&self, question: &QuestionSpec) -> Result<PromptResponse> {
        let text = self.input_text(&question.text, question.config.placeholder.as_deref())?;
        let trimmed = text.trim();

        if trimmed == BACK_TOKEN {
            return Ok(PromptResponse::Back);
        }
        if trimmed.is_empty() {
            return Ok(PromptResponse::Skip);
        }
        Ok(PromptResponse::Answer(json!(trimmed)))
    }

    fn numeric(&self, question: &QuestionSpec) -> Result<PromptResponse> {
        loop {
            let text = self.input_text(&question.text, Some("number"))?;
            let trimmed = text.trim();

            if trimmed == BACK_TOKEN {
                return Ok(PromptResponse::Back);
            }
            if trimmed.is_empty() {
                return Ok(PromptResponse::Skip);
            }
            match trimmed.parse::<f64>() {
                Ok(value) => return Ok(PromptResponse::Answer(json!(value))),
                Err(_) => println!("{}", self.theme.format_error("Please enter a number")),
            }
        }
    }

    /// One select per row, building an object of row ratings.
    fn matrix(&self, question: &QuestionSpec) -> Result<PromptResponse> {
        let anchors: Vec<String> = STATEMENT_ANCHORS.iter().map(|s| s.to_string()).collect();
        let mut rows = serde_json::Map::new();

        println!("{}", self.theme.highlight.apply_to(&question.text));
        for row in &question.config.options {
            let choice = self.select(row, &anchors, 2)?;
            rows.insert(row.clone(), json!(choice + 1));
        }

        Ok(PromptResponse::Answer(Value::Object(rows)))
    }

    /// Repeated selects over the remaining options; order is the ranking.
    fn ranking(&self, question: &QuestionSpec) -> Result<PromptResponse> {
        let mut remaining: Vec<String> = question.config.options.clone();
        let mut ranked: Vec<Value> = Vec::new();

        println!("{}", self.theme.highlight.apply_to(&question.text));
        while !remaining.is_empty() {
            let mut items = remaining.clone();
            if !ranked.is_empty() {
                items.push("Done ranking".to_string());
            }

            let prompt = format!("Pick #{}", ranked.len() + 1);
            let choice = self.select(&prompt, &items, 0)?;
            if choice >= remaining.len() {
                break;
            }
            ranked.push(json!(remaining.remove(choice)));
        }

        if ranked.is_empty() {
            return Ok(PromptResponse::Skip);
        }
        Ok(PromptResponse::Answer(Value::Array(ranked)))
    }
}

fn prompt_error(err: dialoguer::Error) -> NocturneError {
    NocturneError::PromptFailed {
        message: err.to_string(),
    }
}

impl QuestionPrompter for TerminalPrompter {
    fn begin_step(&mut self, step: &StepDefinition, counter: &str) -> Result<()> {
        println!();
        println!("{}", self.theme.format_step(&step.title, counter));
        if let Some(description) = &step.description {
            println!("{}", self.theme.dim.apply_to(description));
        }
        Ok(())
    }

    fn acknowledge(&mut self, _step: &StepDefinition) -> Result<StepAck> {
        let items = vec!["Continue".to_string(), "Go back".to_string()];
        let choice = self.select("Ready?", &items, 0)?;
        Ok(if choice == 0 {
            StepAck::Continue
        } else {
            StepAck::Back
        })
    }

    fn ask(
        &mut self,
        question: &QuestionSpec,
        existing: Option<&Value>,
        button: &ButtonState,
        can_go_back: bool,
    ) -> Result<PromptResponse> {
        if let Some(description) = &question.description {
            println!("{}", self.theme.hint.apply_to(description));
        }

        match question.kind {
            QuestionKind::Binary => {
                let variant = question.config.variant.unwrap_or(BinaryVariant::YesNo);
                let labels: Vec<String> =
                    variant.labels().iter().map(|s| s.to_string()).collect();
                self.choose_one(question, &labels, existing, button, can_go_back)
            }
            QuestionKind::Statement | QuestionKind::Scale | QuestionKind::Vas => {
                let anchors: Vec<String> =
                    STATEMENT_ANCHORS.iter().map(|s| s.to_string()).collect();
                let response =
                    self.choose_one(question, &anchors, existing, button, can_go_back)?;
                // Likert answers are recorded as 1-based values.
                Ok(match response {
                    PromptResponse::Answer(value) => {
                        let rank = value
                            .as_str()
                            .and_then(|s| STATEMENT_ANCHORS.iter().position(|a| *a == s))
                            .map(|i| i + 1);
                        match rank {
                            Some(rank) => PromptResponse::Answer(json!(rank)),
                            None => PromptResponse::Answer(value),
                        }
                    }
                    other => other,
                })
            }
            QuestionKind::Frequency => {
                let anchors: Vec<String> =
                    FREQUENCY_ANCHORS.iter().map(|s| s.to_string()).collect();
                self.choose_one(question, &anchors, existing, button, can_go_back)
            }
            QuestionKind::Choice | QuestionKind::Dropdown | QuestionKind::ImageChoice => {
                let options = question.config.options.clone();
                if question.kind == QuestionKind::ImageChoice && question.config.multi_select {
                    self.choose_many(question, &options)
                } else {
                    self.choose_one(question, &options, existing, button, can_go_back)
                }
            }
            QuestionKind::MultiChoice | QuestionKind::TagPool => {
                let options = question.config.options.clone();
                self.choose_many(question, &options)
            }
            QuestionKind::Text | QuestionKind::ShortText => self.free_text(question),
            QuestionKind::Date => {
                let mut dated = question.clone();
                dated.config.placeholder = Some("YYYY-MM-DD".to_string());
                self.free_text(&dated)
            }
            QuestionKind::Number => self.numeric(question),
            QuestionKind::Matrix => self.matrix(question),
            QuestionKind::Ranking => self.ranking(question),
        }
    }

    fn notify_invalid(&mut self, question: &QuestionSpec) -> Result<()> {
        println!(
            "{}",
            self.theme
                .format_error(&format!("'{}' needs an answer to continue", question.text))
        );
        Ok(())
    }

    fn finish(&mut self, message: &str) -> Result<()> {
        println!();
        println!("{}", self.theme.format_success(message));
        Ok(())
    }
}
