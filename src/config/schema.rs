//! Flow definition schema.
//!
//! This module contains the struct definitions that map to the YAML flow
//! definition format, plus the semantic checks a definition must pass
//! before it can be run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{NocturneError, Result};
use crate::flow::StepConfig;
use crate::questions::{QuestionKind, QuestionSpec};

/// Root structure for a flow definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowDefinition {
    /// Machine name; built-in flows are addressed by it.
    pub name: String,

    /// Display title shown in headers.
    pub title: String,

    /// Optional introduction shown before the first step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered top-level steps.
    pub steps: Vec<StepDefinition>,
}

/// One top-level step of a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StepDefinition {
    /// Stable identifier, unique within the flow.
    pub id: String,

    /// Display title shown while the step is active.
    pub title: String,

    /// Optional supporting description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Questions asked inside this step, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<QuestionSpec>,

    /// Progress weight override. Defaults to the question count, minimum 1;
    /// an explicit 0 removes the step from progress accounting (used by
    /// closing screens that show no counter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl StepDefinition {
    /// Sub-step count contributed to progress accounting.
    pub fn step_count(&self) -> usize {
        self.count.unwrap_or_else(|| self.questions.len().max(1))
    }
}

impl FlowDefinition {
    /// The ordered step identifiers.
    pub fn step_order(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.id.clone()).collect()
    }

    /// Step accounting over this definition's steps.
    pub fn step_config(&self) -> StepConfig<String> {
        let counts: HashMap<String, usize> = self
            .steps
            .iter()
            .map(|step| (step.id.clone(), step.step_count()))
            .collect();
        StepConfig::new(counts, self.step_order())
    }

    /// Total sub-steps across the whole flow.
    pub fn total_steps(&self) -> usize {
        self.step_config().total_steps_default()
    }

    /// Look up a step by id.
    pub fn step(&self, id: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Check the definition for semantic problems a parse cannot catch.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NocturneError::DefinitionInvalid {
                message: "flow name must not be empty".to_string(),
            });
        }

        if self.steps.is_empty() {
            return Err(NocturneError::DefinitionInvalid {
                message: format!("flow '{}' has no steps", self.name),
            });
        }

        let mut step_ids = HashSet::new();
        let mut question_ids = HashSet::new();

        for step in &self.steps {
            if !step_ids.insert(step.id.as_str()) {
                return Err(NocturneError::DefinitionInvalid {
                    message: format!("duplicate step id '{}' in flow '{}'", step.id, self.name),
                });
            }

            for question in &step.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(NocturneError::DefinitionInvalid {
                        message: format!(
                            "duplicate question id '{}' in flow '{}'",
                            question.id, self.name
                        ),
                    });
                }

                let needs_options = matches!(
                    question.kind,
                    QuestionKind::Choice
                        | QuestionKind::MultiChoice
                        | QuestionKind::Dropdown
                        | QuestionKind::ImageChoice
                        | QuestionKind::Matrix
                        | QuestionKind::Ranking
                        | QuestionKind::TagPool
                );
                if needs_options && question.config.options.is_empty() {
                    return Err(NocturneError::DefinitionInvalid {
                        message: format!(
                            "question '{}' ({:?}) has no options",
                            question.id, question.kind
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::SkipPolicy;
    use crate::questions::QuestionOptions;

    fn definition(yaml: &str) -> FlowDefinition {
        serde_yaml::from_str(yaml).unwrap()
    }

    const MINIMAL: &str = r#"
name: night
title: Night ritual
steps:
  - id: welcome
    title: Welcome
  - id: day_reflect
    title: Reflect on your day
    questions:
      - id: mood
        text: How was your day?
        kind: statement
      - id: highlight
        text: One highlight?
        kind: short_text
  - id: close
    title: Close
    count: 0
"#;

    #[test]
    fn parses_minimal_definition() {
        let def = definition(MINIMAL);
        assert_eq!(def.name, "night");
        assert_eq!(def.steps.len(), 3);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn step_count_defaults_to_question_count() {
        let def = definition(MINIMAL);
        assert_eq!(def.step("day_reflect").unwrap().step_count(), 2);
    }

    #[test]
    fn step_without_questions_counts_one() {
        let def = definition(MINIMAL);
        assert_eq!(def.step("welcome").unwrap().step_count(), 1);
    }

    #[test]
    fn explicit_count_overrides() {
        let def = definition(MINIMAL);
        assert_eq!(def.step("close").unwrap().step_count(), 0);
    }

    #[test]
    fn accounting_reflects_definition() {
        let def = definition(MINIMAL);
        assert_eq!(def.total_steps(), 3);

        let config = def.step_config();
        assert_eq!(config.step_offset_default(&"day_reflect".to_string()), 1);
        assert_eq!(config.step_offset_default(&"close".to_string()), 3);
    }

    #[test]
    fn validate_rejects_empty_steps() {
        let def = FlowDefinition {
            name: "empty".into(),
            title: "Empty".into(),
            description: None,
            steps: vec![],
        };
        let err = def.validate().unwrap_err();
        assert!(err.to_string().contains("no steps"));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let def = FlowDefinition {
            name: "  ".into(),
            title: "Blank".into(),
            description: None,
            steps: vec![StepDefinition {
                id: "s".into(),
                title: "S".into(),
                description: None,
                questions: vec![],
                count: None,
            }],
        };
        assert!(def.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_step_ids() {
        let mut def = definition(MINIMAL);
        def.steps[1].id = "welcome".into();
        let err = def.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate step id"));
    }

    #[test]
    fn validate_rejects_duplicate_question_ids() {
        let mut def = definition(MINIMAL);
        def.steps[1].questions[1].id = "mood".into();
        let err = def.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate question id"));
    }

    #[test]
    fn validate_rejects_choice_without_options() {
        let mut def = definition(MINIMAL);
        def.steps[0].questions.push(QuestionSpec {
            id: "pick".into(),
            text: "Pick one".into(),
            description: None,
            kind: QuestionKind::Choice,
            skip: SkipPolicy::Optional,
            config: QuestionOptions::default(),
        });
        let err = def.validate().unwrap_err();
        assert!(err.to_string().contains("has no options"));
    }

    #[test]
    fn definition_roundtrips_through_yaml() {
        let def = definition(MINIMAL);
        let yaml = serde_yaml::to_string(&def).unwrap();
        let parsed: FlowDefinition = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, def);
    }
}
