//! Answer validity.
//!
//! Validity feeds the validation-gated button state; it never throws and
//! never blocks by itself. A missing or null answer is always invalid, and
//! selection-style kinds are valid as soon as any answer is present.

use serde_json::Value;

use crate::questions::model::{QuestionKind, QuestionSpec};

/// Whether `answer` counts as a valid response to `spec`.
pub fn has_valid_answer(spec: &QuestionSpec, answer: Option<&Value>) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    if answer.is_null() {
        return false;
    }

    match spec.kind {
        QuestionKind::Text | QuestionKind::ShortText => answer
            .as_str()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false),

        QuestionKind::Number => {
            let Some(value) = answer.as_f64() else {
                return false;
            };
            if spec.config.min.is_some_and(|min| value < min) {
                return false;
            }
            if spec.config.max.is_some_and(|max| value > max) {
                return false;
            }
            true
        }

        QuestionKind::MultiChoice | QuestionKind::Ranking => answer
            .as_array()
            .map(|items| !items.is_empty())
            .unwrap_or(false),

        QuestionKind::TagPool => {
            let Some(items) = answer.as_array() else {
                return false;
            };
            if items.is_empty() {
                return false;
            }
            spec.config
                .min_selections
                .map(|min| items.len() >= min)
                .unwrap_or(true)
        }

        QuestionKind::Matrix => answer
            .as_object()
            .map(|rows| !rows.is_empty())
            .unwrap_or(false),

        // Selection and scale kinds: any non-null answer is an answer.
        QuestionKind::Binary
        | QuestionKind::Statement
        | QuestionKind::Frequency
        | QuestionKind::Scale
        | QuestionKind::Vas
        | QuestionKind::Choice
        | QuestionKind::ImageChoice
        | QuestionKind::Dropdown
        | QuestionKind::Date => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::SkipPolicy;
    use crate::questions::model::QuestionOptions;
    use serde_json::json;

    fn spec(kind: QuestionKind) -> QuestionSpec {
        QuestionSpec {
            id: "q".into(),
            text: "?".into(),
            description: None,
            kind,
            skip: SkipPolicy::Optional,
            config: QuestionOptions::default(),
        }
    }

    #[test]
    fn missing_or_null_answers_are_invalid() {
        for kind in [QuestionKind::Binary, QuestionKind::Text, QuestionKind::Number] {
            assert!(!has_valid_answer(&spec(kind), None));
            assert!(!has_valid_answer(&spec(kind), Some(&Value::Null)));
        }
    }

    #[test]
    fn text_requires_non_blank_content() {
        let q = spec(QuestionKind::Text);
        assert!(has_valid_answer(&q, Some(&json!("a dream about rivers"))));
        assert!(!has_valid_answer(&q, Some(&json!(""))));
        assert!(!has_valid_answer(&q, Some(&json!("   "))));
        assert!(!has_valid_answer(&q, Some(&json!(42))));
    }

    #[test]
    fn number_respects_bounds() {
        let mut q = spec(QuestionKind::Number);
        q.config.min = Some(0.0);
        q.config.max = Some(10.0);

        assert!(has_valid_answer(&q, Some(&json!(5))));
        assert!(has_valid_answer(&q, Some(&json!(0))));
        assert!(has_valid_answer(&q, Some(&json!(10))));
        assert!(!has_valid_answer(&q, Some(&json!(-1))));
        assert!(!has_valid_answer(&q, Some(&json!(11))));
        assert!(!has_valid_answer(&q, Some(&json!("five"))));
    }

    #[test]
    fn number_without_bounds_accepts_any_number() {
        let q = spec(QuestionKind::Number);
        assert!(has_valid_answer(&q, Some(&json!(-273.15))));
    }

    #[test]
    fn multi_choice_requires_non_empty_selection() {
        let q = spec(QuestionKind::MultiChoice);
        assert!(has_valid_answer(&q, Some(&json!(["water"]))));
        assert!(!has_valid_answer(&q, Some(&json!([]))));
        assert!(!has_valid_answer(&q, Some(&json!("water"))));
    }

    #[test]
    fn tag_pool_honors_min_selections() {
        let mut q = spec(QuestionKind::TagPool);
        q.config.min_selections = Some(2);

        assert!(!has_valid_answer(&q, Some(&json!(["flying"]))));
        assert!(has_valid_answer(&q, Some(&json!(["flying", "falling"]))));
        assert!(!has_valid_answer(&q, Some(&json!([]))));
    }

    #[test]
    fn matrix_requires_at_least_one_row() {
        let q = spec(QuestionKind::Matrix);
        assert!(has_valid_answer(&q, Some(&json!({"mornings": 3}))));
        assert!(!has_valid_answer(&q, Some(&json!({}))));
    }

    #[test]
    fn selection_kinds_accept_any_present_answer() {
        for kind in [
            QuestionKind::Binary,
            QuestionKind::Statement,
            QuestionKind::Frequency,
            QuestionKind::Scale,
            QuestionKind::Vas,
            QuestionKind::Choice,
            QuestionKind::ImageChoice,
            QuestionKind::Dropdown,
            QuestionKind::Date,
        ] {
            assert!(has_valid_answer(&spec(kind), Some(&json!("anything"))));
        }
    }
}
