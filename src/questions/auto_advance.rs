//! Auto-advance classification.
//!
//! A static classification of question kinds, not a runtime decision: it
//! looks only at the declared type and configuration, never at the current
//! answer. Kinds that resolve in one tap advance automatically; anything
//! permitting multiple selections, free text, or an "other" escape hatch
//! requires an explicit forward action.

use crate::questions::model::{QuestionKind, QuestionOptions};

/// Whether a single selection on this question should trigger automatic
/// forward motion.
pub fn should_auto_advance(kind: QuestionKind, config: &QuestionOptions) -> bool {
    match kind {
        QuestionKind::Binary
        | QuestionKind::Statement
        | QuestionKind::Frequency
        | QuestionKind::Dropdown => true,
        QuestionKind::Choice => !config.allow_other && !config.allow_multiple,
        QuestionKind::ImageChoice => !config.multi_select,
        QuestionKind::Scale
        | QuestionKind::Vas
        | QuestionKind::MultiChoice
        | QuestionKind::Text
        | QuestionKind::ShortText
        | QuestionKind::Number
        | QuestionKind::Date
        | QuestionKind::Matrix
        | QuestionKind::TagPool
        | QuestionKind::Ranking => false,
    }
}
