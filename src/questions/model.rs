//! Question types and per-question configuration.
//!
//! The catalog is a closed enumeration so policy decisions over it
//! (auto-advance, validity) stay exhaustive at compile time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::SkipPolicy;

/// The semantic type of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Yes/no, agree/disagree, true/false.
    Binary,
    /// Likert-style statement scale.
    Statement,
    /// Standardized frequency scale.
    Frequency,
    /// Numeric scale with anchors.
    Scale,
    /// Visual analog scale.
    Vas,
    /// Single choice from a list.
    Choice,
    /// Multiple choice from a list.
    MultiChoice,
    /// Picture choice.
    ImageChoice,
    /// Searchable dropdown.
    Dropdown,
    /// Long free text.
    Text,
    /// Short free text.
    ShortText,
    /// Numeric input.
    Number,
    /// Date picker.
    Date,
    /// Grid of rows rated against shared columns.
    Matrix,
    /// Tag selection with optional custom entries.
    TagPool,
    /// Drag-to-rank list.
    Ranking,
}

/// Label pairing for binary questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BinaryVariant {
    YesNo,
    AgreeDisagree,
    TrueFalse,
}

impl BinaryVariant {
    /// The affirmative/negative answer pair for this variant.
    pub fn labels(&self) -> [&'static str; 2] {
        match self {
            BinaryVariant::YesNo => ["yes", "no"],
            BinaryVariant::AgreeDisagree => ["agree", "disagree"],
            BinaryVariant::TrueFalse => ["true", "false"],
        }
    }
}

/// Per-question configuration. All fields are optional in definitions;
/// which ones matter depends on the question kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct QuestionOptions {
    /// Choices for choice/multi-choice/dropdown/image-choice kinds.
    pub options: Vec<String>,
    /// Offer a free-text "other" escape hatch on choice questions.
    pub allow_other: bool,
    /// Permit multiple selections on a choice question.
    pub allow_multiple: bool,
    /// Permit multiple selections on an image-choice question.
    pub multi_select: bool,
    /// Lower bound for numeric answers.
    pub min: Option<f64>,
    /// Upper bound for numeric answers.
    pub max: Option<f64>,
    /// Minimum selections for tag-pool answers.
    pub min_selections: Option<usize>,
    /// Maximum selections for tag-pool answers.
    pub max_selections: Option<usize>,
    /// Input placeholder for text kinds.
    pub placeholder: Option<String>,
    /// Label pairing for binary questions.
    pub variant: Option<BinaryVariant>,
}

/// One question inside a flow step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSpec {
    /// Stable identifier; answers are keyed by it in the flow data.
    pub id: String,
    /// The question text shown to the user.
    pub text: String,
    /// Optional supporting description.
    #[serde(default)]
    pub description: Option<String>,
    /// Semantic type.
    pub kind: QuestionKind,
    /// Skip policy; absent means optional.
    #[serde(default)]
    pub skip: SkipPolicy,
    /// Kind-specific configuration.
    #[serde(default)]
    pub config: QuestionOptions,
}
