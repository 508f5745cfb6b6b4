use serde::{Deserialize, Serialize};

/// One page of a compiled questionnaire.
///
/// Serialized as a flat record whose `type` field names the variant, e.g.
/// `{"type": "input_scale", "key": "willing_to_pay", "label": "...", "min": 1, "max": 5}`.
/// The respondent client renders steps in list order and stores each answer
/// under the step's `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InterviewStep {
    /// Greeting page; the client offers optional sign-in here.
    AccountSetup {
        key: String,
        title: String,
        copy: String,
    },
    /// Static text, no answer expected.
    Text { key: String, label: String },
    InputText { key: String, label: String },
    InputChoice {
        key: String,
        label: String,
        options: Vec<String>,
    },
    /// A composite page asking about one founder-supplied problem: a
    /// resonance scale plus two open follow-ups.
    ProblemBlock {
        key: String,
        problem: String,
        min: u8,
        max: u8,
        labels: ProblemLabels,
    },
    ScaleWithPreamble {
        key: String,
        preamble: String,
        label: String,
        min: u8,
        max: u8,
    },
    InputScale {
        key: String,
        label: String,
        min: u8,
        max: u8,
    },
    /// Optional email capture.
    InputEmail { key: String, label: String },
}

/// Prompts shown inside a `problem_block` page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemLabels {
    pub scale: String,
    pub reason: String,
    pub attempts: String,
}

/// Discriminant of an `InterviewStep`, matching its serialized `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    AccountSetup,
    Text,
    InputText,
    InputChoice,
    ProblemBlock,
    ScaleWithPreamble,
    InputScale,
    InputEmail,
}

impl InterviewStep {
    pub fn key(&self) -> &str {
        match self {
            InterviewStep::AccountSetup { key, .. }
            | InterviewStep::Text { key, .. }
            | InterviewStep::InputText { key, .. }
            | InterviewStep::InputChoice { key, .. }
            | InterviewStep::ProblemBlock { key, .. }
            | InterviewStep::ScaleWithPreamble { key, .. }
            | InterviewStep::InputScale { key, .. }
            | InterviewStep::InputEmail { key, .. } => key,
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            InterviewStep::AccountSetup { .. } => StepKind::AccountSetup,
            InterviewStep::Text { .. } => StepKind::Text,
            InterviewStep::InputText { .. } => StepKind::InputText,
            InterviewStep::InputChoice { .. } => StepKind::InputChoice,
            InterviewStep::ProblemBlock { .. } => StepKind::ProblemBlock,
            InterviewStep::ScaleWithPreamble { .. } => StepKind::ScaleWithPreamble,
            InterviewStep::InputScale { .. } => StepKind::InputScale,
            InterviewStep::InputEmail { .. } => StepKind::InputEmail,
        }
    }

    /// Whether a respondent must supply a value for this step for it to count
    /// toward completion. Informational pages and the optional email capture
    /// do not.
    pub fn is_answerable(&self) -> bool {
        !matches!(
            self.kind(),
            StepKind::Text | StepKind::AccountSetup | StepKind::InputEmail
        )
    }
}
