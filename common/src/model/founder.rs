use serde::{Deserialize, Serialize};

/// Everything a founder submits when creating a questionnaire session.
///
/// The backend upserts this record keyed by the founder's email, reads the
/// stored row back and compiles the questionnaire from it. List fields default
/// to empty so partially filled wizards still produce a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FounderInputs {
    // identity
    pub email: String,
    #[serde(default)]
    pub founder_display_name: Option<String>,

    // core
    #[serde(default)]
    pub problem_domain: Option<String>,
    #[serde(default)]
    pub problems: Vec<String>,
    #[serde(default)]
    pub value_prop: Option<String>,

    // pricing
    #[serde(default)]
    pub is_paid_service: bool,
    #[serde(default)]
    pub pricing_model: Option<String>,
    #[serde(default)]
    pub pricing_model_considered: Vec<String>,
    #[serde(default)]
    pub price_points: Vec<f64>,
    #[serde(default)]
    pub pricing_questions: Vec<String>,

    // audience
    #[serde(default)]
    pub segment_mode: Option<String>,
    #[serde(default)]
    pub target_segments: Vec<String>,

    /// Action codes (`join_waitlist`, ...) or free text prefixed `other:`.
    #[serde(default)]
    pub target_actions: Vec<String>,

    // older wizard fields, stored but not used by the compiler
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub target_action: Option<String>,
    #[serde(default)]
    pub follow_up_action: Option<String>,

    #[serde(default)]
    pub founder_feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderRegister {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Founder {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: String,
}
