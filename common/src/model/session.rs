use crate::model::step::InterviewStep;
use serde::{Deserialize, Serialize};

/// A questionnaire instance shared with testers.
///
/// `questions` is written once when the session is created and never
/// recompiled, so answer keys always resolve against the steps the tester saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub founder_email: String,
    pub founder_inputs_id: String,
    pub questions: Vec<InterviewStep>,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub share_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionQuestions {
    pub session_id: String,
    pub steps: Vec<InterviewStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub responses_count: usize,
    pub first_ts: Option<String>,
    pub last_ts: Option<String>,
}

/// A row of the founder dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderSessionEntry {
    pub id: String,
    pub created_at: String,
    pub status: String,
    pub responses_count: usize,
    pub last_response_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderSessions {
    pub sessions: Vec<FounderSessionEntry>,
}
