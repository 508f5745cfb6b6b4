use crate::model::response::Answers;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for `POST /api/responses`.
/// `answers` must be a non-empty object keyed by step key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    pub session_id: String,
    #[serde(default)]
    pub tester_email: Option<String>,
    #[serde(default)]
    pub tester_handle: Option<String>,
    pub answers: Answers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponsesQuery {
    #[serde(default)]
    pub include_answers: bool,
    #[serde(default)]
    pub tester_email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FounderSessionsQuery {
    pub founder_email: String,
}

/// Identifies a tester either by stored id or by email.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TesterQuery {
    #[serde(default)]
    pub tester_id: Option<String>,
    #[serde(default)]
    pub tester_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashResponse {
    pub sha256: String,
    pub keccak: String,
}

/// Founder inputs accepted by the file-backed session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFounderInputs {
    pub idea_summary: String,
    pub target_user: String,
    pub problems: Vec<String>,
    #[serde(default)]
    pub value_prop: Option<String>,
    #[serde(default)]
    pub target_action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSessionCreate {
    pub founder_inputs: FileFounderInputs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSessionCreated {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponsePayload {
    pub session_id: String,
    pub respondent_id: String,
    pub answers: Answers,
    #[serde(default)]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponseStored {
    pub ok: bool,
    pub hash: String,
    pub file: String,
}
