use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Answers keyed by step key, in the order the client sent them. Values are
/// whatever the client sent for that step (text, number, chosen option, nested
/// object for composite pages).
pub type Answers = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerHashes {
    pub sha256: String,
    pub keccak: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersResponse {
    pub ok: bool,
    pub hashes: AnswerHashes,
}

/// A stored submission as kept in the `responses` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: String,
    pub session_id: String,
    pub tester_id: Option<String>,
    pub tester_email: Option<String>,
    pub founder_email: String,
    pub answers: Answers,
    pub answer_hash: String,
    pub payment_amount: f64,
    pub paid: bool,
    pub created_at: String,
}

/// One entry of a session's response list as shown to the founder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseListItem {
    pub id: String,
    pub created_at: String,
    pub answer_hash: String,
    pub tester_email: Option<String>,
    pub tester_handle: Option<String>,
    pub preview: String,
    pub answers: Option<Answers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponses {
    pub session_id: String,
    pub responses: Vec<ResponseListItem>,
}

/// A questionnaire as listed on a tester's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesterQuestionnaire {
    pub session_id: String,
    pub company_name: String,
    pub founder_email: String,
    pub problem_domain: String,
    pub value_prop: String,
    pub created_at: String,
    pub is_completed: bool,
    pub completion_percentage: u8,
    pub total_questions: usize,
    pub payment_amount: f64,
    pub paid: bool,
    pub last_response_at: Option<String>,
    pub share_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesterQuestionnaires {
    pub questionnaires: Vec<TesterQuestionnaire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesterResponse {
    pub id: String,
    pub session_id: String,
    pub created_at: String,
    pub answer_hash: String,
    pub answers: Answers,
    pub founder_email: String,
    pub company_name: String,
    pub problem_domain: String,
    pub session_status: String,
    pub payment_amount: f64,
    pub paid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesterResponses {
    pub responses: Vec<TesterResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tester {
    pub id: String,
    pub email: String,
    pub telegram_handle: Option<String>,
}
