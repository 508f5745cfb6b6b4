//! Derived views over a stored step list and a tester's answers.
//!
//! Both functions take the steps persisted with the session, never a freshly
//! compiled list.

use common::model::response::Answers;
use common::model::step::InterviewStep;
use serde_json::Value;

/// Share of answerable steps with a non-null answer, floored to a whole percent.
/// Returns 0 when the list has no answerable steps.
pub fn completion_percentage(steps: &[InterviewStep], answers: &Answers) -> u8 {
    let answerable: Vec<&InterviewStep> = steps.iter().filter(|s| s.is_answerable()).collect();
    if answerable.is_empty() {
        return 0;
    }
    let answered = answerable
        .iter()
        .filter(|s| matches!(answers.get(s.key()), Some(v) if !v.is_null()))
        .count();
    // answered <= answerable, so the quotient is at most 100
    (answered * 100 / answerable.len()) as u8
}

/// Answer keys that match no step in the list, in the answer map's order.
pub fn unknown_answer_keys(steps: &[InterviewStep], answers: &Answers) -> Vec<String> {
    answers
        .keys()
        .filter(|k| !steps.iter().any(|s| s.key() == k.as_str()))
        .cloned()
        .collect()
}

/// Short `key=value` rendering of the first few answers for list views, in
/// the order the client sent them.
pub fn answers_preview(answers: &Answers, limit: usize, max_chars: usize) -> String {
    answers
        .iter()
        .take(limit)
        .map(|(k, v)| {
            let rendered = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let mut short: String = rendered.chars().take(max_chars).collect();
            if rendered.chars().count() > max_chars {
                short.push('…');
            }
            format!("{}={}", k, short)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
