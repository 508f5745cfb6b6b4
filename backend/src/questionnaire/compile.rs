//! # Questionnaire Compiler
//!
//! Maps a `FounderProductDescription` to the ordered list of steps a tester
//! walks through. The output depends only on the description: no clock, no
//! randomness, no store access, so compiling the same description twice gives
//! identical steps.
//!
//! ## Step order
//!
//! 1.  Onboarding: `intro_a` (account setup), `intro_b`, `intro_c`, `ctx_head`, `context`.
//! 2.  `segment` choice, only when the founder listed target segments.
//! 3.  One `pb_<n>` problem block per problem, in input order.
//! 4.  `use_likelihood` pitch reaction and the generic `willing_to_pay` scale.
//! 5.  One `willing_to_pay_price_<n>` scale per price point, only for paid services.
//! 6.  Closing: `price_fair`, `anything_else`, `cta_choice`, `email`, `closing`.

use super::labels::{format_price, primary_action_label};
use super::normalize::FounderProductDescription;
use common::model::step::{InterviewStep, ProblemLabels};

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;

pub const DEFAULT_DOMAIN: &str = "this topic";
pub const DEFAULT_VALUE_PROPOSITION: &str = "a product that solves this";

pub const CTA_OPTIONS: [&str; 3] = ["Yes", "No", "Maybe later"];

/// Compiles the questionnaire for one founder description.
pub fn compile(description: &FounderProductDescription) -> Vec<InterviewStep> {
    let founder = description.founder_name_or_email.as_str();
    let domain = description
        .problem_domain
        .as_deref()
        .unwrap_or(DEFAULT_DOMAIN);
    let value = description
        .value_proposition
        .as_deref()
        .unwrap_or(DEFAULT_VALUE_PROPOSITION);

    let mut steps = onboarding_steps(founder, domain);

    if !description.target_segments.is_empty() {
        steps.push(InterviewStep::InputChoice {
            key: "segment".to_string(),
            label: "Which of these groups do you feel you most belong to?".to_string(),
            options: description.target_segments.clone(),
        });
    }

    steps.extend(
        description
            .problems
            .iter()
            .enumerate()
            .map(|(idx, problem)| problem_block(idx + 1, problem)),
    );

    steps.push(InterviewStep::ScaleWithPreamble {
        key: "use_likelihood".to_string(),
        preamble: format!(
            "Here's what {} is thinking of spending the next few months building: {}",
            founder, value
        ),
        label: "If delivered, how likely would you be to use it regularly (1–5, not a friend bias)?"
            .to_string(),
        min: SCALE_MIN,
        max: SCALE_MAX,
    });
    steps.push(InterviewStep::InputScale {
        key: "willing_to_pay".to_string(),
        label: "On a scale of 1–5 how willing would you be to pay for it?".to_string(),
        min: SCALE_MIN,
        max: SCALE_MAX,
    });

    if description.is_paid_service {
        steps.extend(
            description
                .price_points
                .iter()
                .enumerate()
                .map(|(idx, price)| price_step(idx + 1, *price)),
        );
    }

    steps.extend(closing_steps(
        founder,
        &primary_action_label(&description.target_actions),
    ));
    steps
}

fn onboarding_steps(founder: &str, domain: &str) -> Vec<InterviewStep> {
    vec![
        InterviewStep::AccountSetup {
            key: "intro_a".to_string(),
            title: format!("Hi! Thank you for taking the time to help {}.", founder),
            copy: "Sign in and connect your wallet for rewards (optional). Skip if you want to stay anonymous."
                .to_string(),
        },
        InterviewStep::Text {
            key: "intro_b".to_string(),
            label: format!(
                "This conversation is just between us — I'll analyse your insights alongside other \
                 responses before I share anonymous headlines with {}.",
                founder
            ),
        },
        InterviewStep::Text {
            key: "intro_c".to_string(),
            label: "This will shape how they spend the next months or even years and they need you \
                    to be completely honest, please.\nReady to go?"
                .to_string(),
        },
        InterviewStep::Text {
            key: "ctx_head".to_string(),
            label: format!(
                "{} is keen to talk to you about {}. Can you tell us a bit about your experience with it?",
                founder, domain
            ),
        },
        InterviewStep::InputText {
            key: "context".to_string(),
            label: "Tell us a bit about your experience.".to_string(),
        },
    ]
}

/// `position` is 1-based.
fn problem_block(position: usize, problem: &str) -> InterviewStep {
    InterviewStep::ProblemBlock {
        key: format!("pb_{}", position),
        problem: problem.to_string(),
        min: SCALE_MIN,
        max: SCALE_MAX,
        labels: ProblemLabels {
            scale: "How strongly do you relate to this? (1=no care, 5=HUGE problem)".to_string(),
            reason: "Can you tell me more about why you gave that score?".to_string(),
            attempts: "Have you ever taken any steps to try to tackle this? How did it go?"
                .to_string(),
        },
    }
}

/// `position` is 1-based.
fn price_step(position: usize, price: f64) -> InterviewStep {
    InterviewStep::InputScale {
        key: format!("willing_to_pay_price_{}", position),
        label: format!(
            "On a scale of 1–5 how willing would you be to pay {}?",
            format_price(price)
        ),
        min: SCALE_MIN,
        max: SCALE_MAX,
    }
}

fn closing_steps(founder: &str, action: &str) -> Vec<InterviewStep> {
    vec![
        InterviewStep::InputText {
            key: "price_fair".to_string(),
            label: "What would feel intuitively fair in terms of price?".to_string(),
        },
        InterviewStep::InputText {
            key: "anything_else".to_string(),
            label: format!(
                "Is there anything else you think {} should know but that you’d prefer they hear from me?",
                founder
            ),
        },
        InterviewStep::InputChoice {
            key: "cta_choice".to_string(),
            label: format!("Would you like to {} now?", action),
            options: CTA_OPTIONS.iter().map(|o| o.to_string()).collect(),
        },
        InterviewStep::InputEmail {
            key: "email".to_string(),
            label: "If you want updates, drop your email (optional)".to_string(),
        },
        InterviewStep::Text {
            key: "closing".to_string(),
            label: "Thank you. We really appreciate your time and honesty. 🙏".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::step::StepKind;
    use serde_json::json;
    use std::collections::HashSet;

    /// Steps present for every description.
    const FIXED_STEPS: usize = 12;

    fn ava() -> FounderProductDescription {
        FounderProductDescription::from_record(&json!({
            "founder_display_name": "Ava",
            "problems": ["too many emails", "lose track of tasks"],
            "is_paid_service": true,
            "price_points": [4.99, 9.99],
            "target_segments": [],
            "target_actions": ["join_waitlist"],
        }))
    }

    fn keys(steps: &[InterviewStep]) -> Vec<&str> {
        steps.iter().map(InterviewStep::key).collect()
    }

    fn find<'a>(steps: &'a [InterviewStep], key: &str) -> Option<&'a InterviewStep> {
        steps.iter().find(|s| s.key() == key)
    }

    #[test]
    fn ava_example_produces_expected_blocks() {
        let steps = compile(&ava());

        let problem_keys: Vec<&str> = steps
            .iter()
            .filter(|s| s.kind() == StepKind::ProblemBlock)
            .map(InterviewStep::key)
            .collect();
        assert_eq!(problem_keys, vec!["pb_1", "pb_2"]);

        match find(&steps, "pb_1") {
            Some(InterviewStep::ProblemBlock { problem, min, max, .. }) => {
                assert_eq!(problem, "too many emails");
                assert_eq!((*min, *max), (1, 5));
            }
            other => panic!("unexpected pb_1: {:?}", other),
        }

        let price_labels: Vec<&str> = steps
            .iter()
            .filter_map(|s| match s {
                InterviewStep::InputScale { key, label, .. }
                    if key.starts_with("willing_to_pay_price_") =>
                {
                    Some(label.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(price_labels.len(), 2);
        assert!(price_labels[0].contains("$4.99"));
        assert!(price_labels[1].contains("$9.99"));
        assert!(find(&steps, "willing_to_pay_price_1").is_some());
        assert!(find(&steps, "willing_to_pay_price_2").is_some());

        assert!(find(&steps, "segment").is_none());

        match find(&steps, "cta_choice") {
            Some(InterviewStep::InputChoice { label, options, .. }) => {
                assert!(label.contains("join the waitlist"));
                assert_eq!(options, &vec!["Yes", "No", "Maybe later"]);
            }
            other => panic!("unexpected cta step: {:?}", other),
        }

        assert_eq!(steps.len(), FIXED_STEPS + 2 + 2);
    }

    #[test]
    fn skeleton_order_is_fixed() {
        let steps = compile(&ava());
        assert_eq!(
            keys(&steps),
            vec![
                "intro_a",
                "intro_b",
                "intro_c",
                "ctx_head",
                "context",
                "pb_1",
                "pb_2",
                "use_likelihood",
                "willing_to_pay",
                "willing_to_pay_price_1",
                "willing_to_pay_price_2",
                "price_fair",
                "anything_else",
                "cta_choice",
                "email",
                "closing",
            ]
        );
        assert_eq!(steps[0].kind(), StepKind::AccountSetup);
        assert_eq!(steps.last().map(InterviewStep::kind), Some(StepKind::Text));
    }

    #[test]
    fn compile_is_deterministic() {
        let d = ava();
        let first = serde_json::to_string(&compile(&d)).unwrap();
        let second = serde_json::to_string(&compile(&d)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn keys_are_unique() {
        let d = FounderProductDescription::from_record(&json!({
            "problems": ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"],
            "is_paid_service": true,
            "price_points": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            "target_segments": ["students", "parents"],
        }));
        let steps = compile(&d);
        let unique: HashSet<&str> = steps.iter().map(InterviewStep::key).collect();
        assert_eq!(unique.len(), steps.len());
        assert_eq!(steps.len(), FIXED_STEPS + 1 + 11 + 11);
    }

    #[test]
    fn problem_order_follows_input() {
        let d = FounderProductDescription::from_record(&json!({
            "problems": ["third", "first", "second"],
        }));
        let problems: Vec<String> = compile(&d)
            .into_iter()
            .filter_map(|s| match s {
                InterviewStep::ProblemBlock { problem, .. } => Some(problem),
                _ => None,
            })
            .collect();
        assert_eq!(problems, vec!["third", "first", "second"]);
    }

    #[test]
    fn segment_step_lists_segments_verbatim() {
        let d = FounderProductDescription::from_record(&json!({
            "target_segments": ["Freelancers", " ", "Agency owners"],
        }));
        let steps = compile(&d);
        assert_eq!(steps[5].key(), "segment");
        match &steps[5] {
            InterviewStep::InputChoice { options, .. } => {
                assert_eq!(options, &vec!["Freelancers", "Agency owners"]);
            }
            other => panic!("unexpected segment step: {:?}", other),
        }
    }

    #[test]
    fn price_steps_require_paid_service() {
        let d = FounderProductDescription::from_record(&json!({
            "is_paid_service": false,
            "price_points": [4.99, 9.99],
        }));
        let steps = compile(&d);
        assert!(steps
            .iter()
            .all(|s| !s.key().starts_with("willing_to_pay_price_")));
        assert_eq!(steps.len(), FIXED_STEPS);
    }

    #[test]
    fn degraded_description_still_compiles() {
        let d = FounderProductDescription::from_record(&json!({
            "problems": [],
            "is_paid_service": true,
            "price_points": ["abc", -5, 0],
            "target_segments": null,
        }));
        let steps = compile(&d);
        assert!(steps.iter().all(|s| s.kind() != StepKind::ProblemBlock));
        assert!(find(&steps, "segment").is_none());
        assert!(find(&steps, "willing_to_pay_price_1").is_none());
        assert_eq!(steps.len(), FIXED_STEPS);
    }

    #[test]
    fn defaults_fill_missing_copy() {
        let steps = compile(&FounderProductDescription::from_record(&json!({})));
        match find(&steps, "ctx_head") {
            Some(InterviewStep::Text { label, .. }) => {
                assert!(label.starts_with("the founder is keen"));
                assert!(label.contains("this topic"));
            }
            other => panic!("unexpected ctx_head: {:?}", other),
        }
        match find(&steps, "use_likelihood") {
            Some(InterviewStep::ScaleWithPreamble { preamble, .. }) => {
                assert!(preamble.ends_with("a product that solves this"));
            }
            other => panic!("unexpected use_likelihood: {:?}", other),
        }
        match find(&steps, "cta_choice") {
            Some(InterviewStep::InputChoice { label, .. }) => {
                assert_eq!(label, "Would you like to take the next step now?");
            }
            other => panic!("unexpected cta step: {:?}", other),
        }
    }

    #[test]
    fn serialized_steps_are_flat_records() {
        let steps = compile(&ava());
        let value = serde_json::to_value(&steps).unwrap();
        assert_eq!(value[0]["type"], "account_setup");
        assert_eq!(value[5]["type"], "problem_block");
        assert_eq!(value[5]["key"], "pb_1");
        assert_eq!(value[5]["labels"]["reason"], "Can you tell me more about why you gave that score?");
        assert_eq!(value[8]["min"], 1);
        assert_eq!(value[8]["max"], 5);

        let back: Vec<InterviewStep> = serde_json::from_value(value).unwrap();
        assert_eq!(back, steps);
    }
}
