//! Prompt templating helpers: the primary call-to-action and price formatting.

/// Action codes a founder can pick in the wizard, with the phrase used in the
/// call-to-action step.
const ACTION_LABELS: &[(&str, &str)] = &[
    ("join_waitlist", "join the waitlist"),
    ("download_app", "download the app"),
    ("share_email", "share your email for updates"),
    ("follow_x", "follow on X"),
];

const OTHER_PREFIX: &str = "other:";

pub const FALLBACK_ACTION: &str = "take the next step";

pub fn known_action_label(code: &str) -> Option<&'static str> {
    ACTION_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Picks the action the questionnaire steers respondents toward.
///
/// Precedence: the first known action code, then the first `other:<label>`
/// entry with a non-blank label, then [`FALLBACK_ACTION`].
pub fn primary_action_label(target_actions: &[String]) -> String {
    if let Some(label) = target_actions
        .iter()
        .find_map(|a| known_action_label(a.trim()))
    {
        return label.to_string();
    }

    target_actions
        .iter()
        .filter_map(|a| a.strip_prefix(OTHER_PREFIX))
        .map(str::trim)
        .find(|label| !label.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_ACTION.to_string())
}

/// `$` followed by the amount with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
