//! Formatting Auditor: rule checks over raw résumé text, independent of the JD.
//!
//! Always returns six checks in a fixed order. The last two are placeholders that
//! always pass: layout and spelling cannot be judged from extracted plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.-]+@[\w.-]+\.\w{2,4}\b").expect("email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern"));

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(led|managed|developed|created|built|designed|improved|optimized|engineered|architected)\b",
    )
    .expect("action verb pattern")
});

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%|\$\d+").expect("amount pattern"));

static COUNTED_IMPACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+\s+(users|clients|percent|increase|reduction)")
        .expect("counted impact pattern")
});

/// A single pass/fail formatting rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatCheck {
    pub label: &'static str,
    pub pass: bool,
    #[serde(rename = "msgFail")]
    pub msg_fail: &'static str,
}

impl FormatCheck {
    fn new(label: &'static str, pass: bool, msg_fail: &'static str) -> Self {
        Self {
            label,
            pass,
            msg_fail,
        }
    }
}

pub fn audit_format(resume_raw: &str) -> Vec<FormatCheck> {
    vec![
        FormatCheck::new(
            "Contact Email",
            EMAIL_RE.is_match(resume_raw),
            "No email detected",
        ),
        FormatCheck::new(
            "Phone Number",
            PHONE_RE.is_match(resume_raw),
            "No phone number",
        ),
        FormatCheck::new(
            "Action Verbs",
            ACTION_VERB_RE.is_match(resume_raw),
            "Add verbs like 'Managed'",
        ),
        FormatCheck::new(
            "Metrics/Numbers",
            has_metrics(resume_raw),
            "Include measurable achievements (e.g., '20%')",
        ),
        FormatCheck::new("Consistent Formatting", true, "Ensure uniform font and style"),
        FormatCheck::new("No Typos", true, "Proofread for spelling errors"),
    ]
}

/// `20%`, `$5000`, or a number followed by users/clients/percent/increase/reduction.
fn has_metrics(text: &str) -> bool {
    AMOUNT_RE.is_match(text) || COUNTED_IMPACT_RE.is_match(text)
}
