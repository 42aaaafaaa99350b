//! Matcher & Scorer: splits target keywords into found and missing for a résumé.
//!
//! A keyword counts as found when it is one of the résumé's tokens OR appears as a
//! literal substring of the lower-cased résumé text. The substring check is what lets
//! multi-word skills like "machine learning" match.

use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    /// 0 – 100
    pub score: u32,
}

pub fn match_keywords(
    resume_tokens: &[String],
    resume_raw: &str,
    targets: &BTreeSet<String>,
) -> MatchResult {
    let resume_set: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();
    let lower_raw = resume_raw.to_lowercase();

    let (found, missing): (Vec<String>, Vec<String>) = targets
        .iter()
        .cloned()
        .partition(|k| resume_set.contains(k.as_str()) || lower_raw.contains(k.as_str()));

    let score = score_percentage(found.len(), targets.len());

    MatchResult {
        found,
        missing,
        score,
    }
}

/// Percentage of `found` over `total`, truncated. Zero when there is nothing to match.
pub fn score_percentage(found: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (found * 100 / total) as u32
}
