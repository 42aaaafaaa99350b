//! Keyword Selector: derives the target keyword set a résumé should cover from a JD.
//!
//! Algorithm:
//! 1. Every JD token that is a known technical skill becomes a target.
//! 2. If that yields fewer than `MIN_SKILL_TARGETS`, the `FREQUENT_TERM_LIMIT` most
//!    frequent non-stop-word JD tokens are added too (ties keep first-seen order).

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::analysis::lexicon::Lexicon;

pub const MIN_SKILL_TARGETS: usize = 5;
pub const FREQUENT_TERM_LIMIT: usize = 10;

/// Builds the target keyword set from an already-tokenized JD.
pub fn select_target_keywords(jd_tokens: &[String], lexicon: &Lexicon) -> BTreeSet<String> {
    let mut targets: BTreeSet<String> = jd_tokens
        .iter()
        .filter(|token| lexicon.is_tech_skill(token))
        .cloned()
        .collect();

    if targets.len() < MIN_SKILL_TARGETS {
        let frequent = top_frequent_terms(jd_tokens, lexicon, FREQUENT_TERM_LIMIT);
        debug!(
            skill_targets = targets.len(),
            frequent_terms = frequent.len(),
            "Few known skills in JD, adding frequent terms"
        );
        targets.extend(frequent.into_iter().map(|(term, _)| term));
    }

    targets
}

/// Counts non-stop-word tokens and returns up to `limit` of them, most frequent first.
/// Equal counts keep the order in which the tokens first appeared.
pub fn top_frequent_terms(
    tokens: &[String],
    lexicon: &Lexicon,
    limit: usize,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokens.iter().filter(|t| !lexicon.is_stop_word(t)) {
        if let Some(&i) = index.get(token.as_str()) {
            counts[i].1 += 1;
            continue;
        }
        index.insert(token.as_str(), counts.len());
        counts.push((token.clone(), 1));
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
