const LOW_SCORE_THRESHOLD: u32 = 50;
const HIGH_SCORE_THRESHOLD: u32 = 80;
const MAX_NAMED_MISSING: usize = 3;

const ACTION_VERB_TIP: &str = "Ensure you use 'Action Verbs' at the start of every bullet point.";
const QUANTIFY_TIP: &str =
    "Quantify your experience with numbers (e.g., 'Reduced latency by 20%').";

/// Builds 3–4 improvement tips from the match score and the missing keywords.
pub fn generate_tips(score: u32, missing: &[String]) -> Vec<String> {
    let mut tips = Vec::with_capacity(4);

    let headline = if score < LOW_SCORE_THRESHOLD {
        "Your resume needs significant alignment with the job description."
    } else if score < HIGH_SCORE_THRESHOLD {
        "You're close! focus on adding specific technical keywords."
    } else {
        "Great match! Focus on readability and formatting now."
    };
    tips.push(headline.to_string());

    if !missing.is_empty() {
        let top_missing: Vec<&str> = missing
            .iter()
            .take(MAX_NAMED_MISSING)
            .map(String::as_str)
            .collect();
        tips.push(format!(
            "Try to weave in these top missing keywords: {}.",
            top_missing.join(", ")
        ));
    }

    tips.push(ACTION_VERB_TIP.to_string());
    tips.push(QUANTIFY_TIP.to_string());
    tips
}
