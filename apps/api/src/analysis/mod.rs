//! Résumé vs job description analysis.
//!
//! Pipeline: tokenize both texts → select JD target keywords → match against the résumé
//! → score → tips. The formatting audit runs on the raw résumé text alongside.
//! Everything here is synchronous and total; input validation happens in `handlers`.

pub mod format_audit;
pub mod handlers;
pub mod keyword_selector;
pub mod lexicon;
pub mod matcher;
pub mod tips;
pub mod tokenizer;

use serde::Serialize;

use crate::analysis::format_audit::{audit_format, FormatCheck};
use crate::analysis::keyword_selector::select_target_keywords;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::matcher::match_keywords;
use crate::analysis::tips::generate_tips;
use crate::analysis::tokenizer::tokenize;

/// Full analysis returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub hard_skills_count: usize,
    pub soft_skills_count: usize,
    pub format_checks: Vec<FormatCheck>,
    pub tips: Vec<String>,
}

pub fn analyze(resume_text: &str, jd_text: &str, lexicon: &Lexicon) -> AnalysisResult {
    let resume_tokens = tokenize(resume_text);
    let jd_tokens = tokenize(jd_text);

    let targets = select_target_keywords(&jd_tokens, lexicon);
    let matched = match_keywords(&resume_tokens, resume_text, &targets);

    let soft_skills_count = matched
        .found
        .iter()
        .filter(|k| lexicon.is_soft_skill(k))
        .count();
    let hard_skills_count = matched.found.len() - soft_skills_count;

    let format_checks = audit_format(resume_text);
    let tips = generate_tips(matched.score, &matched.missing);

    AnalysisResult {
        score: matched.score,
        found_keywords: matched.found,
        missing_keywords: matched.missing,
        hard_skills_count,
        soft_skills_count,
        format_checks,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Frontend Engineer. Required: React, TypeScript, CSS, HTML, Git. \
        Agile team, strong communication and leadership.";

    #[test]
    fn test_strong_resume_scores_high() {
        let resume = "jane@example.com | (555) 123-4567\n\
            Built React and TypeScript frontends with HTML/CSS, versioned in Git. \
            Led agile ceremonies; communication and leadership across 4 teams, 30% faster releases.";
        let result = analyze(resume, JD, &Lexicon::default());

        assert_eq!(result.score, 100);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.soft_skills_count, 3); // agile, communication, leadership
        assert_eq!(result.hard_skills_count, 6);
        assert!(result.format_checks.iter().all(|c| c.pass));
        assert_eq!(result.tips.len(), 3);
        assert!(result.tips[0].contains("Great match"));
    }

    #[test]
    fn test_weak_resume_lists_gaps() {
        let resume = "Retail associate. Handled the register.";
        let result = analyze(resume, JD, &Lexicon::default());

        assert_eq!(result.score, 0);
        assert!(result.found_keywords.is_empty());
        assert_eq!(result.missing_keywords.len(), 9);
        assert_eq!(result.hard_skills_count, 0);
        assert_eq!(result.soft_skills_count, 0);
        assert_eq!(result.tips.len(), 4);
        assert!(result.tips[1].contains("missing keywords"));
        assert!(!result.format_checks[0].pass);
    }

    #[test]
    fn test_python_developer_example() {
        let jd = "We need a Python developer with React experience and strong communication skills, 5+ years.";
        let resume = "Built React apps using Python. Led team communication.";
        let result = analyze(resume, jd, &Lexicon::default());

        for skill in ["python", "react", "communication"] {
            assert!(result.found_keywords.iter().any(|k| k == skill), "{skill} not found");
        }
        assert_eq!(
            result.found_keywords.len() + result.missing_keywords.len(),
            9
        );
        assert_eq!(result.soft_skills_count, 1);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = analyze("resume", "job", &Lexicon::default());
        let json = serde_json::to_value(&result).unwrap();
        for field in [
            "score",
            "found_keywords",
            "missing_keywords",
            "hard_skills_count",
            "soft_skills_count",
            "format_checks",
            "tips",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["format_checks"].as_array().unwrap().len(), 6);
    }
}
