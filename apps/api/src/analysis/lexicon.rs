//! Lexicon: static reference vocabularies used to pick and classify keywords.
//!
//! Built once at startup and shared read-only through `AppState`.

use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    "and", "the", "for", "with", "you", "that", "are", "this", "from", "will", "have", "your",
    "our", "can", "all", "but", "not", "of", "in", "to", "is", "a", "an", "or", "as", "be", "by",
    "on", "at", "it",
];

/// Some entries (`machine learning`, `ci/cd`, `c++`, `go`) can never come out of the
/// tokenizer whole. They still count when found by substring during matching.
const TECH_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "html",
    "css",
    "typescript",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "jira",
    "agile",
    "scrum",
    "communication",
    "leadership",
    "redux",
    "node",
    "express",
    "mongodb",
    "ci/cd",
    "frontend",
    "backend",
    "fullstack",
    "api",
    "rest",
    "graphql",
    "machine learning",
    "data analysis",
    "go",
    "rust",
    "c++",
    "c#",
    "azure",
    "gcp",
    "terraform",
    "jenkins",
    "linux",
    "bash",
    "design patterns",
];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "agile",
    "scrum",
    "collaboration",
    "problem-solving",
    "adaptability",
    "time management",
    "critical thinking",
    "creativity",
];

/// Stop words, technical skills and soft skills. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stop_words: HashSet<&'static str>,
    pub tech_skills: HashSet<&'static str>,
    pub soft_skills: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            tech_skills: TECH_SKILLS.iter().copied().collect(),
            soft_skills: SOFT_SKILLS.iter().copied().collect(),
        }
    }
}

impl Lexicon {
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_tech_skill(&self, word: &str) -> bool {
        self.tech_skills.contains(word)
    }

    pub fn is_soft_skill(&self, word: &str) -> bool {
        self.soft_skills.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_sizes() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.stop_words.len(), STOP_WORDS.len());
        assert_eq!(lexicon.tech_skills.len(), TECH_SKILLS.len());
        assert_eq!(lexicon.soft_skills.len(), SOFT_SKILLS.len());
    }

    #[test]
    fn test_skill_terms_are_never_stop_words() {
        let lexicon = Lexicon::default();
        for skill in lexicon.tech_skills.iter().chain(lexicon.soft_skills.iter()) {
            assert!(!lexicon.is_stop_word(skill), "{skill} is a stop word");
        }
    }

    #[test]
    fn test_some_skills_are_both_hard_and_soft() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_tech_skill("communication"));
        assert!(lexicon.is_soft_skill("communication"));
        assert!(lexicon.is_tech_skill("python"));
        assert!(!lexicon.is_soft_skill("python"));
    }
}
