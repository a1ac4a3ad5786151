//! Keyword overlap between free-text resumes and job or course text.
//!
//! Deterministic and LLM-free. Tokens are lowercase runs of `[a-z0-9+#.-]`,
//! so "c++", "c#" and "node.js" survive as single tokens.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Technical terms always kept, regardless of length or stop-word status.
const SKILL_HINTS: &[&str] = &[
    "python", "java", "javascript", "typescript", "go", "c++", "c#", "rust", "sql",
    "html", "css", "react", "nextjs", "vue", "node", "express", "fastapi", "django", "flask",
    "keras", "pytorch", "tensorflow", "sklearn", "machine", "learning", "ml", "nlp",
    "pandas", "numpy", "matplotlib", "seaborn", "airflow", "dbt", "spark", "hadoop",
    "kafka", "docker", "kubernetes", "linux", "aws", "gcp", "azure", "sagemaker",
    "vertex", "bigquery", "redshift", "snowflake", "postgres", "mysql", "mongo",
    "graphql", "rest", "api", "ci", "cd", "git", "testing", "pytest", "jest", "cicd",
    "microservices", "llm", "rag", "prompt", "engineering", "vector", "embeddings",
    "security", "devops", "mle", "data", "scientist", "engineer", "analysis", "etl",
    "powerbi", "tableau", "superset", "dashboards", "metrics", "backend", "frontend",
    "fullstack", "system", "design", "architecture", "orchestration", "terraform",
    "product", "manager", "pm", "analytics", "timeseries", "oop", "dsa", "leetcode",
];

/// Filler words from job ads and course titles.
const STOP_WORDS: &[&str] = &[
    "and", "or", "for", "the", "a", "an", "to", "in", "of", "on", "with", "by", "at", "from",
    "as", "is", "are", "be", "looking", "experienced", "bonus", "senior", "junior", "mid",
    "years", "experience", "requirements", "responsibilities", "skills", "skill", "role",
    "position", "seeking", "strong", "intro", "introduction", "basics", "fundamentals",
    "beginner", "beginners",
];

const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ':', ';', '(', ')', '[', ']', '{', '}', '"', '\'',
];

fn is_hint(token: &str) -> bool {
    SKILL_HINTS.contains(&token)
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.' | '-')
}

/// Lowercases and collapses all whitespace runs to single spaces.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !is_token_char(c))
        .map(|raw| raw.trim_matches(EDGE_PUNCTUATION))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Skill-like tokens of already-normalized resume text.
pub fn skill_set_from_text(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| is_hint(t) || (!is_stop_word(t) && t.chars().count() > 2))
        .collect()
}

pub fn job_keywords_from_text(text: &str) -> BTreeSet<String> {
    tokenize(&normalize_text(text))
        .into_iter()
        .filter(|t| {
            is_hint(t) || (t.chars().count() > 3 && t.chars().any(|c| c.is_alphabetic()))
        })
        .collect()
}

/// Share of `target` covered by `have`, rounded to three decimals.
/// Zero when either side is empty.
pub fn overlap_score(have: &BTreeSet<String>, target: &BTreeSet<String>) -> f64 {
    if have.is_empty() || target.is_empty() {
        return 0.0;
    }
    let shared = have.intersection(target).count();
    let ratio = shared as f64 / target.len() as f64;
    (ratio * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMatch {
    pub course_title: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub relevance_score: f64,
}

/// The resume's skill tokens plus the job keywords they were compared against.
pub struct JobComparison {
    pub resume_skills: BTreeSet<String>,
    pub job_keywords: BTreeSet<String>,
    pub result: KeywordMatch,
}

pub fn match_resume_to_job(
    resume_text: &str,
    job_description: &str,
    job_title: &str,
    aspiring_titles: &[String],
) -> JobComparison {
    let resume_skills = skill_set_from_text(&normalize_text(resume_text));

    let mut job_keywords = job_keywords_from_text(job_description);
    let title_words = std::iter::once(job_title)
        .chain(aspiring_titles.iter().map(String::as_str))
        .flat_map(|title| {
            normalize_text(title)
                .split(' ')
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        });
    job_keywords.extend(title_words);

    let result = KeywordMatch {
        matched_skills: resume_skills.intersection(&job_keywords).cloned().collect(),
        missing_skills: job_keywords.difference(&resume_skills).cloned().collect(),
        score: overlap_score(&resume_skills, &job_keywords),
    };

    JobComparison {
        resume_skills,
        job_keywords,
        result,
    }
}

pub fn match_resume_to_courses(resume_text: &str, course_titles: &[String]) -> Vec<CourseMatch> {
    let resume_skills = skill_set_from_text(&normalize_text(resume_text));

    course_titles
        .iter()
        .map(|title| {
            let course_keywords: BTreeSet<String> = normalize_text(title)
                .split(' ')
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect();
            CourseMatch {
                course_title: title.clone(),
                matched_skills: course_keywords.intersection(&resume_skills).cloned().collect(),
                missing_skills: course_keywords.difference(&resume_skills).cloned().collect(),
                relevance_score: overlap_score(&resume_skills, &course_keywords),
            }
        })
        .collect()
}
