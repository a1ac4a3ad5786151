//! LLM-backed coaching: reverse goal mapping, career simulation, portfolio
//! planning, mock interviews and course assessments.
//!
//! Prompt building is pure and lives here; handlers only validate, build and call.

pub mod handlers;
pub mod prompts;

use std::ops::RangeInclusive;

use crate::catalog::Catalog;
use crate::coaching::prompts::{
    ASSESSMENT_PROMPT_TEMPLATE, GOALS_REVERSE_PROMPT_TEMPLATE, INTERVIEW_PROMPT_TEMPLATE,
    PORTFOLIO_PROMPT_TEMPLATE, SIMULATOR_PROMPT_TEMPLATE,
};

pub const GOALS_RESUME_CHARS: usize = 2000;
pub const RESUME_CHARS: usize = 4000;

pub const INTERVIEW_QUESTIONS: RangeInclusive<u32> = 5..=40;
pub const DEFAULT_INTERVIEW_QUESTIONS: u32 = 12;
pub const ASSESSMENT_QUESTIONS: RangeInclusive<u32> = 10..=30;
pub const DEFAULT_ASSESSMENT_QUESTIONS: u32 = 18;

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Missing or zero counts fall back to the default; others are clamped to `range`.
pub fn clamp_count(requested: Option<u32>, default: u32, range: RangeInclusive<u32>) -> u32 {
    match requested {
        Some(0) | None => default,
        Some(n) => n.clamp(*range.start(), *range.end()),
    }
}

/// When the desired title names a catalog role, its required skills anchor the gap analysis.
fn catalog_skills_section(catalog: &Catalog, desired_job_title: &str) -> String {
    let wanted = desired_job_title.trim();
    let Some(role) = catalog
        .roles()
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(wanted) || r.id.eq_ignore_ascii_case(wanted))
    else {
        return String::new();
    };

    let skills: Vec<String> = catalog
        .skills_for(&role.id)
        .iter()
        .map(|s| format!("- {} ({:?}, ~{}h, {})", s.name, s.level, s.hours, s.category))
        .collect();
    if skills.is_empty() {
        return String::new();
    }
    format!("\nReference skill profile for {}:\n{}\n", role.name, skills.join("\n"))
}

pub fn goals_reverse_prompt(catalog: &Catalog, resume_text: &str, desired_job_title: &str) -> String {
    GOALS_REVERSE_PROMPT_TEMPLATE
        .replace("{desired_job_title}", desired_job_title)
        .replace("{resume_text}", truncate_chars(resume_text, GOALS_RESUME_CHARS))
        .replace("{catalog_skills}", &catalog_skills_section(catalog, desired_job_title))
}

pub fn simulator_prompt(resume_text: &str, desired_job_title: &str) -> String {
    SIMULATOR_PROMPT_TEMPLATE
        .replace("{desired_job_title}", desired_job_title)
        .replace("{resume_text}", truncate_chars(resume_text, RESUME_CHARS))
}

pub fn portfolio_prompt(resume_text: &str, desired_job_title: &str) -> String {
    PORTFOLIO_PROMPT_TEMPLATE
        .replace("{desired_job_title}", desired_job_title)
        .replace("{resume_text}", truncate_chars(resume_text, RESUME_CHARS))
}

pub fn interview_prompt(resume_text: &str, job_title: &str, seniority: &str, count: u32) -> String {
    let job_title = if job_title.trim().is_empty() { "N/A" } else { job_title };
    let seniority = if seniority.trim().is_empty() { "mid" } else { seniority };
    INTERVIEW_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{job_title}", job_title)
        .replace("{seniority}", seniority)
        .replace("{resume_text}", truncate_chars(resume_text, RESUME_CHARS))
}

pub fn assessment_prompt(course_title: &str, count: u32) -> String {
    ASSESSMENT_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{course_title}", course_title)
}
