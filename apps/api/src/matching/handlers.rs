use std::collections::BTreeSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::keywords::{
    match_resume_to_courses, match_resume_to_job, CourseMatch, KeywordMatch,
};
use crate::matching::prompts::{
    FIT_REASONING_PROMPT_TEMPLATE, FIT_REASONING_SYSTEM, MAX_PROMPT_TERMS,
};
use crate::state::AppState;

const REASONING_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Deserialize)]
pub struct ResumeJobMatchRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub aspiring_job_titles: Vec<String>,
    #[serde(default)]
    pub with_ai_reasoning: bool,
}

#[derive(Debug, Serialize)]
pub struct ResumeJobMatchResponse {
    #[serde(flatten)]
    pub result: KeywordMatch,
    pub ai_reasoning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeCoursesMatchRequest {
    pub resume_text: String,
    pub course_titles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeCoursesMatchResponse {
    pub results: Vec<CourseMatch>,
}

fn prompt_list(terms: &BTreeSet<String>) -> String {
    terms
        .iter()
        .take(MAX_PROMPT_TERMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// POST /api/v1/match/resume-job
pub async fn handle_match_resume_job(
    State(state): State<AppState>,
    Json(req): Json<ResumeJobMatchRequest>,
) -> Result<Json<ResumeJobMatchResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text is required".to_string()));
    }

    let comparison = match_resume_to_job(
        &req.resume_text,
        &req.job_description,
        &req.job_title,
        &req.aspiring_job_titles,
    );
    debug!(
        "Resume/job match: {} matched, {} missing, score {}",
        comparison.result.matched_skills.len(),
        comparison.result.missing_skills.len(),
        comparison.result.score
    );

    let ai_reasoning = if req.with_ai_reasoning {
        let generator = state.require_generator()?;
        let prompt = FIT_REASONING_PROMPT_TEMPLATE
            .replace("{resume_skills}", &prompt_list(&comparison.resume_skills))
            .replace("{job_keywords}", &prompt_list(&comparison.job_keywords));
        Some(
            generator
                .generate(&prompt, FIT_REASONING_SYSTEM, REASONING_MAX_TOKENS)
                .await?
                .trim()
                .to_string(),
        )
    } else {
        None
    };

    Ok(Json(ResumeJobMatchResponse {
        result: comparison.result,
        ai_reasoning,
    }))
}

/// POST /api/v1/match/resume-courses
pub async fn handle_match_resume_courses(
    Json(req): Json<ResumeCoursesMatchRequest>,
) -> Result<Json<ResumeCoursesMatchResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text is required".to_string()));
    }
    if req.course_titles.is_empty() {
        return Err(AppError::Validation(
            "course_titles cannot be empty".to_string(),
        ));
    }

    Ok(Json(ResumeCoursesMatchResponse {
        results: match_resume_to_courses(&req.resume_text, &req.course_titles),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_list_is_capped_and_sorted() {
        let terms: BTreeSet<String> = (0..300).map(|i| format!("t{i:03}")).collect();
        let list = prompt_list(&terms);
        assert_eq!(list.split(", ").count(), MAX_PROMPT_TERMS);
        assert!(list.starts_with("t000, t001"));
    }
}
