use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::coaching::prompts::COACH_SYSTEM;
use crate::coaching::{
    assessment_prompt, clamp_count, goals_reverse_prompt, interview_prompt, portfolio_prompt,
    simulator_prompt, ASSESSMENT_QUESTIONS, DEFAULT_ASSESSMENT_QUESTIONS,
    DEFAULT_INTERVIEW_QUESTIONS, INTERVIEW_QUESTIONS,
};
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_MAX_TOKENS: u32 = 2048;
const ROADMAP_MAX_TOKENS: u32 = 3072;

#[derive(Debug, Deserialize)]
pub struct CareerGoalRequest {
    pub resume_text: String,
    pub desired_job_title: String,
}

impl CareerGoalRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.desired_job_title.trim().is_empty() {
            return Err(AppError::Validation(
                "desired_job_title is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
}

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub simulation: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub portfolio_plan: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub seniority: String,
    pub count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub course_title: String,
    pub count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: String,
}

async fn generate(state: &AppState, prompt: &str, max_tokens: u32) -> Result<String, AppError> {
    let generator = state.require_generator()?;
    let text = generator.generate(prompt, COACH_SYSTEM, max_tokens).await?;
    Ok(text.trim().to_string())
}

/// POST /api/v1/career/goals-reverse
pub async fn handle_goals_reverse(
    State(state): State<AppState>,
    Json(req): Json<CareerGoalRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    req.validate()?;
    let prompt = goals_reverse_prompt(&state.catalog, &req.resume_text, &req.desired_job_title);
    let roadmap = generate(&state, &prompt, ROADMAP_MAX_TOKENS).await?;
    Ok(Json(RoadmapResponse { roadmap }))
}

/// POST /api/v1/career/simulator
pub async fn handle_simulator(
    State(state): State<AppState>,
    Json(req): Json<CareerGoalRequest>,
) -> Result<Json<SimulationResponse>, AppError> {
    req.validate()?;
    let prompt = simulator_prompt(&req.resume_text, &req.desired_job_title);
    let simulation = generate(&state, &prompt, DEFAULT_MAX_TOKENS).await?;
    Ok(Json(SimulationResponse { simulation }))
}

/// POST /api/v1/portfolio/builder
pub async fn handle_portfolio(
    State(state): State<AppState>,
    Json(req): Json<CareerGoalRequest>,
) -> Result<Json<PortfolioResponse>, AppError> {
    req.validate()?;
    let prompt = portfolio_prompt(&req.resume_text, &req.desired_job_title);
    let portfolio_plan = generate(&state, &prompt, DEFAULT_MAX_TOKENS).await?;
    Ok(Json(PortfolioResponse { portfolio_plan }))
}

/// POST /api/v1/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<InterviewRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let count = clamp_count(req.count, DEFAULT_INTERVIEW_QUESTIONS, INTERVIEW_QUESTIONS);
    let prompt = interview_prompt(&req.resume_text, &req.job_title, &req.seniority, count);
    let questions = generate(&state, &prompt, DEFAULT_MAX_TOKENS).await?;
    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/assessment/questions
pub async fn handle_assessment_questions(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    if req.course_title.trim().is_empty() {
        return Err(AppError::Validation("course_title is required".to_string()));
    }
    let count = clamp_count(req.count, DEFAULT_ASSESSMENT_QUESTIONS, ASSESSMENT_QUESTIONS);
    let prompt = assessment_prompt(&req.course_title, count);
    let questions = generate(&state, &prompt, DEFAULT_MAX_TOKENS).await?;
    Ok(Json(QuestionsResponse { questions }))
}
