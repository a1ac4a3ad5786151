//! Gap & progress calculator.
//!
//! Every function here is pure and total: unknown role ids and empty lists
//! degrade to empty or neutral values instead of erroring, so a view built
//! from them never has to handle a failure.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::catalog::{JobId, JobOpening, RoadmapStep, SkillRequirement};
use crate::models::skills::{SavedJobSet, UserSkillSet};

/// Display banding of a job match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    /// `>= 70` high, `40..=69` medium, below 40 low.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 70 {
            MatchBand::High
        } else if percentage >= 40 {
            MatchBand::Medium
        } else {
            MatchBand::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHours {
    pub category: String,
    pub hours: u32,
    /// Share of the role's total hours, 0–100, rounded half up.
    pub share: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningHours {
    pub total_hours: u32,
    /// Categories in first-seen order.
    pub by_category: Vec<CategoryHours>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStatus {
    #[serde(flatten)]
    pub skill: SkillRequirement,
    pub acquired: bool,
    pub match_percentage: u8,
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
/// Callers guarantee `whole > 0`.
fn percent_half_up(part: usize, whole: usize) -> u8 {
    let pct = (200 * part + whole) / (2 * whole);
    pct.min(100) as u8
}

/// Required skills of `role_id`, or an empty list for an empty or unknown id.
pub fn required_skills<'a>(catalog: &'a Catalog, role_id: &str) -> &'a [SkillRequirement] {
    catalog.skills_for(role_id)
}

pub fn learning_roadmap<'a>(catalog: &'a Catalog, role_id: &str) -> &'a [RoadmapStep] {
    catalog.roadmap_for(role_id)
}

/// Job openings listed under `role_id`, in catalog order.
pub fn matched_job_openings<'a>(catalog: &'a Catalog, role_id: &str) -> Vec<&'a JobOpening> {
    if role_id.is_empty() {
        return Vec::new();
    }
    catalog
        .job_openings()
        .iter()
        .filter(|job| job.target_job == role_id)
        .collect()
}

/// Binary has/has-not signal: 100 when the user has the skill, else 0.
/// It reads like a percentage but never takes any other value.
pub fn skill_match_percentage(skill_name: &str, user_skills: &UserSkillSet) -> u8 {
    if user_skills.contains(skill_name) {
        100
    } else {
        0
    }
}

/// Share of `required` the user already has. An empty list counts as done (100).
pub fn progress_for(required: &[SkillRequirement], user_skills: &UserSkillSet) -> u8 {
    if required.is_empty() {
        return 100;
    }
    let acquired = required
        .iter()
        .filter(|s| user_skills.contains(&s.name))
        .count();
    percent_half_up(acquired, required.len())
}

pub fn overall_progress(catalog: &Catalog, role_id: &str, user_skills: &UserSkillSet) -> u8 {
    progress_for(required_skills(catalog, role_id), user_skills)
}

pub fn skill_statuses(required: &[SkillRequirement], user_skills: &UserSkillSet) -> Vec<SkillStatus> {
    required
        .iter()
        .map(|skill| {
            let match_percentage = skill_match_percentage(&skill.name, user_skills);
            SkillStatus {
                skill: skill.clone(),
                acquired: match_percentage == 100,
                match_percentage,
            }
        })
        .collect()
}

/// Hours still to learn: the sum over skills the user does not have yet.
pub fn missing_hours(required: &[SkillRequirement], user_skills: &UserSkillSet) -> u32 {
    required
        .iter()
        .filter(|s| !user_skills.contains(&s.name))
        .map(|s| s.hours)
        .sum()
}

pub fn learning_hours_by_category(required: &[SkillRequirement]) -> LearningHours {
    let mut by_category: Vec<CategoryHours> = Vec::new();
    let mut total_hours = 0u32;

    for skill in required {
        total_hours += skill.hours;
        match by_category.iter_mut().find(|c| c.category == skill.category) {
            Some(entry) => entry.hours += skill.hours,
            None => by_category.push(CategoryHours {
                category: skill.category.clone(),
                hours: skill.hours,
                share: 0,
            }),
        }
    }

    if total_hours > 0 {
        for entry in &mut by_category {
            entry.share = percent_half_up(entry.hours as usize, total_hours as usize);
        }
    }

    LearningHours {
        total_hours,
        by_category,
    }
}

/// Share of the job's required skills that appear by name in `required`
/// (the selected role's list, not the job's own role).
///
/// A job listing no skills scores 0 rather than dividing by zero.
pub fn job_match_percentage(job: &JobOpening, required: &[SkillRequirement]) -> u8 {
    if job.required_skills.is_empty() {
        return 0;
    }
    let covered = job
        .required_skills
        .iter()
        .filter(|name| required.iter().any(|rs| &rs.name == *name))
        .count();
    percent_half_up(covered, job.required_skills.len())
}

pub fn toggle_saved_job(saved: &SavedJobSet, job_id: JobId) -> SavedJobSet {
    saved.toggled(job_id)
}
