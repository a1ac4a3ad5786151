//! The reverse-career-mapping view: one explicit, immutable selection in,
//! every derived collection out.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::mapping::calculator::{
    job_match_percentage, learning_hours_by_category, learning_roadmap, matched_job_openings,
    missing_hours, overall_progress, required_skills, skill_statuses, LearningHours, MatchBand,
    SkillStatus,
};
use crate::models::catalog::{JobOpening, RoadmapStep, TargetRole};
use crate::models::skills::{SavedJobSet, UserSkillSet};

/// The currently selected target role, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    /// Empty or whitespace-only input means "no selection". Anything else is
    /// kept verbatim: role ids match exactly, like every other catalog lookup.
    pub fn from_input(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Selection(None)
        } else {
            Selection(Some(raw.to_string()))
        }
    }

    pub fn role_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    #[serde(flatten)]
    pub job: JobOpening,
    pub match_percentage: u8,
    pub band: MatchBand,
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMap {
    pub role: Option<TargetRole>,
    pub required_skills: Vec<SkillStatus>,
    pub acquired_count: usize,
    pub progress: u8,
    pub learning_hours: LearningHours,
    pub missing_hours: u32,
    pub learning_roadmap: Vec<RoadmapStep>,
    pub matched_job_openings: Vec<JobCard>,
}

impl CareerMap {
    /// Builds the whole view from scratch. Nothing from a previous selection
    /// can leak in: with no selection (or an unknown id) every collection is empty.
    pub fn derive(
        catalog: &Catalog,
        selection: &Selection,
        user_skills: &UserSkillSet,
        saved: &SavedJobSet,
    ) -> Self {
        let role_id = selection.role_id().unwrap_or_default();
        let required = required_skills(catalog, role_id);

        let statuses = skill_statuses(required, user_skills);
        let acquired_count = statuses.iter().filter(|s| s.acquired).count();

        let matched_job_openings = matched_job_openings(catalog, role_id)
            .into_iter()
            .map(|job| {
                let match_percentage = job_match_percentage(job, required);
                JobCard {
                    job: job.clone(),
                    match_percentage,
                    band: MatchBand::from_percentage(match_percentage),
                    saved: saved.contains(job.id),
                }
            })
            .collect();

        CareerMap {
            role: catalog.role(role_id).cloned(),
            required_skills: statuses,
            acquired_count,
            progress: overall_progress(catalog, role_id, user_skills),
            learning_hours: learning_hours_by_category(required),
            missing_hours: missing_hours(required, user_skills),
            learning_roadmap: learning_roadmap(catalog, role_id).to_vec(),
            matched_job_openings,
        }
    }
}
