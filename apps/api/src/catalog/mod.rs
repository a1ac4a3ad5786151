//! Catalog: the static tables every career-mapping view is derived from.
//!
//! Loaded once at startup, validated, then shared read-only behind an `Arc`.
//! A catalog that fails validation never reaches the router.

pub mod validation;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

pub use validation::CatalogError;

use crate::models::catalog::{JobId, JobOpening, RoadmapStep, SkillRequirement, TargetRole};
use crate::models::skills::UserSkillSet;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    roles: Vec<TargetRole>,
    #[serde(default)]
    skills: HashMap<String, Vec<SkillRequirement>>,
    #[serde(default)]
    roadmaps: HashMap<String, Vec<RoadmapStep>>,
    #[serde(default)]
    job_openings: Vec<JobOpening>,
    #[serde(default)]
    user_skills: UserSkillSet,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    roles: Vec<TargetRole>,
    skills: HashMap<String, Vec<SkillRequirement>>,
    roadmaps: HashMap<String, Vec<RoadmapStep>>,
    job_openings: Vec<JobOpening>,
    user_skills: UserSkillSet,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_parts(file)
    }

    fn from_parts(file: CatalogFile) -> Result<Self, CatalogError> {
        validation::validate_roles(&file.roles)?;
        let role_ids: HashSet<&str> = file.roles.iter().map(|r| r.id.as_str()).collect();
        validation::validate_skills(&role_ids, &file.skills)?;
        validation::validate_roadmaps(&role_ids, &file.roadmaps)?;
        validation::validate_job_openings(&role_ids, &file.job_openings)?;

        if file.user_skills.is_empty() {
            warn!("Catalog has no user skill snapshot");
        }
        info!(
            roles = file.roles.len(),
            job_openings = file.job_openings.len(),
            user_skills = file.user_skills.len(),
            "Catalog validated"
        );

        Ok(Catalog {
            roles: file.roles,
            skills: file.skills,
            roadmaps: file.roadmaps,
            job_openings: file.job_openings,
            user_skills: file.user_skills,
        })
    }

    pub fn roles(&self) -> &[TargetRole] {
        &self.roles
    }

    pub fn role(&self, id: &str) -> Option<&TargetRole> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Required skills of a role in authoring order; empty for unknown ids.
    pub fn skills_for(&self, role_id: &str) -> &[SkillRequirement] {
        self.skills.get(role_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Roadmap of a role ordered by step; empty for unknown ids.
    pub fn roadmap_for(&self, role_id: &str) -> &[RoadmapStep] {
        self.roadmaps.get(role_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn job_openings(&self) -> &[JobOpening] {
        &self.job_openings
    }

    pub fn job_opening(&self, id: JobId) -> Option<&JobOpening> {
        self.job_openings.iter().find(|j| j.id == id)
    }

    /// The default profile snapshot used when a caller supplies no skills.
    pub fn user_skills(&self) -> &UserSkillSet {
        &self.user_skills
    }
}
