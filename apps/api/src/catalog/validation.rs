use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::catalog::{JobId, JobOpening, RoadmapStep, SkillRequirement, TargetRole};

/// Authoring mistakes in a catalog. Any of these aborts startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {message}")]
    Read { path: String, message: String },

    #[error("malformed catalog JSON: {0}")]
    Parse(String),

    #[error("role at position {index} has an empty id")]
    EmptyRoleId { index: usize },

    #[error("duplicate role id '{0}'")]
    DuplicateRole(String),

    #[error("{section} references unknown role '{role_id}'")]
    UnknownRole { section: &'static str, role_id: String },

    #[error("skill '{skill}' of role '{role_id}' must have positive hours")]
    ZeroSkillHours { role_id: String, skill: String },

    #[error("hours of role '{role_id}' overflow when summed")]
    HoursOverflow { role_id: String },

    #[error("roadmap step {step} of role '{role_id}' must have positive estimated hours")]
    ZeroStepHours { role_id: String, step: u32 },

    #[error("roadmap of role '{role_id}' expected step {expected}, found {found}")]
    NonContiguousRoadmap {
        role_id: String,
        expected: u32,
        found: u32,
    },

    #[error("duplicate job opening id {0}")]
    DuplicateJob(JobId),

    #[error("job opening {job_id} targets unknown role '{role_id}'")]
    UnknownJobTarget { job_id: JobId, role_id: String },
}

pub fn validate_roles(roles: &[TargetRole]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, role) in roles.iter().enumerate() {
        if role.id.trim().is_empty() {
            return Err(CatalogError::EmptyRoleId { index });
        }
        if !seen.insert(role.id.as_str()) {
            return Err(CatalogError::DuplicateRole(role.id.clone()));
        }
    }
    Ok(())
}

pub fn validate_skills(
    role_ids: &HashSet<&str>,
    skills: &HashMap<String, Vec<SkillRequirement>>,
) -> Result<(), CatalogError> {
    for (role_id, list) in skills {
        if !role_ids.contains(role_id.as_str()) {
            return Err(CatalogError::UnknownRole {
                section: "skills",
                role_id: role_id.clone(),
            });
        }
        if let Some(skill) = list.iter().find(|s| s.hours == 0) {
            return Err(CatalogError::ZeroSkillHours {
                role_id: role_id.clone(),
                skill: skill.name.clone(),
            });
        }
        // Every per-category and missing-hours sum is bounded by this total.
        list.iter()
            .try_fold(0u32, |total, s| total.checked_add(s.hours))
            .ok_or_else(|| CatalogError::HoursOverflow {
                role_id: role_id.clone(),
            })?;
    }
    Ok(())
}

pub fn validate_roadmaps(
    role_ids: &HashSet<&str>,
    roadmaps: &HashMap<String, Vec<RoadmapStep>>,
) -> Result<(), CatalogError> {
    for (role_id, steps) in roadmaps {
        if !role_ids.contains(role_id.as_str()) {
            return Err(CatalogError::UnknownRole {
                section: "roadmaps",
                role_id: role_id.clone(),
            });
        }
        for (expected, step) in (1u32..).zip(steps) {
            if step.step != expected {
                return Err(CatalogError::NonContiguousRoadmap {
                    role_id: role_id.clone(),
                    expected,
                    found: step.step,
                });
            }
            if step.estimated_hours == 0 {
                return Err(CatalogError::ZeroStepHours {
                    role_id: role_id.clone(),
                    step: step.step,
                });
            }
        }
    }
    Ok(())
}

pub fn validate_job_openings(
    role_ids: &HashSet<&str>,
    jobs: &[JobOpening],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for job in jobs {
        if !seen.insert(job.id) {
            return Err(CatalogError::DuplicateJob(job.id));
        }
        if !role_ids.contains(job.target_job.as_str()) {
            return Err(CatalogError::UnknownJobTarget {
                job_id: job.id,
                role_id: job.target_job.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::ProficiencyLevel;

    fn role(id: &str) -> TargetRole {
        TargetRole {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
        }
    }

    fn step(n: u32, hours: u32) -> RoadmapStep {
        RoadmapStep {
            step: n,
            title: format!("Step {n}"),
            description: String::new(),
            estimated_hours: hours,
            skills_covered: vec![],
        }
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let err = validate_roles(&[role("a"), role("b"), role("a")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateRole("a".to_string()));
    }

    #[test]
    fn test_blank_role_id_rejected() {
        let err = validate_roles(&[role("a"), role("  ")]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyRoleId { index: 1 });
    }

    #[test]
    fn test_zero_hour_skill_rejected() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let skills = HashMap::from([(
            "a".to_string(),
            vec![SkillRequirement {
                name: "SQL".to_string(),
                level: ProficiencyLevel::Beginner,
                hours: 0,
                category: "Databases".to_string(),
            }],
        )]);
        assert!(matches!(
            validate_skills(&ids, &skills),
            Err(CatalogError::ZeroSkillHours { .. })
        ));
    }

    fn skill(name: &str, hours: u32) -> SkillRequirement {
        SkillRequirement {
            name: name.to_string(),
            level: ProficiencyLevel::Advanced,
            hours,
            category: "General".to_string(),
        }
    }

    #[test]
    fn test_role_hours_overflowing_u32_rejected() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let skills = HashMap::from([(
            "a".to_string(),
            vec![skill("Rust", 4_000_000_000), skill("Go", 4_000_000_000)],
        )]);
        assert_eq!(
            validate_skills(&ids, &skills).unwrap_err(),
            CatalogError::HoursOverflow {
                role_id: "a".to_string()
            }
        );
    }

    #[test]
    fn test_role_hours_at_u32_max_accepted() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let skills = HashMap::from([(
            "a".to_string(),
            vec![skill("Rust", u32::MAX - 1), skill("Go", 1)],
        )]);
        assert!(validate_skills(&ids, &skills).is_ok());
    }

    #[test]
    fn test_skills_for_unknown_role_rejected() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let skills = HashMap::from([("ghost".to_string(), vec![])]);
        assert_eq!(
            validate_skills(&ids, &skills).unwrap_err(),
            CatalogError::UnknownRole {
                section: "skills",
                role_id: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_roadmap_gap_rejected() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let roadmaps = HashMap::from([("a".to_string(), vec![step(1, 10), step(3, 10)])]);
        assert_eq!(
            validate_roadmaps(&ids, &roadmaps).unwrap_err(),
            CatalogError::NonContiguousRoadmap {
                role_id: "a".to_string(),
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_roadmap_must_start_at_one() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let roadmaps = HashMap::from([("a".to_string(), vec![step(0, 10)])]);
        assert!(matches!(
            validate_roadmaps(&ids, &roadmaps),
            Err(CatalogError::NonContiguousRoadmap { expected: 1, found: 0, .. })
        ));
    }

    #[test]
    fn test_repeated_step_rejected() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let roadmaps = HashMap::from([("a".to_string(), vec![step(1, 10), step(1, 10)])]);
        assert!(validate_roadmaps(&ids, &roadmaps).is_err());
    }

    #[test]
    fn test_zero_hour_step_rejected() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let roadmaps = HashMap::from([("a".to_string(), vec![step(1, 0)])]);
        assert_eq!(
            validate_roadmaps(&ids, &roadmaps).unwrap_err(),
            CatalogError::ZeroStepHours {
                role_id: "a".to_string(),
                step: 1
            }
        );
    }

    #[test]
    fn test_contiguous_roadmap_accepted() {
        let ids: HashSet<&str> = ["a"].into_iter().collect();
        let roadmaps = HashMap::from([(
            "a".to_string(),
            vec![step(1, 10), step(2, 5), step(3, 1)],
        )]);
        assert!(validate_roadmaps(&ids, &roadmaps).is_ok());
    }
}
