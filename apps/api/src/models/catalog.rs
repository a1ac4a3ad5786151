use serde::{Deserialize, Serialize};

pub type JobId = u32;

/// Proficiency tier expected for a required skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A job profile the user is working toward. `id` is the selection key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRole {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub name: String,
    pub level: ProficiencyLevel,
    /// Estimated learning hours. Always > 0 once the catalog is validated.
    pub hours: u32,
    pub category: String,
}

/// One ordered stage of a role's learning roadmap. `step` is 1-based and contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub estimated_hours: u32,
    #[serde(default)]
    pub skills_covered: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Display string, e.g. "$70,000 - $90,000".
    pub salary: String,
    #[serde(default)]
    pub domain: Vec<String>,
    pub description: String,
    pub posted: String,
    pub external_link: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// `TargetRole.id` this opening is listed under.
    pub target_job: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_level_serde_lowercase() {
        let level: ProficiencyLevel = serde_json::from_str(r#""intermediate""#).unwrap();
        assert_eq!(level, ProficiencyLevel::Intermediate);
        assert_eq!(
            serde_json::to_string(&ProficiencyLevel::Advanced).unwrap(),
            r#""advanced""#
        );
    }

    #[test]
    fn test_unknown_proficiency_level_rejected() {
        assert!(serde_json::from_str::<ProficiencyLevel>(r#""expert""#).is_err());
    }

    #[test]
    fn test_roadmap_step_uses_camel_case_keys() {
        let json = r#"{
            "step": 2,
            "title": "Version Control with Git",
            "description": "Master Git.",
            "estimatedHours": 30,
            "skillsCovered": []
        }"#;
        let step: RoadmapStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.estimated_hours, 30);
        assert!(step.skills_covered.is_empty());

        let out = serde_json::to_value(&step).unwrap();
        assert!(out.get("estimatedHours").is_some());
        assert!(out.get("skillsCovered").is_some());
    }

    #[test]
    fn test_job_opening_wire_shape() {
        let json = r#"{
            "id": 2,
            "title": "Junior Frontend Developer",
            "company": "WebSolutions Co.",
            "location": "New York, NY",
            "salary": "$70,000 - $90,000",
            "domain": ["React"],
            "description": "UI work.",
            "posted": "2 days ago",
            "externalLink": "https://example.com/jobs/frontend-dev-1",
            "requiredSkills": ["HTML", "CSS"],
            "targetJob": "frontend-developer"
        }"#;
        let job: JobOpening = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 2);
        assert_eq!(job.target_job, "frontend-developer");
        assert_eq!(job.required_skills, vec!["HTML", "CSS"]);
        assert_eq!(job.external_link, "https://example.com/jobs/frontend-dev-1");
    }
}
