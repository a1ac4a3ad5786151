use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::catalog::JobId;

/// Skill names the user already has. Membership is exact and case-sensitive:
/// "ReactJS" does not match "React".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSkillSet(BTreeSet<String>);

impl UserSkillSet {
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for UserSkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Job openings bookmarked during a session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedJobSet(BTreeSet<JobId>);

impl SavedJobSet {
    pub fn contains(&self, id: JobId) -> bool {
        self.0.contains(&id)
    }

    /// Returns a new set with `id` removed if present, added otherwise.
    pub fn toggled(&self, id: JobId) -> Self {
        let mut next = self.0.clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        Self(next)
    }
}

impl FromIterator<JobId> for SavedJobSet {
    fn from_iter<I: IntoIterator<Item = JobId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_skills_match_case_sensitive() {
        let skills: UserSkillSet = ["React", "SQL"].into_iter().collect();
        assert!(skills.contains("React"));
        assert!(!skills.contains("react"));
        assert!(!skills.contains("ReactJS"));
    }

    #[test]
    fn test_user_skills_deduplicate() {
        let skills: UserSkillSet = ["SQL", "SQL", "Python"].into_iter().collect();
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_user_skills_serialize_as_array() {
        let skills: UserSkillSet = ["Python", "CSS"].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&skills).unwrap(),
            serde_json::json!(["CSS", "Python"])
        );
    }

    #[test]
    fn test_toggled_adds_then_removes() {
        let empty = SavedJobSet::default();
        let one = empty.toggled(3);
        assert!(one.contains(3));
        assert_eq!(empty, SavedJobSet::default(), "input set must not change");
        assert_eq!(one.toggled(3), empty);
    }
}
