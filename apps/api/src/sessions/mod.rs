//! Ephemeral saved-jobs sessions. Lives only as long as the process.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::mapping::calculator::toggle_saved_job;
use crate::models::catalog::JobId;
use crate::models::skills::SavedJobSet;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub saved_jobs: SavedJobSet,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with an empty saved set.
    pub async fn create(&self) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            saved_jobs: SavedJobSet::default(),
        };
        self.inner.write().await.insert(session.id, session.clone());
        session
    }

    pub async fn saved(&self, id: Uuid) -> Option<SavedJobSet> {
        self.inner
            .read()
            .await
            .get(&id)
            .map(|s| s.saved_jobs.clone())
    }

    /// Applies the toggle and replaces the stored set under one write lock.
    pub async fn toggle(&self, id: Uuid, job_id: JobId) -> Option<SavedJobSet> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        session.saved_jobs = toggle_saved_job(&session.saved_jobs, job_id);
        Some(session.saved_jobs.clone())
    }
}
