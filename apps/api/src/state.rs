use std::sync::Arc;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Validated at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    /// `None` when no API key is configured; coaching endpoints then answer 503.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(catalog: Catalog, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            sessions: SessionStore::new(),
            generator,
        }
    }

    pub fn require_generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.generator.as_deref().ok_or_else(|| {
            AppError::Unavailable(
                "LLM not configured. Set ANTHROPIC_API_KEY and restart.".to_string(),
            )
        })
    }
}
