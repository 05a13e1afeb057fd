//! Application state.

use chrono::{DateTime, Utc};
use simplistock_gemini::GeminiClient;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(gemini: Arc<GeminiClient>) -> Self {
        Self {
            gemini,
            started_at: Utc::now(),
        }
    }
}
