//! Shared handler state.

use astro_agents::ReadingOrchestrator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ReadingOrchestrator>,
    /// Expose generation failures in API responses
    pub debug: bool,
}

impl AppState {
    pub fn new(orchestrator: ReadingOrchestrator, debug: bool) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            debug,
        }
    }
}
