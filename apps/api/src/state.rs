use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key is configured; every request then takes the fallback path.
    pub llm: Option<Arc<dyn CompletionBackend>>,
}

impl AppState {
    pub fn llm(&self) -> Option<&dyn CompletionBackend> {
        self.llm.as_deref()
    }
}
