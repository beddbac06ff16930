use std::sync::Arc;

use crate::config::Config;
use crate::summarizer::{SummarizeTranslateClient, Summarizer};

/// Read-only state shared by every request. Handlers keep nothing between
/// calls.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            summarizer: Arc::new(SummarizeTranslateClient::new(config)),
        }
    }
}
