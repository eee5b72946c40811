pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod prompt;

use std::sync::Arc;
use config::Config;
use reqwest::Client;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pooled client for calls to the AI service
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            client: Client::new(),
        }
    }
}
