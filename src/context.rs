//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use guide_client::ApiConfig;

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    api_config: ApiConfig,
}

impl AppContext {
    pub fn new(api_config: ApiConfig) -> Self {
        Self { api_config }
    }

    /// Endpoint configuration for API clients
    pub fn api_config(&self) -> &ApiConfig {
        &self.api_config
    }
}
