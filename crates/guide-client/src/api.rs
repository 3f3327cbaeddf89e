//! Guide API client
//!
//! Status check and structured decode on top of an [`HttpTransport`].

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::domain::GrandCategory;
use crate::error::{FetchError, FetchResult};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Anything that can produce the full grand-category list
#[async_trait(?Send)]
pub trait CategorySource {
    async fn fetch_all_categories(&self) -> FetchResult<Vec<GrandCategory>>;
}

pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    config: ApiConfig,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(ReqwestTransport::new(), config)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> CategorySource for ApiClient<T> {
    async fn fetch_all_categories(&self) -> FetchResult<Vec<GrandCategory>> {
        let resp = self.transport.get(&self.config.endpoint()).await?;
        if !resp.is_success() {
            return Err(FetchError::HttpStatus {
                status: resp.status,
                status_text: resp.status_text,
                body: resp.body,
            });
        }

        let grands: Vec<GrandCategory> = serde_json::from_str(&resp.body)?;
        log::debug!("decoded {} grand categories", grands.len());
        Ok(grands)
    }
}
