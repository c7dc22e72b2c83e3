use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::FeesProvider;
use crate::errors::CoreError;
use crate::models::dataset::Dataset;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "CHAIN_FEES_API_URL";

/// HTTP provider for the dashboard's own fee API.
///
/// - **Endpoint**: `GET {base_url}/api/chain-fees`
/// - **Shape**: `{ "dates": [...], "chainData": { chain: { date: fee } } }`
/// - **Auth**: none; no pagination, no streaming.
/// - **Source**: fee data aggregated from DefiLlama.
pub struct FeesApiProvider {
    client: Client,
    base_url: String,
}

impl FeesApiProvider {
    /// Build a provider for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a provider from the `CHAIN_FEES_API_URL` environment variable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, CoreError> {
        let base_url = std::env::var(API_URL_ENV).map_err(|_| CoreError::Api {
            provider: "ChainFeesApi".into(),
            message: format!("{API_URL_ENV} is not set"),
        })?;
        Ok(Self::new(base_url))
    }

    /// The fully resolved endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api/chain-fees", self.base_url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FeesProvider for FeesApiProvider {
    fn name(&self) -> &str {
        "ChainFeesApi"
    }

    async fn fetch_chain_fees(&self) -> Result<Dataset, CoreError> {
        let url = self.endpoint();

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CoreError::Api {
                provider: "ChainFeesApi".into(),
                message: format!("Request to {url} failed with status {}", response.status()),
            });
        }

        let dataset: Dataset = response.json().await.map_err(|e| CoreError::Api {
            provider: "ChainFeesApi".into(),
            message: format!("Failed to parse chain fees response: {e}"),
        })?;

        Ok(dataset)
    }
}
