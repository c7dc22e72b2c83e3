use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::dataset::Dataset;

/// Trait abstraction over the fee data source.
///
/// The production implementation fetches from the dashboard's HTTP API;
/// tests substitute an in-memory mock. If the upstream API changes, only
/// the one implementation is touched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FeesProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full per-chain fee dataset.
    async fn fetch_chain_fees(&self) -> Result<Dataset, CoreError>;
}
