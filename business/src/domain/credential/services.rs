use async_trait::async_trait;

use super::errors::CredentialError;
use super::model::ModelInfo;

/// Service port for the read-only model listing used to probe whether a
/// credential is live. Listing models is the cheapest call the remote
/// service offers that still authenticates the key.
#[async_trait]
pub trait ModelCatalogService: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, CredentialError>;
}
