use async_trait::async_trait;

use business::domain::credential::errors::CredentialError;
use business::domain::credential::model::ModelInfo;
use business::domain::credential::services::ModelCatalogService;

use crate::client::GeminiClient;

/// Read-only model listing used as the credential probe.
pub struct ModelCatalogGemini {
    client: GeminiClient,
}

impl ModelCatalogGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn parse_models(data: &serde_json::Value) -> Vec<ModelInfo> {
        data["models"]
            .as_array()
            .map(|models| {
                models
                    .iter()
                    .filter_map(|model| {
                        let name = model["name"].as_str()?.to_string();
                        Some(ModelInfo {
                            name,
                            display_name: model["displayName"].as_str().map(|s| s.to_string()),
                            description: model["description"].as_str().map(|s| s.to_string()),
                            supported_generation_methods: model["supportedGenerationMethods"]
                                .as_array()
                                .map(|methods| {
                                    methods
                                        .iter()
                                        .filter_map(|m| m.as_str().map(|s| s.to_string()))
                                        .collect()
                                })
                                .unwrap_or_default(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl ModelCatalogService for ModelCatalogGemini {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, CredentialError> {
        let response = self
            .client
            .client
            .get(self.client.list_models_url())
            .send()
            .await
            .map_err(|e| CredentialError::ValidationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The numeric status is folded into the message so the
            // classifier catches a real 403 regardless of wording.
            let detail = response.text().await.unwrap_or_default();
            return Err(CredentialError::ValidationFailed(format!(
                "{} {}",
                status.as_u16(),
                detail
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CredentialError::ValidationFailed(e.to_string()))?;

        Ok(Self::parse_models(&data))
    }
}
