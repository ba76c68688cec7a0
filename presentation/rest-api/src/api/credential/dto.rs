use poem_openapi::Object;

use business::domain::credential::model::ModelInfo;

#[derive(Debug, Clone, Object)]
pub struct ModelSummary {
    /// Fully qualified model name (e.g. "models/gemini-2.5-flash")
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub display_name: Option<String>,
}

impl From<ModelInfo> for ModelSummary {
    fn from(model: ModelInfo) -> Self {
        Self {
            name: model.name,
            display_name: model.display_name,
        }
    }
}

/// Credential status as shown in the front end's sidebar.
#[derive(Debug, Clone, Object)]
pub struct CredentialStatusResponse {
    /// Whether the configured key passed the read-only validation call
    pub valid: bool,
    /// Masked form of the configured key
    pub masked_key: String,
    /// Models the key can see (empty when validation failed)
    pub models: Vec<ModelSummary>,
    /// Failure code when validation did not succeed
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    /// Remediation guidance for compromised keys
    #[oai(skip_serializing_if_is_none)]
    pub guidance: Option<String>,
}
