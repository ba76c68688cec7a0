use super::value_objects::ApiKey;

/// A generative model advertised by the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub supported_generation_methods: Vec<String>,
}

/// Outcome of a successful credential validation.
#[derive(Debug, Clone)]
pub struct CredentialReport {
    pub masked_key: String,
    pub models: Vec<ModelInfo>,
}

impl CredentialReport {
    pub fn new(key: &ApiKey, models: Vec<ModelInfo>) -> Self {
        Self {
            masked_key: key.masked(),
            models,
        }
    }
}
