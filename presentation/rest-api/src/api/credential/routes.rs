use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::credential::errors::CredentialError;
use business::domain::credential::use_cases::validate::ValidateCredentialUseCase;

use crate::api::credential::dto::{CredentialStatusResponse, ModelSummary};
use crate::api::tags::ApiTags;

/// Guidance shown when the key looks revoked or leaked.
const COMPROMISED_GUIDANCE: &str = "Your API key appears invalid or was reported as leaked. \
Revoke the compromised key, create a new restricted key, and update your .env file. \
Run the check-credential binary for a full diagnostic.";

pub struct CredentialApi {
    validate_use_case: Arc<dyn ValidateCredentialUseCase>,
    masked_key: String,
}

impl CredentialApi {
    pub fn new(validate_use_case: Arc<dyn ValidateCredentialUseCase>, masked_key: String) -> Self {
        Self {
            validate_use_case,
            masked_key,
        }
    }
}

/// Credential API
///
/// Status endpoint the front end polls to render its key indicator.
#[OpenApi]
impl CredentialApi {
    /// Check credential status
    ///
    /// Performs the read-only model-listing probe against the remote
    /// service. Always answers 200: an invalid, missing, or compromised
    /// key is a reportable state, not a transport error.
    #[oai(path = "/credential/status", method = "get", tag = "ApiTags::Credential")]
    async fn credential_status(&self) -> Json<CredentialStatusResponse> {
        match self.validate_use_case.execute().await {
            Ok(report) => Json(CredentialStatusResponse {
                valid: true,
                masked_key: report.masked_key,
                models: report.models.into_iter().map(ModelSummary::from).collect(),
                error: None,
                guidance: None,
            }),
            Err(err) => {
                let guidance = if err.is_compromised() {
                    Some(COMPROMISED_GUIDANCE.to_string())
                } else {
                    None
                };
                let code = match &err {
                    CredentialError::ValidationFailed(_) => {
                        "credential.validation_failed".to_string()
                    }
                    other => other.to_string(),
                };
                Json(CredentialStatusResponse {
                    valid: false,
                    masked_key: self.masked_key.clone(),
                    models: vec![],
                    error: Some(code),
                    guidance,
                })
            }
        }
    }
}
