use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::model::CredentialReport;
use crate::domain::credential::services::ModelCatalogService;
use crate::domain::credential::use_cases::validate::ValidateCredentialUseCase;
use crate::domain::credential::value_objects::ApiKey;
use crate::domain::logger::Logger;

pub struct ValidateCredentialUseCaseImpl {
    pub credential: ApiKey,
    pub catalog: Arc<dyn ModelCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ValidateCredentialUseCase for ValidateCredentialUseCaseImpl {
    async fn execute(&self) -> Result<CredentialReport, CredentialError> {
        if self.credential.is_empty() {
            self.logger.warn("No API key configured");
            return Err(CredentialError::Missing);
        }

        match self.catalog.list_models().await {
            Ok(models) => {
                self.logger.info(&format!(
                    "Credential {} validated, {} models listed",
                    self.credential.masked(),
                    models.len()
                ));
                Ok(CredentialReport::new(&self.credential, models))
            }
            Err(CredentialError::ValidationFailed(message)) => {
                let classified = CredentialError::from_validation_message(message);
                if classified.is_compromised() {
                    self.logger.error(&format!(
                        "Credential {} appears revoked or leaked",
                        self.credential.masked()
                    ));
                } else {
                    self.logger
                        .warn(&format!("Could not validate credential: {}", classified));
                }
                Err(classified)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Could not validate credential: {}", err));
                Err(err)
            }
        }
    }
}
