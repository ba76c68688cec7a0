use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::model::CredentialReport;

#[async_trait]
pub trait ValidateCredentialUseCase: Send + Sync {
    async fn execute(&self) -> Result<CredentialReport, CredentialError>;
}
