use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;

pub struct AskQuestionParams {
    pub question: String,
}

#[async_trait]
pub trait AskQuestionUseCase: Send + Sync {
    async fn execute(&self, params: AskQuestionParams) -> Result<String, AssistantError>;
}
