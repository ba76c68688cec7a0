use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::model::ImagePayload;

pub struct DescribeImageParams {
    pub image: Option<ImagePayload>,
    pub custom_prompt: Option<String>,
}

#[async_trait]
pub trait DescribeImageUseCase: Send + Sync {
    async fn execute(&self, params: DescribeImageParams) -> Result<String, AssistantError>;
}
