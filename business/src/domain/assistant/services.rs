use async_trait::async_trait;

use super::errors::AssistantError;
use super::model::ImagePayload;

/// Service port for the remote generative model.
///
/// Both operations are single request/response calls against the same
/// fixed model; the part order in each request is part of the contract.
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Issues one completion built from exactly two ordered text parts:
    /// the instructional prompt followed by the user question.
    async fn complete_text(&self, prompt: &str, question: &str)
    -> Result<String, AssistantError>;

    /// Issues one completion built from the inline image part followed
    /// by the analysis prompt.
    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> Result<String, AssistantError>;
}
