#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant.question_empty")]
    QuestionEmpty,
    #[error("assistant.no_image")]
    NoImage,
    #[error("assistant.inference_failed: {0}")]
    InferenceFailed(String),
}
