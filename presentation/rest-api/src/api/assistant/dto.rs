use poem_openapi::Object;

/// Request to ask the assistant a text question.
#[derive(Debug, Clone, Object)]
pub struct AskQuestionRequest {
    /// The question text, as typed by the user
    pub question: String,
}

#[derive(Debug, Clone, Object)]
pub struct AnswerResponse {
    /// The assistant's answer text
    pub answer: String,
}

/// Request to describe a single uploaded image.
#[derive(Debug, Clone, Object)]
pub struct DescribeImageRequest {
    /// Declared MIME type of the upload (image/jpeg or image/png)
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub image_base64: String,
    /// Optional custom analysis prompt
    #[oai(skip_serializing_if_is_none)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct DescriptionResponse {
    /// The assistant's description of the image
    pub description: String,
}
