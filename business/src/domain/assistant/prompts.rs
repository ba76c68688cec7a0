/// Fixed instructional prompt prepended to every text question.
pub const ASSISTANT_PROMPT: &str = r#"Positioned as a knowledgeable and informative resource, respond comprehensively and helpfully to the user's query, drawing from various fields of knowledge.
Structure answers with neat points and paragraphs for accuracy.
If the user asks for an image as output, tell them to use the image-description mode instead."#;

/// Default analysis prompt used when an image is submitted without a
/// custom prompt.
pub const DEFAULT_IMAGE_PROMPT: &str = r#"Analyze the uploaded image and provide detailed information, including objects present, contextual details, and any notable aspects.
Give the complete details about the image and specify whether it has any history."#;
