use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde_json::json;

use business::domain::assistant::errors::AssistantError;
use business::domain::assistant::model::ImagePayload;
use business::domain::assistant::services::AssistantService;

use crate::client::GeminiClient;

pub struct AssistantGemini {
    client: GeminiClient,
}

impl AssistantGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    async fn generate(&self, parts: serde_json::Value) -> Result<String, AssistantError> {
        let body = json!({
            "contents": [
                {"parts": parts},
            ],
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::InferenceFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AssistantError::InferenceFailed(format!(
                "{} {}",
                status.as_u16(),
                detail
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AssistantError::InferenceFailed(e.to_string()))?;

        data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.iter().find_map(|p| p["text"].as_str()))
            .map(|text| text.to_string())
            .ok_or_else(|| {
                AssistantError::InferenceFailed("no text candidate in response".to_string())
            })
    }
}

#[async_trait]
impl AssistantService for AssistantGemini {
    async fn complete_text(
        &self,
        prompt: &str,
        question: &str,
    ) -> Result<String, AssistantError> {
        // Part order is part of the contract: instructional prompt first,
        // user question second.
        self.generate(json!([
            {"text": prompt},
            {"text": question},
        ]))
        .await
    }

    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> Result<String, AssistantError> {
        let encoded = general_purpose::STANDARD.encode(&image.data);

        // Image part first, analysis prompt second.
        self.generate(json!([
            {"inline_data": {"mime_type": image.mime_type, "data": encoded}},
            {"text": prompt},
        ]))
        .await
    }
}
