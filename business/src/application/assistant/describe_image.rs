use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::prompts::DEFAULT_IMAGE_PROMPT;
use crate::domain::assistant::services::AssistantService;
use crate::domain::assistant::use_cases::describe_image::{
    DescribeImageParams, DescribeImageUseCase,
};
use crate::domain::logger::Logger;

pub struct DescribeImageUseCaseImpl {
    pub assistant: Arc<dyn AssistantService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DescribeImageUseCase for DescribeImageUseCaseImpl {
    async fn execute(&self, params: DescribeImageParams) -> Result<String, AssistantError> {
        // The missing-image case fails here, before any remote call.
        let image = match params.image {
            Some(image) if !image.is_empty() => image,
            _ => return Err(AssistantError::NoImage),
        };

        let prompt = params
            .custom_prompt
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_PROMPT.to_string());

        self.logger.info(&format!(
            "Describing {} image ({} bytes)",
            image.mime_type,
            image.data.len()
        ));

        let description = self.assistant.describe_image(&image, &prompt).await?;

        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::model::ImagePayload;
    use mockall::mock;

    mock! {
        pub Assistant {}

        #[async_trait]
        impl AssistantService for Assistant {
            async fn complete_text(
                &self,
                prompt: &str,
                question: &str,
            ) -> Result<String, AssistantError>;
            async fn describe_image(
                &self,
                image: &ImagePayload,
                prompt: &str,
            ) -> Result<String, AssistantError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn png_payload() -> ImagePayload {
        ImagePayload::new("image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    #[tokio::test]
    async fn should_describe_image_with_custom_prompt() {
        let mut mock_assistant = MockAssistant::new();
        mock_assistant
            .expect_describe_image()
            .withf(|image, prompt| {
                image.mime_type == "image/png" && prompt == "What medication is this?"
            })
            .times(1)
            .returning(|_, _| Ok("A blister pack of ibuprofen.".to_string()));

        let use_case = DescribeImageUseCaseImpl {
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DescribeImageParams {
                image: Some(png_payload()),
                custom_prompt: Some("What medication is this?".to_string()),
            })
            .await;

        assert_eq!(result.unwrap(), "A blister pack of ibuprofen.");
    }

    #[tokio::test]
    async fn should_fall_back_to_default_prompt_when_custom_is_blank() {
        let mut mock_assistant = MockAssistant::new();
        mock_assistant
            .expect_describe_image()
            .withf(|_, prompt| prompt == DEFAULT_IMAGE_PROMPT)
            .times(1)
            .returning(|_, _| Ok("description".to_string()));

        let use_case = DescribeImageUseCaseImpl {
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DescribeImageParams {
                image: Some(png_payload()),
                custom_prompt: Some("   ".to_string()),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_without_image_before_any_remote_call() {
        // No describe_image expectation: a remote call would panic the test.
        let mock_assistant = MockAssistant::new();

        let use_case = DescribeImageUseCaseImpl {
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DescribeImageParams {
                image: None,
                custom_prompt: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AssistantError::NoImage));
    }

    #[tokio::test]
    async fn should_treat_empty_image_bytes_as_missing() {
        let mock_assistant = MockAssistant::new();

        let use_case = DescribeImageUseCaseImpl {
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DescribeImageParams {
                image: Some(ImagePayload::new("image/jpeg", vec![])),
                custom_prompt: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AssistantError::NoImage));
    }

    #[tokio::test]
    async fn should_propagate_inference_failure() {
        let mut mock_assistant = MockAssistant::new();
        mock_assistant
            .expect_describe_image()
            .returning(|_, _| Err(AssistantError::InferenceFailed("timeout".to_string())));

        let use_case = DescribeImageUseCaseImpl {
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DescribeImageParams {
                image: Some(png_payload()),
                custom_prompt: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AssistantError::InferenceFailed(_)
        ));
    }
}
