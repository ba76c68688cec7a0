use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::assistant::errors::AssistantError;
use crate::domain::assistant::prompts::ASSISTANT_PROMPT;
use crate::domain::assistant::services::AssistantService;
use crate::domain::assistant::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};
use crate::domain::history::model::QuestionRecord;
use crate::domain::history::repository::QuestionHistoryRepository;
use crate::domain::logger::Logger;

pub struct AskQuestionUseCaseImpl {
    pub history: Arc<dyn QuestionHistoryRepository>,
    pub assistant: Arc<dyn AssistantService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskQuestionUseCase for AskQuestionUseCaseImpl {
    async fn execute(&self, params: AskQuestionParams) -> Result<String, AssistantError> {
        if params.question.is_empty() {
            return Err(AssistantError::QuestionEmpty);
        }

        self.logger.info("Answering text question");

        // History is best-effort: a failed write must not block the answer.
        let record = QuestionRecord::new(params.question.clone(), Utc::now());
        if let Err(err) = self.history.append(&record).await {
            self.logger
                .warn(&format!("Could not store question in history: {}", err));
        }

        let answer = self
            .assistant
            .complete_text(ASSISTANT_PROMPT, &params.question)
            .await?;

        self.logger.info("Question answered");

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::model::ImagePayload;
    use crate::domain::errors::RepositoryError;
    use chrono::Duration;
    use mockall::mock;

    mock! {
        pub HistoryRepo {}

        #[async_trait]
        impl QuestionHistoryRepository for HistoryRepo {
            async fn append(&self, record: &QuestionRecord) -> Result<(), RepositoryError>;
            async fn read_all(&self) -> Result<Vec<QuestionRecord>, RepositoryError>;
        }
    }

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

    #[tokio::test]
    async fn should_append_history_and_return_answer() {
        let expected_expiry = (Utc::now() + Duration::days(7)).date_naive();

        let mut mock_history = MockHistoryRepo::new();
        mock_history
            .expect_append()
            .withf(move |record| {
                record.question == "What is anemia?" && record.expires_on == expected_expiry
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_assistant = MockAssistant::new();
        mock_assistant
            .expect_complete_text()
            .withf(|prompt, question| prompt == ASSISTANT_PROMPT && question == "What is anemia?")
            .times(1)
            .returning(|_, _| Ok("Anemia is a condition...".to_string()));

        let use_case = AskQuestionUseCaseImpl {
            history: Arc::new(mock_history),
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskQuestionParams {
                question: "What is anemia?".to_string(),
            })
            .await;

        assert_eq!(result.unwrap(), "Anemia is a condition...");
    }

    #[tokio::test]
    async fn should_reject_empty_question_before_any_call() {
        // No expectations set: any history or assistant call would panic.
        let mock_history = MockHistoryRepo::new();
        let mock_assistant = MockAssistant::new();

        let use_case = AskQuestionUseCaseImpl {
            history: Arc::new(mock_history),
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskQuestionParams {
                question: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AssistantError::QuestionEmpty));
    }

    #[tokio::test]
    async fn should_answer_even_when_history_write_fails() {
        let mut mock_history = MockHistoryRepo::new();
        mock_history
            .expect_append()
            .returning(|_| Err(RepositoryError::WriteFailed));

        let mut mock_assistant = MockAssistant::new();
        mock_assistant
            .expect_complete_text()
            .times(1)
            .returning(|_, _| Ok("still answered".to_string()));

        let use_case = AskQuestionUseCaseImpl {
            history: Arc::new(mock_history),
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskQuestionParams {
                question: "How much water should I drink?".to_string(),
            })
            .await;

        assert_eq!(result.unwrap(), "still answered");
    }

    #[tokio::test]
    async fn should_propagate_inference_failure() {
        let mut mock_history = MockHistoryRepo::new();
        mock_history.expect_append().returning(|_| Ok(()));

        let mut mock_assistant = MockAssistant::new();
        mock_assistant
            .expect_complete_text()
            .returning(|_, _| Err(AssistantError::InferenceFailed("upstream 500".to_string())));

        let use_case = AskQuestionUseCaseImpl {
            history: Arc::new(mock_history),
            assistant: Arc::new(mock_assistant),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskQuestionParams {
                question: "What is anemia?".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AssistantError::InferenceFailed(msg) if msg == "upstream 500"
        ));
    }
}
