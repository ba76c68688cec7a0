use std::sync::Arc;

use logger::TracingLogger;
use persistence::history::repository::QuestionHistoryCsv;

use gemini::assistant::AssistantGemini;
use gemini::client::GeminiClient;
use gemini::model_catalog::ModelCatalogGemini;

use business::application::assistant::ask::AskQuestionUseCaseImpl;
use business::application::assistant::describe_image::DescribeImageUseCaseImpl;
use business::application::credential::validate::ValidateCredentialUseCaseImpl;
use business::application::history::get_recent::GetRecentQuestionsUseCaseImpl;

use crate::api::assistant::routes::AssistantApi;
use crate::api::credential::routes::CredentialApi;
use crate::api::history::routes::HistoryApi;
use crate::config::gemini_config::GeminiConfig;
use crate::config::history_config::HistoryConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub assistant_api: AssistantApi,
    pub history_api: HistoryApi,
    pub credential_api: CredentialApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let gemini_config = GeminiConfig::from_env();
        let history_config = HistoryConfig::from_env();

        let raw_key = gemini_config.api_key.as_str().to_string();
        let assistant = Arc::new(AssistantGemini::new(GeminiClient::new(raw_key.clone())));
        let model_catalog = Arc::new(ModelCatalogGemini::new(GeminiClient::new(raw_key)));
        let history_repository = Arc::new(QuestionHistoryCsv::new(history_config.file_path));

        // Use cases
        let ask_use_case = Arc::new(AskQuestionUseCaseImpl {
            history: history_repository.clone(),
            assistant: assistant.clone(),
            logger: logger.clone(),
        });
        let describe_image_use_case = Arc::new(DescribeImageUseCaseImpl {
            assistant,
            logger: logger.clone(),
        });
        let get_recent_use_case = Arc::new(GetRecentQuestionsUseCaseImpl {
            repository: history_repository,
            logger: logger.clone(),
        });
        let validate_use_case = Arc::new(ValidateCredentialUseCaseImpl {
            credential: gemini_config.api_key.clone(),
            catalog: model_catalog,
            logger,
        });

        let assistant_api = AssistantApi::new(ask_use_case, describe_image_use_case);
        let history_api = HistoryApi::new(get_recent_use_case);
        let credential_api =
            CredentialApi::new(validate_use_case, gemini_config.api_key.masked());

        Self {
            health_api,
            assistant_api,
            history_api,
            credential_api,
        }
    }
}
