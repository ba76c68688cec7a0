use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::history::use_cases::get_recent::{
    GetRecentQuestionsParams, GetRecentQuestionsUseCase, MAX_RECENT_QUESTIONS,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::history::dto::QuestionRecordResponse;
use crate::api::tags::ApiTags;

pub struct HistoryApi {
    get_recent_use_case: Arc<dyn GetRecentQuestionsUseCase>,
}

impl HistoryApi {
    pub fn new(get_recent_use_case: Arc<dyn GetRecentQuestionsUseCase>) -> Self {
        Self {
            get_recent_use_case,
        }
    }
}

/// History API
///
/// Endpoints for reading back previously asked questions.
#[OpenApi]
impl HistoryApi {
    /// List recent questions
    ///
    /// Returns the most recently asked questions, newest first, capped
    /// at 50 entries. Expired entries are included: the expiration date
    /// is advisory only.
    #[oai(path = "/history", method = "get", tag = "ApiTags::History")]
    async fn get_history(
        &self,
        /// Maximum number of entries to return (default and cap: 50)
        limit: Query<Option<usize>>,
    ) -> GetHistoryResponse {
        let limit = limit.0.unwrap_or(MAX_RECENT_QUESTIONS);

        match self
            .get_recent_use_case
            .execute(GetRecentQuestionsParams { limit })
            .await
        {
            Ok(records) => {
                let responses: Vec<QuestionRecordResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                GetHistoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetHistoryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<QuestionRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
