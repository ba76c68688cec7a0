use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::assistant::errors::AssistantError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AssistantError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AssistantError::QuestionEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            AssistantError::NoImage => (StatusCode::BAD_REQUEST, "ValidationError"),
            AssistantError::InferenceFailed(_) => (StatusCode::BAD_GATEWAY, "InferenceError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                // InferenceFailed keeps the underlying message in the code.
                message: self.to_string(),
            }),
        )
    }
}
