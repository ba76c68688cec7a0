use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RepositoryError::WriteFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "HistoryError",
                "history.write_failed",
            ),
            RepositoryError::ReadFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "HistoryError",
                "history.read_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
