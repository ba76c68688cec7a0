use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::assistant::model::ImagePayload;
use business::domain::assistant::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};
use business::domain::assistant::use_cases::describe_image::{
    DescribeImageParams, DescribeImageUseCase,
};

use crate::api::assistant::dto::{
    AnswerResponse, AskQuestionRequest, DescribeImageRequest, DescriptionResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AssistantApi {
    ask_use_case: Arc<dyn AskQuestionUseCase>,
    describe_image_use_case: Arc<dyn DescribeImageUseCase>,
}

impl AssistantApi {
    pub fn new(
        ask_use_case: Arc<dyn AskQuestionUseCase>,
        describe_image_use_case: Arc<dyn DescribeImageUseCase>,
    ) -> Self {
        Self {
            ask_use_case,
            describe_image_use_case,
        }
    }
}

/// Assistant API
///
/// Endpoints that forward user input to the generative model.
#[OpenApi]
impl AssistantApi {
    /// Ask a text question
    ///
    /// Answers a free-form question with the fixed instructional prompt
    /// prepended. The question is also appended to the history log.
    #[oai(path = "/questions", method = "post", tag = "ApiTags::Assistant")]
    async fn ask_question(&self, body: Json<AskQuestionRequest>) -> AskQuestionResponse {
        match self
            .ask_use_case
            .execute(AskQuestionParams {
                question: body.0.question,
            })
            .await
        {
            Ok(answer) => AskQuestionResponse::Ok(Json(AnswerResponse { answer })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AskQuestionResponse::BadRequest(json),
                    _ => AskQuestionResponse::BadGateway(json),
                }
            }
        }
    }

    /// Describe an uploaded image
    ///
    /// Runs the multimodal model over a single image, optionally guided
    /// by a custom prompt. Image submissions are not logged to history.
    #[oai(
        path = "/image-descriptions",
        method = "post",
        tag = "ApiTags::Assistant"
    )]
    async fn describe_image(&self, body: Json<DescribeImageRequest>) -> DescribeImageResponse {
        let image = general_purpose::STANDARD
            .decode(body.0.image_base64.as_bytes())
            .ok()
            .map(|data| ImagePayload::new(body.0.mime_type.clone(), data));

        match self
            .describe_image_use_case
            .execute(DescribeImageParams {
                image,
                custom_prompt: body.0.prompt,
            })
            .await
        {
            Ok(description) => {
                DescribeImageResponse::Ok(Json(DescriptionResponse { description }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DescribeImageResponse::BadRequest(json),
                    _ => DescribeImageResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AskQuestionResponse {
    #[oai(status = 200)]
    Ok(Json<AnswerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DescribeImageResponse {
    #[oai(status = 200)]
    Ok(Json<DescriptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
