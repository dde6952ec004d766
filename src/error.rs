use crate::api::pages;
use crate::store::StoreError;
use actix_web::error::{InternalError, JsonPayloadError, UrlencodedError};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Display)]
pub enum AppError {
    /// Missing or malformed request input
    #[display(fmt = "{}", _0)]
    Validation(String),
    /// The attendance store could not be reached or a lookup failed
    #[display(fmt = "{}", _0)]
    StoreUnavailable(String),
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::StoreUnavailable(error.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "error": "fin is required" }))]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Invalid JSON body: {err}")).into()
}

/// The form route answers with an HTML page, not the JSON error body.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .content_type(ContentType::html())
        .body(pages::error_page(&format!("Invalid form body: {err}")));
    InternalError::from_response(err, response).into()
}
