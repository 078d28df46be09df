//! HTTP error mapping. Every failure leaves as an `ApiResult` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use superhero_shared::{ApiResult, ErrorCode, ErrorDetail};

use crate::use_cases::{UseCaseError, ValidationErrors};

const VALIDATION_TITLE: &str = "One or more validation errors occurred";
const NOT_FOUND_TITLE: &str = "Resource not found";
const BAD_REQUEST_TITLE: &str = "The request could not be read";
const INTERNAL_TITLE: &str = "An internal error occurred";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation(ValidationErrors),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_envelope(self) -> ApiResult<()> {
        match self {
            Self::NotFound(message) => {
                ApiResult::failure_single(NOT_FOUND_TITLE, ErrorCode::NotFound, message)
            }
            Self::BadRequest(message) => {
                ApiResult::failure_single(BAD_REQUEST_TITLE, ErrorCode::BadRequest, message)
            }
            Self::Validation(errors) => ApiResult::failure(
                VALIDATION_TITLE,
                errors
                    .iter()
                    .map(|error| ErrorDetail::new(error.field_name(), error.to_string()))
                    .collect(),
            ),
            Self::Internal(message) => {
                ApiResult::failure_single(INTERNAL_TITLE, ErrorCode::InternalError, message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(message) = &self {
            tracing::error!(error = %message, "Request failed");
        }
        (status, Json(self.into_envelope())).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound { entity, .. } => Self::NotFound(format!("{entity} not found")),
            UseCaseError::Validation(errors) => Self::Validation(errors),
            UseCaseError::Repo(e) if e.is_not_found() => Self::NotFound(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}
