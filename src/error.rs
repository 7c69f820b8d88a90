use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::languages::UnknownLanguage;
use crate::translate::{EmptyInput, TranslateError};

/// Failures of the JSON API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInput),

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),

    #[error("Translation failed: {0}")]
    Upstream(#[from] TranslateError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
