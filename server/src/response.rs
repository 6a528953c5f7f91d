use anyhow::Error;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use ulid::Ulid;
use wordpass_common::PassphraseError;

/// JSON response
pub type JsonResult<T> = Result<AppJson<T>, AppError>;
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Error response captures error and optionally the request URL
// https://docs.rs/thiserror/latest/thiserror/
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(Error, Option<String>),
    #[error("Random source error: {0}")]
    RandomSource(PassphraseError, Option<String>),
    #[error("Not found")]
    NotFound(Option<String>),
}

impl AppError {
    /// Attach the request URL, keeping any URL already recorded.
    pub fn with_uri(self, uri: &Uri) -> Self {
        let url = Some(uri.to_string());
        match self {
            AppError::Internal(e, None) => AppError::Internal(e, url),
            AppError::RandomSource(e, None) => AppError::RandomSource(e, url),
            AppError::NotFound(None) => AppError::NotFound(url),
            other => other,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    trace_id: Ulid,
    request_url: Option<String>, // Include the request URL in the response
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let trace_id = Ulid::new();
        tracing::debug!("Error trace_id: {}", trace_id);

        let (status, e, url) = match self {
            AppError::Internal(error, url) => {
                error!(
                    "Internal server error: {:?} - Request URL: {:?} - trace_id: {}",
                    error,
                    url.as_deref().unwrap_or("None"),
                    trace_id
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                    url,
                )
            }
            AppError::RandomSource(error, url) => {
                error!(
                    "Random source error: {:?} - Request URL: {:?} - trace_id: {}",
                    error,
                    url.as_deref().unwrap_or("None"),
                    trace_id
                );
                match error {
                    PassphraseError::RandomSourceUnavailable(_) => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Secure random source unavailable".to_string(),
                        url,
                    ),
                    PassphraseError::EmptyWordList => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Something went wrong".to_string(),
                        url,
                    ),
                }
            }
            AppError::NotFound(url) => (
                StatusCode::NOT_FOUND,
                "Object not found".to_string(),
                url,
            ),
        };

        (
            status,
            AppJson(ErrorResponse {
                error: e,
                trace_id,
                request_url: url,
            }),
        )
            .into_response()
    }
}

impl From<PassphraseError> for AppError {
    fn from(err: PassphraseError) -> AppError {
        AppError::RandomSource(err, None) // Pass URL here if available
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> AppError {
        AppError::Internal(err, None)
    }
}
