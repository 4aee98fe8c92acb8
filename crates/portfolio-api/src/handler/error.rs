//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_core::{ErrorBody, ValidationError};
use portfolio_storage::StoreError;
use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const PORTFOLIO_FAILED_MESSAGE: &str = "Internal Server Error";
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to send message";

/// Failures surfaced by the route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Contact payload failed shape or content checks
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Aggregate read failed
    #[error("Portfolio read failed: {0}")]
    PortfolioUnavailable(#[source] StoreError),

    /// Contact insert failed
    #[error("Contact submission failed: {0}")]
    ContactFailed(#[source] StoreError),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::PortfolioUnavailable(_) => "PORTFOLIO_UNAVAILABLE",
            ApiError::ContactFailed(_) => "CONTACT_FAILED",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PortfolioUnavailable(_) | ApiError::ContactFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the client. Never carries internal detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => INVALID_INPUT_MESSAGE,
            ApiError::PortfolioUnavailable(_) => PORTFOLIO_FAILED_MESSAGE,
            ApiError::ContactFailed(_) => CONTACT_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidInput(err) => {
                tracing::debug!(
                    code = self.error_code(),
                    kind = err.kind(),
                    fields = ?err.fields(),
                    "Rejected contact payload"
                );
            }
            ApiError::PortfolioUnavailable(err) | ApiError::ContactFailed(err) => {
                tracing::error!(code = self.error_code(), error = %err, "Store operation failed");
            }
        }

        let body = ErrorBody::new(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}
