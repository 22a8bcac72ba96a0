use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// The CLI treats every variant the same way (message on stderr, exit 1).
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} environment variable not found or is not set")]
    MissingCredential(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Prompt template not found at {0}")]
    TemplateNotFound(String),

    #[error("No valid JSON object or array found in the model response: {0}")]
    JsonExtraction(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("error during step {index} ({label}): {source}")]
    Step {
        index: usize,
        label: &'static str,
        #[source]
        source: Box<AppError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The innermost error, looking through any `Step` wrappers.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Step { source, .. } => source.root(),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.root() {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            AppError::MissingCredential(var) => {
                tracing::error!("Missing credential: {var}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MISSING_CREDENTIAL",
                    "The AI service is not configured".to_string(),
                )
            }
            AppError::TemplateNotFound(path) => {
                tracing::error!("Template not found: {path}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_NOT_FOUND",
                    "A prompt template is missing".to_string(),
                )
            }
            AppError::JsonExtraction(_) | AppError::Llm(_) => {
                tracing::error!("AI processing error: {self}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Io(_) | AppError::Internal(_) | AppError::Step { .. } => {
                tracing::error!("Internal error: {self:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_names_step_and_cause() {
        let err = AppError::Step {
            index: 2,
            label: "Strategic Planning",
            source: Box::new(AppError::JsonExtraction("plain words".to_string())),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("error during step 2 (Strategic Planning):"));
        assert!(msg.contains("plain words"));
        assert!(matches!(err.root(), AppError::JsonExtraction(_)));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("jobDescription cannot be empty".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wrapped_llm_error_maps_to_bad_gateway() {
        let err = AppError::Step {
            index: 1,
            label: "JD Analysis",
            source: Box::new(AppError::Llm(LlmError::EmptyContent)),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
