use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Question is required")]
    MissingQuestion,

    #[error("Failed to reach AI service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected AI service response: {0}")]
    InvalidLlmResponse(String),

    #[error("No JSON object found in AI response")]
    NoJsonFound,

    #[error("Malformed JSON in AI response: {0}")]
    MalformedJson(serde_json::Error),

    #[error("AI response does not match the answer contract: {0}")]
    InvalidAnswerShape(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Status and the fixed message shown to the client. Details stay in the logs.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            AppError::MissingQuestion => (StatusCode::BAD_REQUEST, "Question is required"),
            AppError::Upstream { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "AI service error"),
            AppError::NoJsonFound | AppError::InvalidAnswerShape(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to parse AI response")
            }
            AppError::Transport(_)
            | AppError::InvalidLlmResponse(_)
            | AppError::MalformedJson(_)
            | AppError::ConfigError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }

    fn log(&self) {
        match self {
            AppError::MethodNotAllowed | AppError::MissingQuestion => {}
            AppError::Upstream { status, body } => {
                tracing::error!(%status, body = %body, "Anthropic API error");
            }
            AppError::NoJsonFound | AppError::InvalidAnswerShape(_) => {
                tracing::warn!(error = %self, "Could not use AI response");
            }
            _ => tracing::error!(error = %self, "Error handling question"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, error_message) = self.status_and_message();

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
