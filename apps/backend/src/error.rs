//! Error handling for the flashcards application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flashcard_core::{TemplateName, ValidationError};
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {name}: {source}")]
    Template {
        name: TemplateName,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Errors caused by the request itself; rendered as the error page.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::Validation(_))
    }

    /// Message shown on the error page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(message) => message.clone(),
            AppError::Validation(err) => err.user_message(),
            _ => "Something went wrong.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_)
            | AppError::Migration(_)
            | AppError::Io(_)
            | AppError::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
