//! Tribes Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::id::PodcastId;
use thiserror::Error;

pub type TribesResult<T> = Result<T, TribesError>;

#[derive(Debug, Error)]
pub enum TribesError {
    /// Rendered as 500, same as a failed person lookup.
    #[error("Podcast {0} not found")]
    PodcastNotFound(PodcastId),

    #[error("Podcast id {0} is out of range")]
    PodcastIdOutOfRange(u64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TribesError {
    fn log(&self) {
        match self {
            TribesError::Database(e) => {
                tracing::error!(error = %e, "Tribes database error");
            }
            TribesError::PodcastNotFound(id) => {
                tracing::warn!(podcast_id = %id, "Podcast lookup failed");
            }
            TribesError::PodcastIdOutOfRange(id) => {
                tracing::warn!(podcast_id = id, "Podcast id does not fit the store");
            }
        }
    }
}

/// Every failure reaches the client as a 500. For store errors the
/// classified database error is kept as the source.
impl From<TribesError> for AppError {
    fn from(err: TribesError) -> Self {
        match err {
            TribesError::Database(e) => {
                AppError::internal("Database error").with_source(AppError::from(e))
            }
            e @ (TribesError::PodcastNotFound(_) | TribesError::PodcastIdOutOfRange(_)) => {
                AppError::internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for TribesError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
