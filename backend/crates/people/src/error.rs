//! People Error Types
//!
//! Feature-level errors, converted into `kernel::error::AppError` when they
//! reach the HTTP boundary.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::id::PersonId;
use thiserror::Error;

pub type PeopleResult<T> = Result<T, PeopleError>;

#[derive(Debug, Error)]
pub enum PeopleError {
    /// Lookup by id found nothing. Clients have always seen this as a 500.
    #[error("Person {0} not found")]
    PersonNotFound(PersonId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PeopleError {
    fn log(&self) {
        match self {
            PeopleError::Database(e) => {
                tracing::error!(error = %e, "People database error");
            }
            PeopleError::PersonNotFound(id) => {
                tracing::warn!(person_id = %id, "Person lookup failed");
            }
        }
    }
}

/// Every failure reaches the client as a 500. For store errors the
/// classified database error is kept as the source.
impl From<PeopleError> for AppError {
    fn from(err: PeopleError) -> Self {
        match err {
            PeopleError::Database(e) => {
                AppError::internal("Database error").with_source(AppError::from(e))
            }
            e @ PeopleError::PersonNotFound(_) => AppError::internal(e.to_string()),
        }
    }
}

impl IntoResponse for PeopleError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
