//! People Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Person entity, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Contract
//! - `GET /person?id=` never rejects the query; a malformed id is looked up as 0
//! - A failed lookup answers 500, undecodable bodies answer 406
//! - Records are never deleted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PeopleError, PeopleResult};
pub use infra::postgres::PgPeopleRepository;
pub use presentation::router::{people_router, people_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}
