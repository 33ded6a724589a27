//! Tribes Backend Module
//!
//! Podcasts, the public tribe listing and the bounty leaderboard.
//!
//! Clean Architecture structure:
//! - `domain/` - Podcast and Tribe entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Contract
//! - `GET /podcast?id=` looks up a malformed id as 0; a failed lookup answers 500
//! - `GET /tribes/listed` never returns a tribe flagged `unlisted`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TribesError, TribesResult};
pub use infra::postgres::PgTribesRepository;
pub use presentation::router::{tribes_router, tribes_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
