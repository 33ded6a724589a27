//! Domain Layer
//!
//! - `Podcast` and `Tribe` entities
//! - Repository traits (implemented in `infra/`)

pub mod entity;
pub mod repository;
