//! Domain Layer
//!
//! - `Person` entity
//! - Repository traits (implemented in `infra/`)

pub mod entity;
pub mod repository;
