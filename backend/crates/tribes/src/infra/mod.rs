//! Infrastructure Layer - PostgreSQL repositories

pub mod postgres;
