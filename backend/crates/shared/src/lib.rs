//! Shared Kernel
//!
//! Vocabulary shared by every feature crate:
//! - the unified error type rendered by all handlers
//! - integer record identifiers
//! - the leaderboard entry published by several features
//!
//! Anything feature-specific stays in its own crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod leaderboard;
