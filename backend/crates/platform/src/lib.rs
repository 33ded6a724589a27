//! Platform Crate - Technical Infrastructure
//!
//! Shared plumbing for the API binary and the feature routers:
//! - Server configuration from the environment
//! - HTTP middleware stack (request id, tracing, panic recovery, CORS, timeout)
//! - Lenient `?id=` and strict JSON body extractors

pub mod config;
pub mod extract;
pub mod http;

pub use config::{ConfigError, ServerConfig};
pub use extract::{IdQuery, StrictJson};
pub use http::http_stack;
