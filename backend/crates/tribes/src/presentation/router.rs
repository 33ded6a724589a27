//! Tribes Router

use crate::domain::repository::{BountyLeaderboardRepository, PodcastRepository, TribeRepository};
use crate::infra::postgres::PgTribesRepository;
use crate::presentation::handlers::{self, TribesAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the tribes router with PostgreSQL repository
pub fn tribes_router(repo: PgTribesRepository) -> Router {
    tribes_router_generic(repo)
}

/// Create a tribes router for any repository implementation
pub fn tribes_router_generic<R>(repo: R) -> Router
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = TribesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/podcast",
            get(handlers::get_podcast::<R>).post(handlers::create_podcast::<R>),
        )
        .route("/tribes", post(handlers::create_tribe::<R>))
        .route("/tribes/listed", get(handlers::listed_tribes::<R>))
        .route(
            "/bounties/leaderboard",
            get(handlers::bounties_leaderboard::<R>),
        )
        .with_state(state)
}
