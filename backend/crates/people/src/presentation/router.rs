//! People Router

use crate::domain::repository::{PeopleLeaderboardRepository, PersonRepository};
use crate::infra::postgres::PgPeopleRepository;
use crate::presentation::handlers::{self, PeopleAppState};
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

/// Create the people router with PostgreSQL repository
pub fn people_router(repo: PgPeopleRepository) -> Router {
    people_router_generic(repo)
}

/// Create a people router for any repository implementation
pub fn people_router_generic<R>(repo: R) -> Router
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    let state = PeopleAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/person",
            get(handlers::get_person::<R>)
                .post(handlers::create_person::<R>)
                .put(handlers::create_or_edit_person::<R>),
        )
        .route("/person/{id}/name", put(handlers::update_person_name::<R>))
        .route("/people/leaderboard", get(handlers::people_leaderboard::<R>))
        .with_state(state)
}
