//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::PersonId;
use kernel::leaderboard::LeaderboardEntry;
use platform::extract::{IdQuery, StrictJson};
use std::sync::Arc;

use crate::application::{
    CreateOrEditPersonUseCase, CreatePersonUseCase, GetPersonUseCase, PeopleLeaderboardUseCase,
    UpdatePersonNameUseCase,
};
use crate::domain::repository::{PeopleLeaderboardRepository, PersonRepository};
use crate::error::PeopleResult;
use crate::presentation::dto::{PersonRequest, PersonResponse, UpdateNameRequest};

/// Shared state for people handlers
#[derive(Clone)]
pub struct PeopleAppState<R>
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /person?id=<int>
pub async fn get_person<R>(
    State(state): State<PeopleAppState<R>>,
    IdQuery(id): IdQuery,
) -> PeopleResult<Json<PersonResponse>>
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPersonUseCase::new(state.repo.clone());
    let person = use_case.execute(PersonId::new(id)).await?;

    Ok(Json(person.into()))
}

/// POST /person
pub async fn create_person<R>(
    State(state): State<PeopleAppState<R>>,
    StrictJson(req): StrictJson<PersonRequest>,
) -> PeopleResult<(StatusCode, Json<PersonResponse>)>
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePersonUseCase::new(state.repo.clone());
    let person = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(person.into())))
}

/// PUT /person
pub async fn create_or_edit_person<R>(
    State(state): State<PeopleAppState<R>>,
    StrictJson(req): StrictJson<PersonRequest>,
) -> PeopleResult<Json<PersonResponse>>
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateOrEditPersonUseCase::new(state.repo.clone());
    let person = use_case.execute(req.into()).await?;

    Ok(Json(person.into()))
}

/// PUT /person/{id}/name
pub async fn update_person_name<R>(
    State(state): State<PeopleAppState<R>>,
    Path(id): Path<i64>,
    StrictJson(req): StrictJson<UpdateNameRequest>,
) -> PeopleResult<StatusCode>
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePersonNameUseCase::new(state.repo.clone());
    use_case.execute(PersonId::new(id), &req.name).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /people/leaderboard
pub async fn people_leaderboard<R>(
    State(state): State<PeopleAppState<R>>,
) -> PeopleResult<Json<Vec<LeaderboardEntry>>>
where
    R: PersonRepository + PeopleLeaderboardRepository + Clone + Send + Sync + 'static,
{
    let use_case = PeopleLeaderboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}
