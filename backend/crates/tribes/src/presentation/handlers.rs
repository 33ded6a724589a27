//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::id::PodcastId;
use kernel::leaderboard::LeaderboardEntry;
use platform::extract::{IdQuery, StrictJson};
use std::sync::Arc;

use crate::application::{
    BountiesLeaderboardUseCase, CreatePodcastUseCase, CreateTribeUseCase, GetPodcastUseCase,
    ListedTribesUseCase,
};
use crate::domain::entity::Podcast;
use crate::domain::repository::{BountyLeaderboardRepository, PodcastRepository, TribeRepository};
use crate::error::TribesResult;
use crate::presentation::dto::{PodcastRequest, PodcastResponse, TribeRequest, TribeResponse};

/// Shared state for tribes handlers
#[derive(Clone)]
pub struct TribesAppState<R>
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
}

/// GET /podcast?id=<uint>
pub async fn get_podcast<R>(
    State(state): State<TribesAppState<R>>,
    IdQuery(id): IdQuery,
) -> TribesResult<Json<PodcastResponse>>
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    // Podcast ids are unsigned: a negative id is as malformed as "abc".
    let id = if id < 0 { 0 } else { id };

    let use_case = GetPodcastUseCase::new(state.repo.clone());
    let podcast = use_case.execute(PodcastId::new(id)).await?;

    Ok(Json(podcast.into()))
}

/// POST /podcast
pub async fn create_podcast<R>(
    State(state): State<TribesAppState<R>>,
    StrictJson(req): StrictJson<PodcastRequest>,
) -> TribesResult<(StatusCode, Json<PodcastResponse>)>
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let podcast = Podcast::try_from(req)?;

    let use_case = CreatePodcastUseCase::new(state.repo.clone());
    let created = use_case.execute(podcast).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /tribes/listed
pub async fn listed_tribes<R>(
    State(state): State<TribesAppState<R>>,
) -> TribesResult<Json<Vec<TribeResponse>>>
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListedTribesUseCase::new(state.repo.clone());
    let tribes = use_case.execute().await?;

    Ok(Json(tribes.into_iter().map(TribeResponse::from).collect()))
}

/// POST /tribes
pub async fn create_tribe<R>(
    State(state): State<TribesAppState<R>>,
    StrictJson(req): StrictJson<TribeRequest>,
) -> TribesResult<(StatusCode, Json<TribeResponse>)>
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = CreateTribeUseCase::new(state.repo.clone());
    let tribe = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(tribe.into())))
}

/// GET /bounties/leaderboard
pub async fn bounties_leaderboard<R>(
    State(state): State<TribesAppState<R>>,
) -> TribesResult<Json<Vec<LeaderboardEntry>>>
where
    R: PodcastRepository
        + TribeRepository
        + BountyLeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = BountiesLeaderboardUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}
