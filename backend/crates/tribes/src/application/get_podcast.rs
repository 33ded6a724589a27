//! Get Podcast Use Case

use crate::domain::entity::Podcast;
use crate::domain::repository::PodcastRepository;
use crate::error::{TribesError, TribesResult};
use kernel::id::PodcastId;
use std::sync::Arc;

pub struct GetPodcastUseCase<P>
where
    P: PodcastRepository,
{
    podcast_repo: Arc<P>,
}

impl<P> GetPodcastUseCase<P>
where
    P: PodcastRepository,
{
    pub fn new(podcast_repo: Arc<P>) -> Self {
        Self { podcast_repo }
    }

    pub async fn execute(&self, id: PodcastId) -> TribesResult<Podcast> {
        self.podcast_repo
            .find_by_id(id)
            .await?
            .ok_or(TribesError::PodcastNotFound(id))
    }
}
