//! Create Podcast Use Case

use crate::domain::entity::Podcast;
use crate::domain::repository::PodcastRepository;
use crate::error::TribesResult;
use std::sync::Arc;

pub struct CreatePodcastUseCase<P>
where
    P: PodcastRepository,
{
    podcast_repo: Arc<P>,
}

impl<P> CreatePodcastUseCase<P>
where
    P: PodcastRepository,
{
    pub fn new(podcast_repo: Arc<P>) -> Self {
        Self { podcast_repo }
    }

    pub async fn execute(&self, podcast: Podcast) -> TribesResult<Podcast> {
        let created = self.podcast_repo.insert(&podcast).await?;

        tracing::info!(
            podcast_id = %created.id,
            owner_id = %created.owner_id,
            "Podcast created"
        );

        Ok(created)
    }
}
