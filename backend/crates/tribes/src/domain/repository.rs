//! Repository Traits

use crate::domain::entity::{Podcast, Tribe};
use crate::error::TribesResult;
use kernel::id::PodcastId;
use kernel::leaderboard::LeaderboardEntry;

/// Podcast repository trait
#[trait_variant::make(PodcastRepository: Send)]
pub trait LocalPodcastRepository {
    /// Insert a podcast. An unassigned id gets the next identity value.
    async fn insert(&self, podcast: &Podcast) -> TribesResult<Podcast>;

    async fn find_by_id(&self, id: PodcastId) -> TribesResult<Option<Podcast>>;
}

/// Tribe repository trait
#[trait_variant::make(TribeRepository: Send)]
pub trait LocalTribeRepository {
    /// Tribes not flagged `unlisted`, ordered by name
    async fn listed(&self) -> TribesResult<Vec<Tribe>>;

    async fn create(&self, tribe: &Tribe) -> TribesResult<Tribe>;
}

/// Bounty leaderboard source
#[trait_variant::make(BountyLeaderboardRepository: Send)]
pub trait LocalBountyLeaderboardRepository {
    async fn bounties_leaderboard(&self) -> TribesResult<Vec<LeaderboardEntry>>;
}
