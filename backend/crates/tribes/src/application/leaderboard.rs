//! Bounties Leaderboard Use Case

use crate::domain::repository::BountyLeaderboardRepository;
use crate::error::TribesResult;
use kernel::leaderboard::{LeaderboardEntry, rank};
use std::sync::Arc;

pub struct BountiesLeaderboardUseCase<L>
where
    L: BountyLeaderboardRepository,
{
    leaderboard_repo: Arc<L>,
}

impl<L> BountiesLeaderboardUseCase<L>
where
    L: BountyLeaderboardRepository,
{
    pub fn new(leaderboard_repo: Arc<L>) -> Self {
        Self { leaderboard_repo }
    }

    pub async fn execute(&self) -> TribesResult<Vec<LeaderboardEntry>> {
        let mut entries = self.leaderboard_repo.bounties_leaderboard().await?;
        rank(&mut entries);
        Ok(entries)
    }
}
