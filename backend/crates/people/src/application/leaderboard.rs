//! People Leaderboard Use Case

use crate::domain::repository::PeopleLeaderboardRepository;
use crate::error::PeopleResult;
use kernel::leaderboard::{LeaderboardEntry, rank};
use std::sync::Arc;

pub struct PeopleLeaderboardUseCase<L>
where
    L: PeopleLeaderboardRepository,
{
    leaderboard_repo: Arc<L>,
}

impl<L> PeopleLeaderboardUseCase<L>
where
    L: PeopleLeaderboardRepository,
{
    pub fn new(leaderboard_repo: Arc<L>) -> Self {
        Self { leaderboard_repo }
    }

    pub async fn execute(&self) -> PeopleResult<Vec<LeaderboardEntry>> {
        let mut entries = self.leaderboard_repo.people_leaderboard().await?;
        rank(&mut entries);
        Ok(entries)
    }
}
