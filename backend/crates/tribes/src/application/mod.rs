//! Application Layer - Use Cases

pub mod create_podcast;
pub mod create_tribe;
pub mod get_podcast;
pub mod leaderboard;
pub mod listed_tribes;

pub use create_podcast::CreatePodcastUseCase;
pub use create_tribe::CreateTribeUseCase;
pub use get_podcast::GetPodcastUseCase;
pub use leaderboard::BountiesLeaderboardUseCase;
pub use listed_tribes::ListedTribesUseCase;
