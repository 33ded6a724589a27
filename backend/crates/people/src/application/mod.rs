//! Application Layer - Use Cases

pub mod create_or_edit_person;
pub mod create_person;
pub mod get_person;
pub mod leaderboard;
pub mod update_person_name;

pub use create_or_edit_person::CreateOrEditPersonUseCase;
pub use create_person::CreatePersonUseCase;
pub use get_person::GetPersonUseCase;
pub use leaderboard::PeopleLeaderboardUseCase;
pub use update_person_name::UpdatePersonNameUseCase;
