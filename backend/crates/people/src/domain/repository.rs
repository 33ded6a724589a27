//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::Person;
use crate::error::PeopleResult;
use kernel::id::PersonId;
use kernel::leaderboard::LeaderboardEntry;

/// Person repository trait
#[trait_variant::make(PersonRepository: Send)]
pub trait LocalPersonRepository {
    /// Insert a person. An unassigned id gets the next identity value,
    /// an explicit id is stored as given.
    async fn insert(&self, person: &Person) -> PeopleResult<Person>;

    /// Find a person by id
    async fn find_by_id(&self, id: PersonId) -> PeopleResult<Option<Person>>;

    /// Update the row with `person.id`, keeping stored values for empty
    /// fields. Returns the stored row, or `None` if no row matched.
    async fn update(&self, person: &Person) -> PeopleResult<Option<Person>>;

    /// Set the name of the row with `id`. Returns rows affected.
    async fn update_name(&self, id: PersonId, name: &str) -> PeopleResult<u64>;
}

/// People leaderboard source
#[trait_variant::make(PeopleLeaderboardRepository: Send)]
pub trait LocalPeopleLeaderboardRepository {
    async fn people_leaderboard(&self) -> PeopleResult<Vec<LeaderboardEntry>>;
}
