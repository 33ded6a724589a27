//! Get Person Use Case

use crate::domain::entity::Person;
use crate::domain::repository::PersonRepository;
use crate::error::{PeopleError, PeopleResult};
use kernel::id::PersonId;
use std::sync::Arc;

pub struct GetPersonUseCase<P>
where
    P: PersonRepository,
{
    person_repo: Arc<P>,
}

impl<P> GetPersonUseCase<P>
where
    P: PersonRepository,
{
    pub fn new(person_repo: Arc<P>) -> Self {
        Self { person_repo }
    }

    pub async fn execute(&self, id: PersonId) -> PeopleResult<Person> {
        self.person_repo
            .find_by_id(id)
            .await?
            .ok_or(PeopleError::PersonNotFound(id))
    }
}
