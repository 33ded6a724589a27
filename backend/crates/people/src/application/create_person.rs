//! Create Person Use Case

use crate::domain::entity::Person;
use crate::domain::repository::PersonRepository;
use crate::error::PeopleResult;
use std::sync::Arc;

pub struct CreatePersonUseCase<P>
where
    P: PersonRepository,
{
    person_repo: Arc<P>,
}

impl<P> CreatePersonUseCase<P>
where
    P: PersonRepository,
{
    pub fn new(person_repo: Arc<P>) -> Self {
        Self { person_repo }
    }

    pub async fn execute(&self, person: Person) -> PeopleResult<Person> {
        let created = self.person_repo.insert(&person).await?;

        tracing::info!(person_id = %created.id, "Person created");

        Ok(created)
    }
}
