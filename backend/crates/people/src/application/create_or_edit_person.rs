//! Create-or-Edit Person Use Case
//!
//! Update the row with the given id; when nothing matched, insert instead.

use crate::domain::entity::Person;
use crate::domain::repository::PersonRepository;
use crate::error::PeopleResult;
use std::sync::Arc;

pub struct CreateOrEditPersonUseCase<P>
where
    P: PersonRepository,
{
    person_repo: Arc<P>,
}

impl<P> CreateOrEditPersonUseCase<P>
where
    P: PersonRepository,
{
    pub fn new(person_repo: Arc<P>) -> Self {
        Self { person_repo }
    }

    pub async fn execute(&self, person: Person) -> PeopleResult<Person> {
        // An unassigned id can never match a stored row.
        if !person.id.is_unassigned() {
            if let Some(updated) = self.person_repo.update(&person).await? {
                tracing::info!(person_id = %updated.id, "Person updated");
                return Ok(updated);
            }
        }

        let created = self.person_repo.insert(&person).await?;
        tracing::info!(person_id = %created.id, "Person created by edit");

        Ok(created)
    }
}
