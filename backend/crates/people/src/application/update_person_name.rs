//! Update Person Name Use Case

use crate::domain::repository::PersonRepository;
use crate::error::PeopleResult;
use kernel::id::PersonId;
use std::sync::Arc;

pub struct UpdatePersonNameUseCase<P>
where
    P: PersonRepository,
{
    person_repo: Arc<P>,
}

impl<P> UpdatePersonNameUseCase<P>
where
    P: PersonRepository,
{
    pub fn new(person_repo: Arc<P>) -> Self {
        Self { person_repo }
    }

    /// Rename a person. Id 0 is ignored; an unknown id changes nothing.
    pub async fn execute(&self, id: PersonId, name: &str) -> PeopleResult<()> {
        if id.is_unassigned() {
            tracing::debug!("Ignoring name update for unassigned id");
            return Ok(());
        }

        let rows = self.person_repo.update_name(id, name).await?;
        if rows == 0 {
            tracing::debug!(person_id = %id, "Name update matched no person");
        } else {
            tracing::info!(person_id = %id, "Person renamed");
        }

        Ok(())
    }
}
