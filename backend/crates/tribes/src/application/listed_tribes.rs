//! Listed Tribes Use Case

use crate::domain::entity::Tribe;
use crate::domain::repository::TribeRepository;
use crate::error::TribesResult;
use std::sync::Arc;

pub struct ListedTribesUseCase<T>
where
    T: TribeRepository,
{
    tribe_repo: Arc<T>,
}

impl<T> ListedTribesUseCase<T>
where
    T: TribeRepository,
{
    pub fn new(tribe_repo: Arc<T>) -> Self {
        Self { tribe_repo }
    }

    pub async fn execute(&self) -> TribesResult<Vec<Tribe>> {
        let mut tribes = self.tribe_repo.listed().await?;
        // The listing never includes an unlisted tribe.
        tribes.retain(Tribe::is_listed);
        Ok(tribes)
    }
}
