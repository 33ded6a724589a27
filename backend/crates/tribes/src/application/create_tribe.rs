//! Create Tribe Use Case

use crate::domain::entity::{NewTribe, Tribe};
use crate::domain::repository::TribeRepository;
use crate::error::TribesResult;
use std::sync::Arc;

pub struct CreateTribeUseCase<T>
where
    T: TribeRepository,
{
    tribe_repo: Arc<T>,
}

impl<T> CreateTribeUseCase<T>
where
    T: TribeRepository,
{
    pub fn new(tribe_repo: Arc<T>) -> Self {
        Self { tribe_repo }
    }

    pub async fn execute(&self, new_tribe: NewTribe) -> TribesResult<Tribe> {
        let tribe = self.tribe_repo.create(&new_tribe.into_tribe()).await?;

        tracing::info!(
            tribe_uuid = %tribe.uuid,
            unlisted = tribe.unlisted,
            "Tribe created"
        );

        Ok(tribe)
    }
}
