//! Tribes Entities

use kernel::id::PodcastId;
use uuid::Uuid;

/// A podcast and the pubkey of whoever owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Podcast {
    pub id: PodcastId,
    pub owner_id: String,
}

impl Podcast {
    pub fn new(id: PodcastId, owner_id: impl Into<String>) -> Self {
        Self {
            id,
            owner_id: owner_id.into(),
        }
    }
}

/// A tribe as stored. Only tribes with `unlisted == false` are public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tribe {
    pub uuid: Uuid,
    pub owner_pubkey: String,
    pub name: String,
    pub description: String,
    pub unlisted: bool,
}

impl Tribe {
    pub fn is_listed(&self) -> bool {
        !self.unlisted
    }
}

/// A tribe before it has been stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTribe {
    pub owner_pubkey: String,
    pub name: String,
    pub description: String,
    pub unlisted: bool,
}

impl NewTribe {
    /// Attach a fresh uuid.
    pub fn into_tribe(self) -> Tribe {
        Tribe {
            uuid: Uuid::new_v4(),
            owner_pubkey: self.owner_pubkey,
            name: self.name,
            description: self.description,
            unlisted: self.unlisted,
        }
    }
}
