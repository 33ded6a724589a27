//! API DTOs (Data Transfer Objects)

use crate::domain::entity::{NewTribe, Podcast, Tribe};
use crate::error::TribesError;
use kernel::id::PodcastId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of POST /podcast. A missing or zero id means "assign one".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PodcastRequest {
    pub id: u64,
    pub owner_id: String,
}

impl TryFrom<PodcastRequest> for Podcast {
    type Error = TribesError;

    fn try_from(req: PodcastRequest) -> Result<Self, Self::Error> {
        let id = i64::try_from(req.id).map_err(|_| TribesError::PodcastIdOutOfRange(req.id))?;
        Ok(Podcast::new(PodcastId::new(id), req.owner_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastResponse {
    pub id: PodcastId,
    pub owner_id: String,
}

impl From<Podcast> for PodcastResponse {
    fn from(podcast: Podcast) -> Self {
        Self {
            id: podcast.id,
            owner_id: podcast.owner_id,
        }
    }
}

/// Body of POST /tribes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TribeRequest {
    pub owner_pubkey: String,
    pub name: String,
    pub description: String,
    pub unlisted: bool,
}

impl From<TribeRequest> for NewTribe {
    fn from(req: TribeRequest) -> Self {
        NewTribe {
            owner_pubkey: req.owner_pubkey,
            name: req.name,
            description: req.description,
            unlisted: req.unlisted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TribeResponse {
    pub uuid: Uuid,
    pub owner_pubkey: String,
    pub name: String,
    pub description: String,
    pub unlisted: bool,
}

impl From<Tribe> for TribeResponse {
    fn from(tribe: Tribe) -> Self {
        Self {
            uuid: tribe.uuid,
            owner_pubkey: tribe.owner_pubkey,
            name: tribe.name,
            description: tribe.description,
            unlisted: tribe.unlisted,
        }
    }
}
