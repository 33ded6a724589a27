//! PostgreSQL Repository Implementations

use crate::domain::entity::{Podcast, Tribe};
use crate::domain::repository::{
    BountyLeaderboardRepository, PodcastRepository, TribeRepository,
};
use crate::error::TribesResult;
use kernel::id::PodcastId;
use kernel::leaderboard::LeaderboardEntry;
use sqlx::PgPool;
use uuid::Uuid;

const BOUNTIES_BOARD: &str = "bounties";

/// PostgreSQL-backed podcasts, tribes and bounty board
#[derive(Clone)]
pub struct PgTribesRepository {
    pool: PgPool,
}

impl PgTribesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PodcastRepository for PgTribesRepository {
    async fn insert(&self, podcast: &Podcast) -> TribesResult<Podcast> {
        if podcast.id.is_unassigned() {
            let row = sqlx::query_as::<_, PodcastRow>(
                r#"
                INSERT INTO podcasts (owner_id)
                VALUES ($1)
                RETURNING id, owner_id
                "#,
            )
            .bind(&podcast.owner_id)
            .fetch_one(&self.pool)
            .await?;

            return Ok(row.into_podcast());
        }

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PodcastRow>(
            r#"
            INSERT INTO podcasts (id, owner_id)
            VALUES ($1, $2)
            RETURNING id, owner_id
            "#,
        )
        .bind(podcast.id.get())
        .bind(&podcast.owner_id)
        .fetch_one(&mut *tx)
        .await?;

        // Keep generated ids clear of explicit ones.
        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('podcasts', 'id'),
                GREATEST((SELECT MAX(id) FROM podcasts), 1)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into_podcast())
    }

    async fn find_by_id(&self, id: PodcastId) -> TribesResult<Option<Podcast>> {
        let row =
            sqlx::query_as::<_, PodcastRow>("SELECT id, owner_id FROM podcasts WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(PodcastRow::into_podcast))
    }
}

impl TribeRepository for PgTribesRepository {
    async fn listed(&self) -> TribesResult<Vec<Tribe>> {
        let rows = sqlx::query_as::<_, TribeRow>(
            r#"
            SELECT uuid, owner_pubkey, name, description, unlisted
            FROM tribes
            WHERE unlisted = FALSE
            ORDER BY name ASC, uuid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TribeRow::into_tribe).collect())
    }

    async fn create(&self, tribe: &Tribe) -> TribesResult<Tribe> {
        let row = sqlx::query_as::<_, TribeRow>(
            r#"
            INSERT INTO tribes (uuid, owner_pubkey, name, description, unlisted)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING uuid, owner_pubkey, name, description, unlisted
            "#,
        )
        .bind(tribe.uuid)
        .bind(&tribe.owner_pubkey)
        .bind(&tribe.name)
        .bind(&tribe.description)
        .bind(tribe.unlisted)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_tribe())
    }
}

impl BountyLeaderboardRepository for PgTribesRepository {
    async fn bounties_leaderboard(&self) -> TribesResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT name, score
            FROM leaderboard_entries
            WHERE board = $1
            ORDER BY score DESC, name ASC
            "#,
        )
        .bind(BOUNTIES_BOARD)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, score)| LeaderboardEntry::new(name, score))
            .collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct PodcastRow {
    id: i64,
    owner_id: String,
}

impl PodcastRow {
    fn into_podcast(self) -> Podcast {
        Podcast::new(PodcastId::new(self.id), self.owner_id)
    }
}

#[derive(sqlx::FromRow)]
struct TribeRow {
    uuid: Uuid,
    owner_pubkey: String,
    name: String,
    description: String,
    unlisted: bool,
}

impl TribeRow {
    fn into_tribe(self) -> Tribe {
        Tribe {
            uuid: self.uuid,
            owner_pubkey: self.owner_pubkey,
            name: self.name,
            description: self.description,
            unlisted: self.unlisted,
        }
    }
}
