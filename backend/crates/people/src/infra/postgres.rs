//! PostgreSQL Repository Implementations

use crate::domain::entity::Person;
use crate::domain::repository::{PeopleLeaderboardRepository, PersonRepository};
use crate::error::PeopleResult;
use kernel::id::PersonId;
use kernel::leaderboard::LeaderboardEntry;
use sqlx::PgPool;

const PEOPLE_BOARD: &str = "people";

/// PostgreSQL-backed people repository
#[derive(Clone)]
pub struct PgPeopleRepository {
    pool: PgPool,
}

impl PgPeopleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for PgPeopleRepository {
    async fn insert(&self, person: &Person) -> PeopleResult<Person> {
        if person.id.is_unassigned() {
            let row = sqlx::query_as::<_, PersonRow>(
                r#"
                INSERT INTO people (name, email)
                VALUES ($1, $2)
                RETURNING id, name, email
                "#,
            )
            .bind(&person.name)
            .bind(&person.email)
            .fetch_one(&self.pool)
            .await?;

            return Ok(row.into_person());
        }

        // Explicit ids bypass the identity sequence, so move it past them
        // in the same transaction.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PersonRow>(
            r#"
            INSERT INTO people (id, name, email)
            VALUES ($1, $2, $3)
            RETURNING id, name, email
            "#,
        )
        .bind(person.id.get())
        .bind(&person.name)
        .bind(&person.email)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('people', 'id'),
                GREATEST((SELECT MAX(id) FROM people), 1)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(person_id = row.id, "Inserted person with explicit id");

        Ok(row.into_person())
    }

    async fn find_by_id(&self, id: PersonId) -> PeopleResult<Option<Person>> {
        let row = sqlx::query_as::<_, PersonRow>(
            "SELECT id, name, email FROM people WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PersonRow::into_person))
    }

    async fn update(&self, person: &Person) -> PeopleResult<Option<Person>> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
            UPDATE people
            SET name = COALESCE(NULLIF($2, ''), name),
                email = COALESCE(NULLIF($3, ''), email)
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(person.id.get())
        .bind(&person.name)
        .bind(&person.email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PersonRow::into_person))
    }

    async fn update_name(&self, id: PersonId, name: &str) -> PeopleResult<u64> {
        let rows = sqlx::query("UPDATE people SET name = $2 WHERE id = $1")
            .bind(id.get())
            .bind(name)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows)
    }
}

impl PeopleLeaderboardRepository for PgPeopleRepository {
    async fn people_leaderboard(&self) -> PeopleResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT name, score
            FROM leaderboard_entries
            WHERE board = $1
            ORDER BY score DESC, name ASC
            "#,
        )
        .bind(PEOPLE_BOARD)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, score)| LeaderboardEntry::new(name, score))
            .collect())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    email: String,
}

impl PersonRow {
    fn into_person(self) -> Person {
        Person {
            id: PersonId::new(self.id),
            name: self.name,
            email: self.email,
        }
    }
}
