use crate::domain::journals::{Journal, JournalRepository, Neighbours, NewJournal, UpdateJournal};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::journals::{JournalDbModel, NeighboursDbModel};
use async_trait::async_trait;

#[derive(Clone)]
pub struct PostgresJournalRepository {
    pool: DbPool,
}

impl PostgresJournalRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalRepository for PostgresJournalRepository {
    #[tracing::instrument(skip(self, new_journal), fields(user_id = new_journal.user_id))]
    async fn create(&self, new_journal: NewJournal) -> Result<Journal, anyhow::Error> {
        let journal = sqlx::query_as::<_, JournalDbModel>(
            r#"
            INSERT INTO journal_entries (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(new_journal.title)
        .bind(new_journal.content)
        .bind(new_journal.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(journal.into())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Journal>, anyhow::Error> {
        let journal = sqlx::query_as::<_, JournalDbModel>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM journal_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(journal.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Journal>, anyhow::Error> {
        let journals = sqlx::query_as::<_, JournalDbModel>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM journal_entries
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(journals.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<i64, anyhow::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM journal_entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(&self, id: i64, update: UpdateJournal) -> Result<Option<Journal>, anyhow::Error> {
        let journal = sqlx::query_as::<_, JournalDbModel>(
            r#"
            UPDATE journal_entries
            SET title = $2, content = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(journal.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn neighbours(&self, id: i64) -> Result<Neighbours, anyhow::Error> {
        let neighbours = sqlx::query_as::<_, NeighboursDbModel>(
            r#"
            SELECT
                (SELECT MAX(id) FROM journal_entries WHERE id < $1) AS previous_id,
                (SELECT MIN(id) FROM journal_entries WHERE id > $1) AS next_id
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(neighbours.into())
    }
}
