use async_trait::async_trait;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Journal {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewJournal {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct UpdateJournal {
    pub title: String,
    pub content: String,
}

/// Ids of the entries adjacent to a given one, in id order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub previous_id: Option<i64>,
    pub next_id: Option<i64>,
}

#[async_trait]
pub trait JournalRepository: Send + Sync {
    async fn create(&self, new_journal: NewJournal) -> Result<Journal, anyhow::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Journal>, anyhow::Error>;
    /// Newest first
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Journal>, anyhow::Error>;
    async fn count(&self) -> Result<i64, anyhow::Error>;
    async fn update(&self, id: i64, update: UpdateJournal) -> Result<Option<Journal>, anyhow::Error>;
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error>;
    async fn neighbours(&self, id: i64) -> Result<Neighbours, anyhow::Error>;
}
