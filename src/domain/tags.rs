use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Case-insensitive substring match on the tag name
    async fn search(&self, query: &str) -> Result<Vec<Tag>, anyhow::Error>;
}
