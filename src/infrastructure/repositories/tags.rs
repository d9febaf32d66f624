use crate::domain::tags::{Tag, TagRepository};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::tags::TagDbModel;
use async_trait::async_trait;

/// Upper bound on search suggestions
const SEARCH_LIMIT: i64 = 20;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: DbPool,
}

impl PostgresTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Tag>, anyhow::Error> {
        let tags = sqlx::query_as::<_, TagDbModel>(
            r#"
            SELECT id, name
            FROM tags
            WHERE name ILIKE $1 ESCAPE '\'
            ORDER BY name ASC
            LIMIT $2
            "#,
        )
        .bind(like_pattern(query))
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags.into_iter().map(Into::into).collect())
    }
}
