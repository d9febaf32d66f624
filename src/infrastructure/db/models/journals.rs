use crate::domain::journals::{Journal, Neighbours};
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct JournalDbModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<JournalDbModel> for Journal {
    fn from(model: JournalDbModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct NeighboursDbModel {
    pub previous_id: Option<i64>,
    pub next_id: Option<i64>,
}

impl From<NeighboursDbModel> for Neighbours {
    fn from(model: NeighboursDbModel) -> Self {
        Self {
            previous_id: model.previous_id,
            next_id: model.next_id,
        }
    }
}
