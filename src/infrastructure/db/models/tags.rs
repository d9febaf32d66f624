use crate::domain::tags::Tag;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TagDbModel {
    pub id: i64,
    pub name: String,
}

impl From<TagDbModel> for Tag {
    fn from(model: TagDbModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
