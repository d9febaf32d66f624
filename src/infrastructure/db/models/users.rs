use crate::domain::users::User;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct UserDbModel {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<UserDbModel> for User {
    fn from(model: UserDbModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            password_hash: model.password_hash,
            bio: model.bio,
            email: model.email,
            github: model.github,
            linkedin: model.linkedin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
