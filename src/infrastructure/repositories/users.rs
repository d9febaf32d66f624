use crate::domain::users::{NewUser, UpdateProfile, User, UserRepository};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::users::UserDbModel;
use async_trait::async_trait;

const USER_COLUMNS: &str =
    "id, name, password_hash, bio, email, github, linkedin, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: DbPool,
}

impl PostgresUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Empty strings clear optional profile fields
fn blank_to_null(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(skip(self, new_user), fields(name = %new_user.name))]
    async fn create(&self, new_user: NewUser) -> Result<Option<User>, anyhow::Error> {
        let result = sqlx::query_as::<_, UserDbModel>(&format!(
            r#"
            INSERT INTO users (name, password_hash)
            VALUES ($1, $2)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new_user.name)
        .bind(new_user.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(Some(user.into())),
            // either the name or the single-account constraint
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        let user = sqlx::query_as::<_, UserDbModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, anyhow::Error> {
        let user = sqlx::query_as::<_, UserDbModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn find_owner(&self) -> Result<Option<User>, anyhow::Error> {
        let user = sqlx::query_as::<_, UserDbModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<i64, anyhow::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfile,
    ) -> Result<Option<User>, anyhow::Error> {
        let name = update.name.map(|n| n.trim().to_string());
        let bio = blank_to_null(update.bio);
        let email = blank_to_null(update.email);
        let github = blank_to_null(update.github);
        let linkedin = blank_to_null(update.linkedin);

        // each optional column takes a "present" flag so NULL can mean "clear"
        let user = sqlx::query_as::<_, UserDbModel>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                bio = CASE WHEN $3 THEN $4 ELSE bio END,
                email = CASE WHEN $5 THEN $6 ELSE email END,
                github = CASE WHEN $7 THEN $8 ELSE github END,
                linkedin = CASE WHEN $9 THEN $10 ELSE linkedin END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(bio.is_some())
        .bind(bio.flatten())
        .bind(email.is_some())
        .bind(email.flatten())
        .bind(github.is_some())
        .bind(github.flatten())
        .bind(linkedin.is_some())
        .bind(linkedin.flatten())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(Into::into))
    }
}
