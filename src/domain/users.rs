use async_trait::async_trait;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct User {
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

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
}

/// Profile changes. `None` leaves a field untouched; `Some("")` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl UpdateProfile {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.bio.is_none()
            && self.email.is_none()
            && self.github.is_none()
            && self.linkedin.is_none()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user. Returns `None` if the name is taken or an account already exists.
    async fn create(&self, new_user: NewUser) -> Result<Option<User>, anyhow::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, anyhow::Error>;
    /// The site owner, i.e. the first registered user.
    async fn find_owner(&self) -> Result<Option<User>, anyhow::Error>;
    async fn count(&self) -> Result<i64, anyhow::Error>;
    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfile,
    ) -> Result<Option<User>, anyhow::Error>;
}
