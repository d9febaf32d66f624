use crate::infrastructure::auth::JwtAuthService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::password::PasswordService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub auth_service: Arc<JwtAuthService>,
    pub password_service: Arc<PasswordService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        let auth_service = Arc::new(JwtAuthService::new(
            &config.jwt_secret,
            config.access_token_ttl(),
        ));

        Self {
            pool,
            auth_service,
            password_service: Arc::new(PasswordService::new()),
            config: Arc::new(config),
        }
    }
}
