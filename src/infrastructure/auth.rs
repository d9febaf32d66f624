use crate::domain::auth::{AuthService, Claims, TokenError};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

/// JWT access token service using HMAC-SHA256 over a shared secret
pub struct JwtAuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: time::Duration,
}

impl JwtAuthService {
    pub fn new(secret: &str, access_token_ttl: time::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_ttl,
        }
    }

    /// Sign a token for `user_id` that expires `ttl` from now.
    pub fn issue_access_token_with_ttl(
        &self,
        user_id: i64,
        ttl: time::Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new_access_token(user_id, ttl.whole_seconds());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation
    }
}

impl AuthService for JwtAuthService {
    fn issue_access_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_access_token_with_ttl(user_id, self.access_token_ttl)
    }

    fn verify_access_token(&self, token: &str) -> Result<i64, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidSignature,
            })?;

        token_data.claims.user_id()
    }
}
