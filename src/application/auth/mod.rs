pub mod login;
pub mod refresh;
pub mod refresh_tokens;
pub mod revoke;
pub mod token_utils;
