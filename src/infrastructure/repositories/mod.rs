pub mod journals;
#[cfg(test)]
pub mod mock;
pub mod projects;
pub mod refresh_tokens;
pub mod tags;
pub mod users;
