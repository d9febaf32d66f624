pub mod auth;
pub mod journals;
pub mod password;
pub mod projects;
pub mod tags;
pub mod users;
