pub mod auth;
pub mod journals;
pub mod projects;
pub mod tags;
pub mod users;
