pub mod auth;
pub mod journals;
pub mod pages;
pub mod projects;
pub mod users;
