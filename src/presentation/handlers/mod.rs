pub mod auth;
pub mod health;
pub mod journals;
pub mod pages;
pub mod projects;
pub mod tags;
pub mod users;
