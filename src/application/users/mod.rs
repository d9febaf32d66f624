pub mod create;
pub mod profile;
