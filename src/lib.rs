pub mod config;
pub mod fetch;
pub mod loader;
pub mod models;
pub mod ordering;
pub mod registry;
pub mod validation;
