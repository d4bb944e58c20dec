/// Database connection and table creation
pub mod database;

/// Ingredient and board seed data loaded from menu.toml
pub mod menu;

/// Server settings from environment variables
pub mod server;

pub use server::AppConfig;
