//! Shared test utilities for the pizza shop.
//!
//! This module provides common helper functions for setting up test databases
//! and building pizzas and orders with sensible defaults.

use crate::{
    core::{ingredient, seed},
    entities,
    errors::Result,
    models,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a tracing subscriber that writes through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets up a database stocked with four ingredients:
///
/// * Mozzarella (cheese, 1.00)
/// * Basil (herb, 0.50)
/// * Pepperoni (meat, 1.50)
/// * Truffle (premium, 4.00, out of stock)
pub async fn setup_with_ingredients() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    ingredient::create_ingredient(&db, "Mozzarella", "cheese", 1.0, true).await?;
    ingredient::create_ingredient(&db, "Basil", "herb", 0.5, true).await?;
    ingredient::create_ingredient(&db, "Pepperoni", "meat", 1.5, true).await?;
    ingredient::create_ingredient(&db, "Truffle", "premium", 4.0, false).await?;
    Ok(db)
}

/// Creates a board with a neutral background color.
pub async fn create_test_board(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entities::board::Model> {
    seed::insert_board(db, title, "#ffffff").await
}

/// Builds an unsaved pizza referencing the given ingredients by name.
///
/// # Defaults
/// * dough "classic", shape "round", sauce "traditional red"
/// * price 15.0, available, not a specialty, status "Pending"
pub fn test_pizza(size: &str, ingredient_names: &[&str]) -> models::Pizza {
    models::Pizza {
        pizza_size: size.to_string(),
        dough: "classic".to_string(),
        shape: "round".to_string(),
        sauce_type: "traditional red".to_string(),
        description: format!("Test {size} pizza"),
        is_available: true,
        pizza_price: 15.0,
        is_specialty: false,
        status: "Pending".to_string(),
        ingredients: ingredient_names
            .iter()
            .map(|name| models::Ingredient {
                ingredient_name: (*name).to_string(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Builds an unsaved delivery order placed at a fixed time.
pub fn test_order(cust_email: &str, pizzas: Vec<models::Pizza>) -> models::Order {
    models::Order {
        id: 0,
        order_status: "Pending".to_string(),
        is_delivery: true,
        employee_name: "Test Employee".to_string(),
        order_time: NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|date| date.and_hms_opt(18, 30, 0))
            .unwrap_or_default(),
        cust_address: "123 Maple Street".to_string(),
        cust_email: cust_email.to_string(),
        pizzas,
    }
}
