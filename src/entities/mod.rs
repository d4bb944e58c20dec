//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod board;
pub mod ingredient;
pub mod order;
pub mod pizza;
pub mod pizza_ingredient;

// Re-export specific types to avoid conflicts
pub use board::{Column as BoardColumn, Entity as Board, Model as BoardModel};
pub use ingredient::{Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use pizza::{Column as PizzaColumn, Entity as Pizza, Model as PizzaModel};
pub use pizza_ingredient::{
    Column as PizzaIngredientColumn, Entity as PizzaIngredient, Model as PizzaIngredientModel,
};
