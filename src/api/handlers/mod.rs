//! Request handlers, one module per resource.

pub mod board;
pub mod health;
pub mod ingredient;
pub mod order;
pub mod pizza;
