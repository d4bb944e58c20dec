//! Data access for pizzas, ingredients, orders and boards.
//!
//! Every function takes the database connection explicitly and returns
//! `crate::errors::Result`. Lookups by id return `Option`, updates and deletes return
//! whether a row matched, and operations the shop does not offer return
//! `Error::Unsupported`.

pub mod board;
pub mod ingredient;
pub mod order;
pub mod pizza;
pub mod seed;
