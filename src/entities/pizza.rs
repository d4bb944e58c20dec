//! Pizza entity - Represents a pizza, either on the catalog or attached to an order.
//!
//! A pizza belongs to at most one order and at most one board at a time; both references
//! are nullable. Ingredients are linked through the `pizza_ingredients` join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pizza database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    /// Unique identifier for the pizza
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Size label (e.g., "small", "large")
    pub pizza_size: String,
    /// Dough type (e.g., "classic", "gluten free")
    pub dough: String,
    /// Shape (e.g., "round", "square")
    pub shape: String,
    /// Sauce type (e.g., "traditional red")
    pub sauce_type: String,
    /// Free-text description shown on the menu
    pub description: String,
    /// Whether the pizza can currently be ordered
    pub is_available: bool,
    /// Price in dollars
    pub pizza_price: f64,
    /// Whether this is a curated specialty pizza rather than a custom build
    pub is_specialty: bool,
    /// Free-text workflow label (e.g., "Pending", "In Oven")
    pub status: String,
    /// Order this pizza was made for, None for catalog pizzas
    pub order_id: Option<i64>,
    /// Board the pizza is currently placed on
    pub board_id: Option<i64>,
}

/// Defines relationships between Pizza and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each pizza belongs to at most one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,
    /// Each pizza is placed on at most one board
    #[sea_orm(
        belongs_to = "super::board::Entity",
        from = "Column::BoardId",
        to = "super::board::Column::Id",
        on_delete = "SetNull"
    )]
    Board,
    /// One pizza has many ingredient links
    #[sea_orm(has_many = "super::pizza_ingredient::Entity")]
    PizzaIngredients,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
    }
}

impl Related<super::pizza_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PizzaIngredients.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        super::pizza_ingredient::Relation::Ingredient.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pizza_ingredient::Relation::Pizza.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
