//! Ingredient entity - Toppings and bases that can be put on a pizza.
//!
//! The ingredient name is unique; pizzas refer to ingredients by name when they are
//! written, so the name acts as a natural key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Unique identifier for the ingredient
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique name (e.g., "Mozzarella", "Basil")
    #[sea_orm(unique)]
    pub ingredient_name: String,
    /// Free-text category, used for pricing tiers
    pub tier: String,
    /// Whether the ingredient is in stock
    pub available: bool,
    /// Surcharge in dollars
    pub ingredient_price: f64,
}

/// Defines relationships between Ingredient and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One ingredient is linked to many pizzas
    #[sea_orm(has_many = "super::pizza_ingredient::Entity")]
    PizzaIngredients,
}

impl Related<super::pizza_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PizzaIngredients.def()
    }
}

impl Related<super::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        super::pizza_ingredient::Relation::Pizza.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pizza_ingredient::Relation::Ingredient.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
