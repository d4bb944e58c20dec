//! Board entity - A kanban column that pizzas are placed on while they are prepared.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Board database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Column heading (e.g., "In Oven")
    pub title: String,
    /// CSS color used by the UI
    pub background_color: String,
}

/// `Board` only has the derived list of pizzas placed on it
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pizza::Entity")]
    Pizzas,
}

impl Related<super::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizzas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
