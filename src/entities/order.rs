//! Order entity - A customer order taken by an employee.
//!
//! Orders own their pizzas through `pizzas.order_id`. An order and its pizzas are always
//! written together in one database transaction.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Free-text status (e.g., "Pending", "Complete")
    pub order_status: String,
    /// Delivery (true) or pickup (false)
    pub is_delivery: bool,
    /// Employee who took the order
    pub employee_name: String,
    /// When the order was placed
    pub order_time: DateTime,
    /// Delivery address of the customer
    pub cust_address: String,
    /// Where the confirmation message is sent
    pub cust_email: String,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order has many pizzas
    #[sea_orm(has_many = "super::pizza::Entity")]
    Pizzas,
}

impl Related<super::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizzas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
