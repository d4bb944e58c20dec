//! Order data access - Creating and reading customer orders.
//!
//! An order is written in one database transaction together with its pizzas and their
//! ingredient links. Each pizza row references the id generated for the order by that
//! same insert, never "the latest order", so concurrent writers cannot cross-link pizzas.
//! Orders are never updated or deleted; those operations report `Error::Unsupported`.

use crate::{
    core::pizza::{insert_pizza, load_pizzas},
    entities::{Order, Pizza, order, pizza},
    errors::{Error, Result},
    models,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Retrieves every order with its pizzas.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<models::Order>> {
    let rows = Order::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?;

    let mut orders = Vec::with_capacity(rows.len());
    for row in rows {
        let pizzas = pizzas_for_order(db, row.id).await?;
        orders.push(models::Order::from_parts(row, pizzas));
    }
    Ok(orders)
}

/// Finds an order by id, returning None if it does not exist.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<models::Order>> {
    let Some(row) = Order::find_by_id(order_id).one(db).await? else {
        debug!(order_id, "Order not found");
        return Ok(None);
    };
    let pizzas = pizzas_for_order(db, row.id).await?;
    Ok(Some(models::Order::from_parts(row, pizzas)))
}

/// Creates an order together with its pizzas and their ingredient links.
///
/// Any `orderId` on the incoming pizzas is ignored; every pizza is attached to the new
/// order. The returned order carries the generated ids.
///
/// # Errors
/// Returns `Error::UnknownIngredient` if any pizza names an ingredient that does not
/// exist. No order, pizza or link row from this call is persisted in that case.
pub async fn create_order(db: &DatabaseConnection, order: &models::Order) -> Result<models::Order> {
    let txn = db.begin().await?;

    let row = order::ActiveModel {
        order_status: Set(order.order_status.clone()),
        is_delivery: Set(order.is_delivery),
        employee_name: Set(order.employee_name.clone()),
        order_time: Set(order.order_time),
        cust_address: Set(order.cust_address.clone()),
        cust_email: Set(order.cust_email.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut pizzas = Vec::with_capacity(order.pizzas.len());
    for pizza in &order.pizzas {
        pizzas.push(insert_pizza(&txn, pizza, Some(row.id)).await?);
    }

    txn.commit().await?;

    info!(order_id = row.id, pizzas = pizzas.len(), "Created order");
    Ok(models::Order::from_parts(row, pizzas))
}

/// Orders cannot be changed once placed.
pub async fn update_order(_db: &DatabaseConnection, _order: &models::Order) -> Result<bool> {
    Err(Error::Unsupported {
        operation: "updateOrder",
    })
}

/// Orders cannot be removed once placed.
pub async fn delete_order(_db: &DatabaseConnection, _order_id: i64) -> Result<bool> {
    Err(Error::Unsupported {
        operation: "deleteOrder",
    })
}

async fn pizzas_for_order(db: &DatabaseConnection, order_id: i64) -> Result<Vec<models::Pizza>> {
    load_pizzas(db, Pizza::find().filter(pizza::Column::OrderId.eq(order_id))).await
}
