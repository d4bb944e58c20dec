//! `/orders` handlers.
//!
//! Creating an order sends the customer a confirmation once the order is committed.
//! The response never waits for, or depends on, that message.

use crate::{
    api::{AppState, error::ApiResult},
    core::order,
    errors::Error,
    models::Order,
    notify::dispatch_order_confirmation,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

/// Lists every order with its pizzas.
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(order::get_all_orders(&state.db).await?))
}

/// Fetches one order after the simulated delay; 404 if missing.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> ApiResult<Json<Order>> {
    state.latency.pause().await;
    order::get_order_by_id(&state.db, order_id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::OrderNotFound { id: order_id }.into())
}

/// Creates an order with its pizzas, then queues the confirmation; 201.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<Order>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let created = order::create_order(&state.db, &input).await?;
    dispatch_order_confirmation(Arc::clone(&state.notifier), created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

/// Always 501: placed orders are not changed.
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(mut input): Json<Order>,
) -> ApiResult<Json<Order>> {
    input.id = order_id;
    order::update_order(&state.db, &input).await?;
    Ok(Json(input))
}

/// Always 501: placed orders are not removed.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> ApiResult<StatusCode> {
    order::delete_order(&state.db, order_id).await?;
    Ok(StatusCode::OK)
}
