//! `/pizzas` handlers.

use crate::{
    api::{AppState, error::ApiResult},
    core::pizza,
    errors::Error,
    models::{Pizza, PizzaUpdate},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Lists every pizza with its ingredients.
pub async fn list_pizzas(State(state): State<AppState>) -> ApiResult<Json<Vec<Pizza>>> {
    Ok(Json(pizza::get_all_pizzas(&state.db).await?))
}

/// Lists specialty pizzas.
pub async fn list_specialty_pizzas(State(state): State<AppState>) -> ApiResult<Json<Vec<Pizza>>> {
    Ok(Json(pizza::get_specialty_pizzas(&state.db).await?))
}

/// Fetches one pizza after the simulated delay; 404 if missing.
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(pizza_id): Path<i64>,
) -> ApiResult<Json<Pizza>> {
    state.latency.pause().await;
    pizza::get_pizza_by_id(&state.db, pizza_id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::PizzaNotFound { id: pizza_id }.into())
}

/// Creates a pizza; 201 with the stored pizza.
pub async fn create_pizza(
    State(state): State<AppState>,
    Json(input): Json<Pizza>,
) -> ApiResult<(StatusCode, Json<Pizza>)> {
    let created = pizza::create_pizza(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces the pizza at `pizza_id` and echoes the input back with that id.
///
/// Leaving `ingredients` out of the body keeps the pizza's current ingredients.
pub async fn update_pizza(
    State(state): State<AppState>,
    Path(pizza_id): Path<i64>,
    Json(mut input): Json<PizzaUpdate>,
) -> ApiResult<Json<PizzaUpdate>> {
    input.id = pizza_id;
    if pizza::update_pizza(&state.db, &input).await? {
        Ok(Json(input))
    } else {
        Err(Error::PizzaNotFound { id: pizza_id }.into())
    }
}

/// Deletes a pizza; 200 with an empty body, 404 if missing.
pub async fn delete_pizza(
    State(state): State<AppState>,
    Path(pizza_id): Path<i64>,
) -> ApiResult<StatusCode> {
    if pizza::delete_pizza(&state.db, pizza_id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(Error::PizzaNotFound { id: pizza_id }.into())
    }
}
