//! `/ing` handlers.

use crate::{
    api::{AppState, error::ApiResult},
    core::ingredient,
    errors::Error,
    models::Ingredient,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Lists every ingredient, ordered by name.
pub async fn list_ingredients(State(state): State<AppState>) -> ApiResult<Json<Vec<Ingredient>>> {
    Ok(Json(ingredient::get_all_ingredients(&state.db).await?))
}

/// Lists the ingredients in stock.
pub async fn list_available_ingredients(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Ingredient>>> {
    Ok(Json(ingredient::get_available_ingredients(&state.db).await?))
}

/// Replaces the ingredient at `ingredient_id` and echoes the input back with that id.
pub async fn update_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i64>,
    Json(mut input): Json<Ingredient>,
) -> ApiResult<Json<Ingredient>> {
    input.id = ingredient_id;
    if ingredient::update_ingredient(&state.db, &input).await? {
        Ok(Json(input))
    } else {
        Err(Error::IngredientNotFound { id: ingredient_id }.into())
    }
}
