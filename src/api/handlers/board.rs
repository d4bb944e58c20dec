//! `/boards` handlers.

use crate::{
    api::{AppState, error::ApiResult},
    core::board,
    errors::Error,
    models::Board,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Lists every board after the simulated delay.
pub async fn list_boards(State(state): State<AppState>) -> ApiResult<Json<Vec<Board>>> {
    state.latency.pause().await;
    Ok(Json(board::get_all_boards(&state.db).await?))
}

/// Fetches one board after the simulated delay; 404 if missing.
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> ApiResult<Json<Board>> {
    state.latency.pause().await;
    board::get_board_by_id(&state.db, board_id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::BoardNotFound { id: board_id }.into())
}

/// Always 501: boards come from the menu file.
pub async fn create_board(
    State(state): State<AppState>,
    Json(input): Json<Board>,
) -> ApiResult<(StatusCode, Json<Board>)> {
    let created = board::create_board(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Always 501: boards come from the menu file.
pub async fn delete_board(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> ApiResult<StatusCode> {
    board::delete_board(&state.db, board_id).await?;
    Ok(StatusCode::OK)
}
