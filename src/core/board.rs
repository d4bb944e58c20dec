//! Board data access.
//!
//! Boards are read-only over the API: the set of boards comes from menu seeding, and the
//! pizzas on a board are whichever pizzas currently reference it.

use crate::{
    core::pizza::load_pizzas,
    entities::{Board, Pizza, board, pizza},
    errors::{Error, Result},
    models,
};
use sea_orm::{QueryOrder, prelude::*};
use tracing::debug;

/// Retrieves every board with the pizzas placed on it.
pub async fn get_all_boards(db: &DatabaseConnection) -> Result<Vec<models::Board>> {
    let rows = Board::find()
        .order_by_asc(board::Column::Id)
        .all(db)
        .await?;

    let mut boards = Vec::with_capacity(rows.len());
    for row in rows {
        let pizzas = pizzas_on_board(db, row.id).await?;
        boards.push(models::Board::from_parts(row, pizzas));
    }
    Ok(boards)
}

/// Finds a board by id, returning None if it does not exist.
pub async fn get_board_by_id(
    db: &DatabaseConnection,
    board_id: i64,
) -> Result<Option<models::Board>> {
    let Some(row) = Board::find_by_id(board_id).one(db).await? else {
        debug!(board_id, "Board not found");
        return Ok(None);
    };
    let pizzas = pizzas_on_board(db, row.id).await?;
    Ok(Some(models::Board::from_parts(row, pizzas)))
}

/// Boards are not created over the API.
pub async fn create_board(
    _db: &DatabaseConnection,
    _board: &models::Board,
) -> Result<models::Board> {
    Err(Error::Unsupported {
        operation: "createBoard",
    })
}

/// Boards are not deleted over the API.
pub async fn delete_board(_db: &DatabaseConnection, _board_id: i64) -> Result<bool> {
    Err(Error::Unsupported {
        operation: "deleteBoard",
    })
}

async fn pizzas_on_board(db: &DatabaseConnection, board_id: i64) -> Result<Vec<models::Pizza>> {
    load_pizzas(db, Pizza::find().filter(pizza::Column::BoardId.eq(board_id))).await
}
