//! Startup seeding of ingredients and boards from the menu file.

use crate::{
    config::menu::MenuConfig,
    core::ingredient::{create_ingredient, get_ingredient_by_name},
    entities::{Board, board},
    errors::Result,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// What a seeding run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub ingredients_added: usize,
    pub boards_added: usize,
}

/// Inserts the menu's ingredients and boards that are not in the store yet.
///
/// Ingredients are matched by name and boards by title; existing rows are left as they
/// are, so running this on every start is safe. Everything is written in one transaction.
pub async fn seed_menu(db: &DatabaseConnection, menu: &MenuConfig) -> Result<SeedSummary> {
    info!(
        "Seeding menu. Found {} ingredients and {} boards in config.",
        menu.ingredients.len(),
        menu.boards.len()
    );
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    for cfg in &menu.ingredients {
        if get_ingredient_by_name(&txn, &cfg.name).await?.is_some() {
            debug!("Ingredient '{}' already exists. Skipping.", cfg.name);
            continue;
        }
        create_ingredient(&txn, &cfg.name, &cfg.tier, cfg.price, cfg.available).await?;
        summary.ingredients_added += 1;
    }

    for cfg in &menu.boards {
        let existing = Board::find()
            .filter(board::Column::Title.eq(cfg.title.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            debug!("Board '{}' already exists. Skipping.", cfg.title);
            continue;
        }
        insert_board(&txn, &cfg.title, &cfg.background_color).await?;
        summary.boards_added += 1;
    }

    txn.commit().await?;
    info!(
        ingredients_added = summary.ingredients_added,
        boards_added = summary.boards_added,
        "Finished seeding menu."
    );
    Ok(summary)
}

pub(crate) async fn insert_board<C>(db: &C, title: &str, background_color: &str) -> Result<board::Model>
where
    C: ConnectionTrait,
{
    board::ActiveModel {
        title: Set(title.to_string()),
        background_color: Set(background_color.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
