//! Ingredient data access.
//!
//! Ingredients are listed and edited by employees; pizzas link to them by name. New
//! ingredients only enter the store through menu seeding.

use crate::{
    entities::{Ingredient, ingredient},
    errors::Result,
    models,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all ingredients, ordered alphabetically by name.
pub async fn get_all_ingredients(db: &DatabaseConnection) -> Result<Vec<models::Ingredient>> {
    Ingredient::find()
        .order_by_asc(ingredient::Column::IngredientName)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(Into::into).collect())
        .map_err(Into::into)
}

/// Retrieves the ingredients that are currently in stock, ordered by name.
pub async fn get_available_ingredients(
    db: &DatabaseConnection,
) -> Result<Vec<models::Ingredient>> {
    Ingredient::find()
        .filter(ingredient::Column::Available.eq(true))
        .order_by_asc(ingredient::Column::IngredientName)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(Into::into).collect())
        .map_err(Into::into)
}

/// Finds an ingredient by its unique name.
pub async fn get_ingredient_by_name<C>(db: &C, name: &str) -> Result<Option<ingredient::Model>>
where
    C: ConnectionTrait,
{
    Ingredient::find()
        .filter(ingredient::Column::IngredientName.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new ingredient.
///
/// # Errors
/// Returns `Error::Database` if the name is already taken.
pub async fn create_ingredient<C>(
    db: &C,
    name: &str,
    tier: &str,
    price: f64,
    available: bool,
) -> Result<ingredient::Model>
where
    C: ConnectionTrait,
{
    let ingredient = ingredient::ActiveModel {
        ingredient_name: Set(name.to_string()),
        tier: Set(tier.to_string()),
        available: Set(available),
        ingredient_price: Set(price),
        ..Default::default()
    };

    let result = ingredient.insert(db).await?;
    info!(ingredient_id = result.id, name, "Created ingredient");
    Ok(result)
}

/// Replaces every column of the ingredient with `ingredient.id`.
///
/// Returns false when no ingredient has that id.
///
/// # Errors
/// Returns `Error::Database` if the new name collides with another ingredient.
pub async fn update_ingredient(
    db: &DatabaseConnection,
    ingredient: &models::Ingredient,
) -> Result<bool> {
    let changes = ingredient::ActiveModel {
        ingredient_name: Set(ingredient.ingredient_name.clone()),
        tier: Set(ingredient.tier.clone()),
        available: Set(ingredient.is_available),
        ingredient_price: Set(ingredient.ingredient_price),
        ..Default::default()
    };

    let result = Ingredient::update_many()
        .set(changes)
        .filter(ingredient::Column::Id.eq(ingredient.id))
        .exec(db)
        .await?;

    let updated = result.rows_affected == 1;
    if updated {
        info!(ingredient_id = ingredient.id, "Updated ingredient");
    }
    Ok(updated)
}
