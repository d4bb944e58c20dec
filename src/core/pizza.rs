//! Pizza data access - Handles all pizza-related operations.
//!
//! Pizzas are stored one row per pizza, with their ingredients linked through the
//! `pizza_ingredients` join table. Ingredients are always referenced by name on write and
//! resolved to ids inside the same database transaction as the pizza insert, so an
//! unknown name aborts the whole write.

use crate::{
    core::ingredient::get_ingredient_by_name,
    entities::{Ingredient, Pizza, PizzaIngredient, ingredient, pizza, pizza_ingredient},
    errors::{Error, Result},
    models,
};
use sea_orm::{QueryOrder, QuerySelect, Select, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Retrieves every pizza with its ingredients.
pub async fn get_all_pizzas(db: &DatabaseConnection) -> Result<Vec<models::Pizza>> {
    load_pizzas(db, Pizza::find()).await
}

/// Retrieves the pizzas flagged as specialty pizzas.
pub async fn get_specialty_pizzas(db: &DatabaseConnection) -> Result<Vec<models::Pizza>> {
    load_pizzas(db, Pizza::find().filter(pizza::Column::IsSpecialty.eq(true))).await
}

/// Finds a pizza by id, returning None if it does not exist.
pub async fn get_pizza_by_id(
    db: &DatabaseConnection,
    pizza_id: i64,
) -> Result<Option<models::Pizza>> {
    let Some(row) = Pizza::find_by_id(pizza_id).one(db).await? else {
        debug!(pizza_id, "Pizza not found");
        return Ok(None);
    };
    let ingredients = ingredients_for(db, &row).await?;
    Ok(Some(models::Pizza::from_parts(row, ingredients)))
}

/// Retrieves the ingredients linked to a pizza through the join table.
///
/// An unknown pizza id yields an empty list.
pub async fn get_ingredients_for_pizza(
    db: &DatabaseConnection,
    pizza_id: i64,
) -> Result<Vec<models::Ingredient>> {
    Ingredient::find()
        .inner_join(PizzaIngredient)
        .filter(pizza_ingredient::Column::PizzaId.eq(pizza_id))
        .order_by_asc(ingredient::Column::IngredientName)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(Into::into).collect())
        .map_err(Into::into)
}

/// Creates a pizza and links its ingredients by name.
///
/// The order and board references are taken from the input as given; catalog pizzas
/// carry no order. The returned pizza has its new id and the resolved ingredients.
///
/// # Errors
/// Returns `Error::UnknownIngredient` if any ingredient name does not exist, in which case
/// nothing is persisted. Foreign key violations surface as `Error::Database`.
pub async fn create_pizza(db: &DatabaseConnection, pizza: &models::Pizza) -> Result<models::Pizza> {
    let txn = db.begin().await?;
    let created = insert_pizza(&txn, pizza, pizza.order_id).await?;
    txn.commit().await?;

    info!(
        pizza_id = created.id,
        ingredients = created.ingredients.len(),
        "Created pizza"
    );
    Ok(created)
}

/// Replaces every column of the pizza with `pizza.id` except its order reference.
///
/// The ingredient links are replaced with `pizza.ingredients` when that list is present;
/// when it is `None` the current links are kept.
///
/// Returns false when no pizza has that id; the store is left unchanged in that case.
///
/// # Errors
/// Returns `Error::UnknownIngredient` if an ingredient name does not exist; the update is
/// rolled back.
pub async fn update_pizza(db: &DatabaseConnection, pizza: &models::PizzaUpdate) -> Result<bool> {
    let txn = db.begin().await?;

    let changes = pizza::ActiveModel {
        pizza_size: Set(pizza.pizza_size.clone()),
        dough: Set(pizza.dough.clone()),
        shape: Set(pizza.shape.clone()),
        sauce_type: Set(pizza.sauce_type.clone()),
        description: Set(pizza.description.clone()),
        is_available: Set(pizza.is_available),
        pizza_price: Set(pizza.pizza_price),
        is_specialty: Set(pizza.is_specialty),
        status: Set(pizza.status.clone()),
        board_id: Set(pizza.board_id),
        ..Default::default()
    };

    let result = Pizza::update_many()
        .set(changes)
        .filter(pizza::Column::Id.eq(pizza.id))
        .exec(&txn)
        .await?;

    if result.rows_affected != 1 {
        debug!(pizza_id = pizza.id, "No pizza to update");
        return Ok(false);
    }

    if let Some(ingredients) = &pizza.ingredients {
        PizzaIngredient::delete_many()
            .filter(pizza_ingredient::Column::PizzaId.eq(pizza.id))
            .exec(&txn)
            .await?;
        link_ingredients(&txn, pizza.id, ingredients).await?;
    }

    txn.commit().await?;
    info!(
        pizza_id = pizza.id,
        relinked = pizza.ingredients.is_some(),
        "Updated pizza"
    );
    Ok(true)
}

/// Deletes a pizza and its ingredient links.
///
/// Returns false when no pizza has that id.
pub async fn delete_pizza(db: &DatabaseConnection, pizza_id: i64) -> Result<bool> {
    let txn = db.begin().await?;

    PizzaIngredient::delete_many()
        .filter(pizza_ingredient::Column::PizzaId.eq(pizza_id))
        .exec(&txn)
        .await?;
    let result = Pizza::delete_by_id(pizza_id).exec(&txn).await?;

    if result.rows_affected != 1 {
        debug!(pizza_id, "No pizza to delete");
        return Ok(false);
    }

    txn.commit().await?;
    info!(pizza_id, "Deleted pizza");
    Ok(true)
}

/// Loads the pizzas matched by `query`, each with its ingredients.
pub(crate) async fn load_pizzas<C>(db: &C, query: Select<Pizza>) -> Result<Vec<models::Pizza>>
where
    C: ConnectionTrait,
{
    let rows = query.order_by_asc(pizza::Column::Id).all(db).await?;

    let mut pizzas = Vec::with_capacity(rows.len());
    for row in rows {
        let ingredients = ingredients_for(db, &row).await?;
        pizzas.push(models::Pizza::from_parts(row, ingredients));
    }
    Ok(pizzas)
}

/// Inserts one pizza row referencing `order_id` and links its ingredients.
///
/// Callers run this inside a transaction so a failed ingredient lookup leaves no row behind.
pub(crate) async fn insert_pizza<C>(
    db: &C,
    pizza: &models::Pizza,
    order_id: Option<i64>,
) -> Result<models::Pizza>
where
    C: ConnectionTrait,
{
    let row = pizza::ActiveModel {
        pizza_size: Set(pizza.pizza_size.clone()),
        dough: Set(pizza.dough.clone()),
        shape: Set(pizza.shape.clone()),
        sauce_type: Set(pizza.sauce_type.clone()),
        description: Set(pizza.description.clone()),
        is_available: Set(pizza.is_available),
        pizza_price: Set(pizza.pizza_price),
        is_specialty: Set(pizza.is_specialty),
        status: Set(pizza.status.clone()),
        order_id: Set(order_id),
        board_id: Set(pizza.board_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let ingredients = link_ingredients(db, row.id, &pizza.ingredients).await?;
    Ok(models::Pizza::from_parts(row, ingredients))
}

/// Resolves each requested ingredient by name and inserts one join row per distinct
/// ingredient. Returns the resolved ingredient rows.
async fn link_ingredients<C>(
    db: &C,
    pizza_id: i64,
    requested: &[models::Ingredient],
) -> Result<Vec<ingredient::Model>>
where
    C: ConnectionTrait,
{
    let mut linked: Vec<ingredient::Model> = Vec::with_capacity(requested.len());

    for wanted in requested {
        let found = get_ingredient_by_name(db, &wanted.ingredient_name)
            .await?
            .ok_or_else(|| Error::UnknownIngredient {
                name: wanted.ingredient_name.clone(),
            })?;

        // (pizza_id, ingredient_id) is the primary key
        if linked.iter().any(|existing| existing.id == found.id) {
            continue;
        }

        PizzaIngredient::insert(pizza_ingredient::ActiveModel {
            pizza_id: Set(pizza_id),
            ingredient_id: Set(found.id),
        })
        .exec_without_returning(db)
        .await?;

        linked.push(found);
    }

    Ok(linked)
}

async fn ingredients_for<C>(db: &C, row: &pizza::Model) -> Result<Vec<ingredient::Model>>
where
    C: ConnectionTrait,
{
    row.find_related(Ingredient)
        .order_by_asc(ingredient::Column::IngredientName)
        .all(db)
        .await
        .map_err(Into::into)
}
