//! Request and response records exchanged with API clients.
//!
//! These mirror the database rows but carry their related records inline: a pizza
//! carries its ingredients, an order and a board carry their pizzas. Field names on the
//! wire are camelCase; missing fields in request bodies take their defaults.

use crate::entities::{board, ingredient, order, pizza};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An ingredient as seen by clients.
///
/// When an ingredient is attached to a pizza in a request only `ingredientName`
/// matters; the name is resolved to a stored ingredient when the pizza is written.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub ingredient_name: String,
    pub tier: String,
    #[serde(rename = "available")]
    pub is_available: bool,
    pub ingredient_price: f64,
}

impl From<ingredient::Model> for Ingredient {
    fn from(row: ingredient::Model) -> Self {
        Self {
            id: row.id,
            ingredient_name: row.ingredient_name,
            tier: row.tier,
            is_available: row.available,
            ingredient_price: row.ingredient_price,
        }
    }
}

/// A pizza together with its ingredients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pizza {
    pub id: i64,
    pub pizza_size: String,
    pub dough: String,
    pub shape: String,
    pub sauce_type: String,
    pub description: String,
    #[serde(rename = "available")]
    pub is_available: bool,
    pub pizza_price: f64,
    pub is_specialty: bool,
    pub status: String,
    pub order_id: Option<i64>,
    pub board_id: Option<i64>,
    pub ingredients: Vec<Ingredient>,
}

impl Pizza {
    /// Builds a pizza from its row and the ingredient rows linked to it.
    ///
    /// Ingredients are ordered by name so that two reads of the same pizza compare equal.
    #[must_use]
    pub fn from_parts(row: pizza::Model, ingredients: Vec<ingredient::Model>) -> Self {
        let mut ingredients: Vec<Ingredient> = ingredients.into_iter().map(Into::into).collect();
        ingredients.sort_by(|a, b| a.ingredient_name.cmp(&b.ingredient_name));

        Self {
            id: row.id,
            pizza_size: row.pizza_size,
            dough: row.dough,
            shape: row.shape,
            sauce_type: row.sauce_type,
            description: row.description,
            is_available: row.is_available,
            pizza_price: row.pizza_price,
            is_specialty: row.is_specialty,
            status: row.status,
            order_id: row.order_id,
            board_id: row.board_id,
            ingredients,
        }
    }

    /// Names of the ingredients on this pizza, in list order.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.ingredient_name.as_str())
    }
}

/// Body of a pizza replacement.
///
/// Carries the same fields as [`Pizza`], except that `ingredients` is optional: when the
/// field is absent the pizza keeps its current ingredient links, when present (even
/// empty) the links are replaced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PizzaUpdate {
    pub id: i64,
    pub pizza_size: String,
    pub dough: String,
    pub shape: String,
    pub sauce_type: String,
    pub description: String,
    #[serde(rename = "available")]
    pub is_available: bool,
    pub pizza_price: f64,
    pub is_specialty: bool,
    pub status: String,
    pub order_id: Option<i64>,
    pub board_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl From<Pizza> for PizzaUpdate {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            pizza_size: pizza.pizza_size,
            dough: pizza.dough,
            shape: pizza.shape,
            sauce_type: pizza.sauce_type,
            description: pizza.description,
            is_available: pizza.is_available,
            pizza_price: pizza.pizza_price,
            is_specialty: pizza.is_specialty,
            status: pizza.status,
            order_id: pizza.order_id,
            board_id: pizza.board_id,
            ingredients: Some(pizza.ingredients),
        }
    }
}

/// A customer order together with its pizzas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_status: String,
    #[serde(rename = "delivery")]
    pub is_delivery: bool,
    pub employee_name: String,
    pub order_time: NaiveDateTime,
    pub cust_address: String,
    pub cust_email: String,
    pub pizzas: Vec<Pizza>,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            id: 0,
            order_status: String::new(),
            is_delivery: false,
            employee_name: String::new(),
            order_time: Local::now().naive_local(),
            cust_address: String::new(),
            cust_email: String::new(),
            pizzas: Vec::new(),
        }
    }
}

impl Order {
    /// Builds an order from its row and its already assembled pizzas.
    #[must_use]
    pub fn from_parts(row: order::Model, pizzas: Vec<Pizza>) -> Self {
        Self {
            id: row.id,
            order_status: row.order_status,
            is_delivery: row.is_delivery,
            employee_name: row.employee_name,
            order_time: row.order_time,
            cust_address: row.cust_address,
            cust_email: row.cust_email,
            pizzas,
        }
    }

    /// Sum of the pizza prices.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.pizzas.iter().map(|pizza| pizza.pizza_price).sum()
    }
}

/// A kanban board and the pizzas currently placed on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Board {
    pub id: i64,
    pub title: String,
    pub background_color: String,
    pub pizzas: Vec<Pizza>,
}

impl Board {
    #[must_use]
    pub fn from_parts(row: board::Model, pizzas: Vec<Pizza>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            background_color: row.background_color,
            pizzas,
        }
    }
}
