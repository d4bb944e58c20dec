//! Unified error types and result handling.

use thiserror::Error;

/// Every failure the crate reports.
#[derive(Debug, Error)]
pub enum Error {
    /// An environment variable or the menu file could not be used.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong.
        message: String,
    },

    /// The store rejected a query, including constraint violations.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure, for example while preparing the database directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No pizza has the requested id.
    #[error("No pizza found with id {id}")]
    PizzaNotFound {
        /// The requested id.
        id: i64,
    },

    /// No order has the requested id.
    #[error("No order found with id {id}")]
    OrderNotFound {
        /// The requested id.
        id: i64,
    },

    /// No board has the requested id.
    #[error("No board found with id {id}")]
    BoardNotFound {
        /// The requested id.
        id: i64,
    },

    /// No ingredient has the requested id.
    #[error("No ingredient found with id {id}")]
    IngredientNotFound {
        /// The requested id.
        id: i64,
    },

    /// A pizza referenced an ingredient name that is not stocked.
    #[error("Unknown ingredient: {name}")]
    UnknownIngredient {
        /// The name that did not resolve.
        name: String,
    },

    /// The shop does not offer this operation.
    #[error("Operation not supported: {operation}")]
    Unsupported {
        /// Name of the refused operation.
        operation: &'static str,
    },
}

impl Error {
    /// Returns true for the variants that mean "the requested id does not exist".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PizzaNotFound { .. }
                | Self::OrderNotFound { .. }
                | Self::BoardNotFound { .. }
                | Self::IngredientNotFound { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
