//! HTTP API - axum router, handlers and shared request state.
//!
//! The handlers are thin: they extract the request, call into [`crate::core`] and map
//! the outcome to a status code. Errors become JSON bodies through [`error::ApiError`].

pub mod error;
pub mod handlers;
pub mod routes;

use crate::notify::Notifier;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

pub use routes::create_router;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for every query.
    pub db: DatabaseConnection,
    /// Pause before delayed reads.
    pub latency: SimulatedLatency,
    /// Where order confirmations go.
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Bundles the handler dependencies.
    #[must_use]
    pub fn new(db: DatabaseConnection, latency: SimulatedLatency, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db,
            latency,
            notifier,
        }
    }
}

/// Artificial delay applied before single-entity reads and the board list.
///
/// A zero duration turns the pause off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// Wraps `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self(delay)
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(self) -> Duration {
        self.0
    }

    /// Sleeps for the configured delay without blocking other requests.
    pub async fn pause(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
