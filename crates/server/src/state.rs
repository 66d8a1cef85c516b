use database::clock::Clock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared state for all handlers. Cheap to clone; the clock is injected
/// here so registration-window logic can be driven by a fixed clock in
/// tests and simulations.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: Arc<dyn Clock>,
}
