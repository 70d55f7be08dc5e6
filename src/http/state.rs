//! Application state for the HTTP server.

use std::sync::Arc;
use crate::registry::UnitTable;

/// Shared application state passed to all handlers.
///
/// The unit table is built once at startup and never mutated afterwards, so
/// handlers share it behind an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Immutable unit table backing all conversions
    pub table: Arc<UnitTable>,
}

impl AppState {
    /// Create a new application state with the given unit table.
    pub fn new(table: UnitTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
