//! Shared application state for all routes. Built once at startup and injected into the router.

use crate::password::{PasswordHasher, PlaceholderHasher};
use crate::store::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    /// State with the placeholder password hasher.
    pub fn new(db: Database) -> Self {
        AppState {
            db,
            hasher: Arc::new(PlaceholderHasher),
        }
    }

    pub fn with_hasher(db: Database, hasher: Arc<dyn PasswordHasher>) -> Self {
        AppState { db, hasher }
    }
}
