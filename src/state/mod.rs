use std::sync::Arc;

use crate::config::Config;
use crate::db::{memory::MemoryStore, Datastore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Datastore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn Datastore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Fresh in-memory state, used by tests.
    pub fn in_memory(session_secret: &str) -> Self {
        Self::new(Arc::new(MemoryStore::new()), Config::in_memory(session_secret))
    }
}
