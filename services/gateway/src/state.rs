use crate::rate_limit::RateLimiter;
use marketplace::{ExchangeEngine, MemoryAccountStore, RelationshipManager};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryAccountStore>,
    pub social: Arc<RelationshipManager>,
    pub exchange: Arc<ExchangeEngine>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(MemoryAccountStore::new());
        Self {
            social: Arc::new(RelationshipManager::new(store.clone())),
            exchange: Arc::new(ExchangeEngine::new(store.clone())),
            rate_limiter: Arc::new(RateLimiter::new()),
            store,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
