//! Shared application state.

use std::sync::Arc;

use catalog::Catalog;
use resolver::Recommender;
use store::{ScoreStore, WatchlistStore};

/// State handed to every handler.
///
/// All data sources are injected as trait objects, so the same router runs
/// against Postgres + the live catalog in production and against in-memory
/// backends in tests.
#[derive(Clone)]
pub struct AppState {
    pub watchlist: Arc<dyn WatchlistStore>,
    pub catalog: Arc<dyn Catalog>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(
        watchlist: Arc<dyn WatchlistStore>,
        scores: Arc<dyn ScoreStore>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let recommender = Arc::new(Recommender::new(
            watchlist.clone(),
            scores,
            catalog.clone(),
        ));
        Self {
            watchlist,
            catalog,
            recommender,
        }
    }
}
