//! Application state for the web layer.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::stations::{StationApi, StationStore};

/// Shared application state.
///
/// Owned by `main` and injected into every handler via axum state; nothing
/// is process-global. Generic over the station source so handlers run
/// against the mock in tests.
#[derive(Clone)]
pub struct AppState<C: StationApi> {
    /// Station catalog and lookup maps
    pub stations: StationStore<C>,

    /// Pending user notifications
    pub notifier: Notifier,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl<C: StationApi> AppState<C> {
    /// Create a new app state.
    pub fn new(stations: StationStore<C>, notifier: Notifier, config: AppConfig) -> Self {
        Self {
            stations,
            notifier,
            config: Arc::new(config),
        }
    }
}
