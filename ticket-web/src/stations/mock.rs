//! Mock station source for development and tests.
//!
//! Serves a fixed station list (optionally loaded from a JSON fixture file)
//! as if it came from the backend, and lets tests script individual
//! responses, failures included.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::backend::BackendError;

use super::client::{Station, StationApi};

/// Mock implementation of [`StationApi`].
#[derive(Clone, Default)]
pub struct MockStationApi {
    /// Steady-state station list, served when the script is empty.
    stations: Arc<RwLock<Vec<Station>>>,
    /// One-shot scripted responses, served front to back.
    script: Arc<Mutex<VecDeque<Result<Vec<Station>, BackendError>>>>,
}

impl MockStationApi {
    /// Mock that always answers with the given list.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        Self {
            stations: Arc::new(RwLock::new(stations)),
            script: Arc::default(),
        }
    }

    /// Load the station list from a JSON fixture file.
    ///
    /// The file holds an array of `{"id": …, "name": …}` records.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| BackendError::Api {
            status: 0,
            msg: Some(format!("failed to read {:?}: {}", path, e)),
        })?;

        let stations: Vec<Station> =
            serde_json::from_str(&json).map_err(|e| BackendError::Json {
                message: e.to_string(),
            })?;

        Ok(Self::with_stations(stations))
    }

    /// Replace the steady-state station list.
    pub async fn set_stations(&self, stations: Vec<Station>) {
        *self.stations.write().await = stations;
    }

    /// Queue a one-shot successful response ahead of the steady-state list.
    pub async fn enqueue_ok(&self, stations: Vec<Station>) {
        self.script.lock().await.push_back(Ok(stations));
    }

    /// Queue a one-shot backend failure.
    pub async fn enqueue_err(&self, status: u16, msg: Option<&str>) {
        self.script.lock().await.push_back(Err(BackendError::Api {
            status,
            msg: msg.map(str::to_owned),
        }));
    }
}

impl StationApi for MockStationApi {
    async fn list_stations(&self) -> Result<Vec<Station>, BackendError> {
        if let Some(scripted) = self.script.lock().await.pop_front() {
            return scripted;
        }
        Ok(self.stations.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: i64, name: &str) -> Station {
        Station {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn scripted_responses_served_in_order_then_steady_state() {
        let mock = MockStationApi::with_stations(vec![station(9, "steady")]);
        mock.enqueue_ok(vec![station(1, "first")]).await;
        mock.enqueue_err(503, Some("down")).await;

        assert_eq!(
            mock.list_stations().await.unwrap(),
            vec![station(1, "first")]
        );
        let err = mock.list_stations().await.unwrap_err();
        assert_eq!(err.user_message(), Some("down"));
        assert_eq!(
            mock.list_stations().await.unwrap(),
            vec![station(9, "steady")]
        );
    }
}
