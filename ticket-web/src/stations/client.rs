//! Station records and the data-source seam they arrive through.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendError};

/// Path of the station listing endpoint.
const STATION_LIST_PATH: &str = "/v1/station";

/// A station record: identifier plus human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
}

/// Source of station data.
///
/// Implemented by the real backend client and by
/// [`MockStationApi`](crate::stations::MockStationApi), so the store can be
/// exercised without a running backend.
pub trait StationApi: Clone + Send + Sync + 'static {
    /// Fetch the full station list.
    fn list_stations(&self) -> impl Future<Output = Result<Vec<Station>, BackendError>> + Send;
}

impl StationApi for BackendClient {
    async fn list_stations(&self) -> Result<Vec<Station>, BackendError> {
        self.get_json(STATION_LIST_PATH).await
    }
}
