//! Station catalog store and derived lookup maps.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::notify::Notifier;

use super::client::{Station, StationApi};

/// Title of the notification raised when a station fetch fails.
pub const STATION_FETCH_ERROR_TITLE: &str = "getStation错误";

/// One consistent view of the station catalog.
///
/// Both maps are exact projections of `raw_data`, rebuilt in full whenever
/// the raw list is replaced. When two stations share a name, the later
/// record wins in `name_to_id` (upstream does not guard against duplicate
/// names).
#[derive(Debug, Clone, PartialEq)]
pub struct StationSnapshot {
    /// Station records in the order the backend returned them
    pub raw_data: Vec<Station>,
    /// Station id → station name
    pub id_to_name: HashMap<i64, String>,
    /// Station name → station id
    pub name_to_id: HashMap<String, i64>,
}

impl StationSnapshot {
    /// Build a snapshot from a raw station list, deriving both maps in one pass.
    pub fn build(raw_data: Vec<Station>) -> Self {
        let mut id_to_name = HashMap::with_capacity(raw_data.len());
        let mut name_to_id = HashMap::with_capacity(raw_data.len());

        for station in &raw_data {
            id_to_name.insert(station.id, station.name.clone());
            name_to_id.insert(station.name.clone(), station.id);
        }

        Self {
            raw_data,
            id_to_name,
            name_to_id,
        }
    }

    /// The snapshot a store holds before the first successful fetch.
    pub fn placeholder() -> Self {
        Self::build(vec![Station {
            id: 0,
            name: String::new(),
        }])
    }
}

/// Snapshot plus the sequence token of the fetch that produced it.
#[derive(Debug)]
struct VersionedSnapshot {
    snapshot: StationSnapshot,
    applied_seq: u64,
}

/// Shared station catalog with id→name and name→id lookup.
///
/// Cheap to clone; all clones share the same state. Only a successful
/// [`fetch`](StationStore::fetch) mutates it — a failed fetch leaves the
/// previous snapshot untouched and raises a notification instead.
#[derive(Clone)]
pub struct StationStore<C> {
    inner: Arc<RwLock<VersionedSnapshot>>,
    next_seq: Arc<AtomicU64>,
    client: C,
    notifier: Notifier,
}

impl<C: StationApi> StationStore<C> {
    /// Create a store holding the placeholder snapshot.
    pub fn new(client: C, notifier: Notifier) -> Self {
        Self {
            inner: Arc::new(RwLock::new(VersionedSnapshot {
                snapshot: StationSnapshot::placeholder(),
                applied_seq: 0,
            })),
            next_seq: Arc::new(AtomicU64::new(0)),
            client,
            notifier,
        }
    }

    /// Refresh the catalog from the backend.
    ///
    /// On success the raw list and both lookup maps are replaced together.
    /// On failure nothing is replaced; the error is logged and surfaced as
    /// one notification titled [`STATION_FETCH_ERROR_TITLE`], carrying the
    /// backend's `msg` when the error body had one.
    ///
    /// Safe to call concurrently: each call takes a monotonic token at
    /// entry, and a response is applied only while no younger response has
    /// been applied yet. Whichever request started last wins.
    pub async fn fetch(&self) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;

        match self.client.list_stations().await {
            Ok(stations) => {
                let count = stations.len();
                if self.apply(seq, stations).await {
                    tracing::info!(count, "refreshed station catalog");
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "station fetch failed");
                self.notifier
                    .notify(
                        STATION_FETCH_ERROR_TITLE,
                        err.user_message().map(str::to_owned),
                    )
                    .await;
            }
        }
    }

    /// Install a fetched station list unless a younger fetch already did.
    ///
    /// Returns whether the list was applied.
    pub(crate) async fn apply(&self, seq: u64, stations: Vec<Station>) -> bool {
        let mut guard = self.inner.write().await;

        if seq <= guard.applied_seq {
            tracing::debug!(
                seq,
                applied = guard.applied_seq,
                "discarding stale station response"
            );
            return false;
        }

        guard.applied_seq = seq;
        guard.snapshot = StationSnapshot::build(stations);
        true
    }

    /// A consistent copy of the raw list plus both maps.
    pub async fn snapshot(&self) -> StationSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// The raw station list.
    pub async fn raw_data(&self) -> Vec<Station> {
        self.inner.read().await.snapshot.raw_data.clone()
    }

    /// Look up a station name by id.
    pub async fn name_of(&self, id: i64) -> Option<String> {
        self.inner.read().await.snapshot.id_to_name.get(&id).cloned()
    }

    /// Look up a station id by name.
    pub async fn id_of(&self, name: &str) -> Option<i64> {
        self.inner.read().await.snapshot.name_to_id.get(name).copied()
    }

    /// Number of stations in the catalog.
    pub async fn len(&self) -> usize {
        self.inner.read().await.snapshot.raw_data.len()
    }

    /// Check if the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.snapshot.raw_data.is_empty()
    }

    /// Case-insensitive substring search over station names.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Station> {
        let query = query.to_lowercase();
        let guard = self.inner.read().await;

        guard
            .snapshot
            .raw_data
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .take(limit)
            .cloned()
            .collect()
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

    #[test]
    fn build_derives_both_maps() {
        let snapshot = StationSnapshot::build(vec![
            station(1, "Beijing"),
            station(2, "Shanghai"),
        ]);

        assert_eq!(snapshot.id_to_name.len(), 2);
        assert_eq!(snapshot.id_to_name.get(&1), Some(&"Beijing".to_string()));
        assert_eq!(snapshot.id_to_name.get(&2), Some(&"Shanghai".to_string()));
        assert_eq!(snapshot.name_to_id.get("Beijing"), Some(&1));
        assert_eq!(snapshot.name_to_id.get("Shanghai"), Some(&2));
    }

    #[test]
    fn build_duplicate_name_last_wins() {
        let snapshot = StationSnapshot::build(vec![station(1, "A"), station(2, "A")]);

        assert_eq!(snapshot.name_to_id.get("A"), Some(&2));
        // Both ids still resolve to the shared name
        assert_eq!(snapshot.id_to_name.get(&1), Some(&"A".to_string()));
        assert_eq!(snapshot.id_to_name.get(&2), Some(&"A".to_string()));
    }

    #[test]
    fn placeholder_is_derived_too() {
        let snapshot = StationSnapshot::placeholder();

        assert_eq!(snapshot.raw_data, vec![station(0, "")]);
        assert_eq!(snapshot.id_to_name.get(&0), Some(&String::new()));
        assert_eq!(snapshot.name_to_id.get(""), Some(&0));
    }
}
