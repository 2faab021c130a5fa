//! Station catalog: backend fetch and id↔name lookup maps.
//!
//! The catalog is fetched from the ticketing backend at startup, on demand,
//! and on a periodic refresh; failed fetches leave the previous data in
//! place and surface a user notification.

mod client;
mod mock;
mod store;


pub use client::{Station, StationApi};
pub use mock::MockStationApi;
pub use store::{STATION_FETCH_ERROR_TITLE, StationSnapshot, StationStore};
