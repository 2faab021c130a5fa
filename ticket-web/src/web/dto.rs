//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::notify::Notification;
use crate::stations::Station;

/// Station list response.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<Station>,
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Substring to match against station names (case-insensitive)
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// Request to resolve a single station by id or by name.
#[derive(Debug, Deserialize)]
pub struct StationLookupRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// A resolved station.
#[derive(Debug, Serialize)]
pub struct StationLookupResponse {
    pub id: i64,
    pub name: String,
}

/// Result of an on-demand catalog refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Stations in the catalog after the refresh attempt
    pub stations: usize,
}

/// Drained notifications, oldest first.
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
