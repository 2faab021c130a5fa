//! Train-ticket web front end.
//!
//! Owns the station catalog fetched from the ticketing backend, derives the
//! id↔name lookup maps the rest of the UI works with, and serves both —
//! plus the notification feed raised on fetch failures — over HTTP.

pub mod backend;
pub mod config;
pub mod notify;
pub mod stations;
pub mod web;
