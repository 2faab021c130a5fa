//! Web layer for the ticketing front end.
//!
//! Serves the station catalog, the notification feed, and the index page.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
