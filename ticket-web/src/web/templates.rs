//! Askama templates for the web frontend.

use askama::Template;

use crate::stations::Station;

/// Index page: the application shell plus the current station catalog.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Locale tag for the page shell (`lang` attribute)
    pub locale: String,
    pub stations: Vec<Station>,
}
