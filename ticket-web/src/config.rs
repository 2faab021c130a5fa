//! Application configuration.
//!
//! Everything comes from the environment with defaults that work in
//! development, so the binary runs with no flags.

use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the ticketing backend.
    pub backend_base_url: String,

    /// Address the web front end listens on.
    pub listen_addr: SocketAddr,

    /// Locale tag rendered into the page shell.
    pub locale: String,

    /// Directory of static assets served under `/static`.
    pub static_dir: String,

    /// Backend request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Interval between background catalog refreshes, in seconds.
    pub refresh_interval_secs: u64,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Unset variables fall back to defaults; values that don't parse are
    /// warned about and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TICKET_BACKEND_URL") {
            config.backend_base_url = url;
        }
        if let Ok(addr) = std::env::var("TICKET_LISTEN_ADDR") {
            match addr.parse() {
                Ok(addr) => config.listen_addr = addr,
                Err(e) => eprintln!("Warning: ignoring invalid TICKET_LISTEN_ADDR {addr:?}: {e}"),
            }
        }
        if let Ok(locale) = std::env::var("TICKET_LOCALE") {
            config.locale = locale;
        }
        if let Ok(dir) = std::env::var("TICKET_STATIC_DIR") {
            config.static_dir = dir;
        }
        if let Ok(secs) = std::env::var("TICKET_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(e) => eprintln!("Warning: ignoring invalid TICKET_TIMEOUT_SECS {secs:?}: {e}"),
            }
        }
        if let Ok(secs) = std::env::var("TICKET_REFRESH_SECS") {
            match secs.parse() {
                Ok(secs) => config.refresh_interval_secs = secs,
                Err(e) => eprintln!("Warning: ignoring invalid TICKET_REFRESH_SECS {secs:?}: {e}"),
            }
        }

        config
    }

    /// Returns the refresh interval as a Duration.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_base_url: "http://127.0.0.1:8080".to_string(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            locale: "zh-cn".to_string(),
            static_dir: "static".to_string(),
            request_timeout_secs: 30,
            refresh_interval_secs: 24 * 60 * 60,
        }
    }
}
