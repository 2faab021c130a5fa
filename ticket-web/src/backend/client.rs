//! Ticketing backend HTTP client.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::BackendError;

/// Default base URL for the ticketing backend.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Success envelope wrapping every backend response body.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Body shape of non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
}

/// Pull the `msg` field out of an error response body, if it parses.
fn extract_error_msg(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg)
}

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the ticketing backend
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the ticketing backend API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Issue a GET request and decode the envelope, returning the inner `data`.
    ///
    /// Non-2xx responses become [`BackendError::Api`], carrying the `msg`
    /// field of the error body when the body had one.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                msg: extract_error_msg(&body),
            });
        }

        let body = response.text().await?;

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| BackendError::Json {
                message: e.to_string(),
            })?;

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = BackendConfig::new("http://localhost:9090").with_timeout_secs(5);
        assert_eq!(config.base_url, "http://localhost:9090");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn extract_error_msg_present() {
        assert_eq!(
            extract_error_msg(r#"{"msg":"station service down"}"#),
            Some("station service down".to_string())
        );
    }

    #[test]
    fn extract_error_msg_absent_or_malformed() {
        assert_eq!(extract_error_msg(r#"{"code":500}"#), None);
        assert_eq!(extract_error_msg(r#"{"msg":null}"#), None);
        assert_eq!(extract_error_msg("<html>504</html>"), None);
        assert_eq!(extract_error_msg(""), None);
    }

    #[test]
    fn envelope_unwraps_data() {
        let envelope: Envelope<Vec<i64>> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);

        // Extra fields alongside `data` are ignored
        let envelope: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"code":200,"msg":"success","data":[]}"#).unwrap();
        assert!(envelope.data.is_empty());
    }
}
