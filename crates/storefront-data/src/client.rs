//! HTTP client for the storefront API.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::FetchError;
use crate::timeout::TimeoutConfig;

/// HTTP client bound to the storefront API's base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>, timeout: TimeoutConfig) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET `path` with `query` as the query string and decode a JSON body.
    pub async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, FetchError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(FetchError::http(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// POST `body` as JSON to `path`, expecting any 2xx status.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), FetchError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::http(status.as_u16(), &text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_resolution() {
        let client = FetchClient::new("http://shop.local/", TimeoutConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://shop.local");
        assert_eq!(client.url("/api/search"), "http://shop.local/api/search");
        assert_eq!(client.url("api/rate"), "http://shop.local/api/rate");
        assert_eq!(client.url("https://other/x"), "https://other/x");
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = FetchClient::new("ftp://shop.local", TimeoutConfig::default()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
