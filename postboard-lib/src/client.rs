//! Main PostboardClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::Method;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// The client for a posts/users REST API.
///
/// Cheap to clone (uses `Arc` internally), so a caller can hold one instance
/// per form and share it across tasks.
///
/// # Example
///
/// ```ignore
/// use postboard_lib::PostboardClient;
///
/// let client = PostboardClient::builder()
///     .url("https://jsonplaceholder.typicode.com")
///     .build()?;
///
/// let posts = client.list_posts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostboardClient {
    inner: Arc<PostboardClientInner>,
}

#[derive(Debug)]
struct PostboardClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl PostboardClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> PostboardClientBuilder<Missing> {
        PostboardClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Sends one request and performs the error conversion exactly once.
    ///
    /// A send failure (the request never produced an HTTP response) becomes
    /// [`ApiError::Network`]; a non-success status is classified by
    /// [`ApiError::from_status`] with the response body as the message.
    /// Nothing above this point re-classifies.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self.inner.http_client.request(method, &url);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            debug!("request to {} failed with HTTP {}", url, code);
            Err(Error::Api(ApiError::from_status(code, message)))
        }
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`PostboardClient`].
///
/// Uses the typestate pattern so the required base URL must be set before
/// `build` becomes available.
pub struct PostboardClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl PostboardClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the base URL of the API.
    pub fn url(self, url: impl Into<String>) -> PostboardClientBuilder<Set<String>> {
        PostboardClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for PostboardClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> PostboardClientBuilder<U> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl PostboardClientBuilder<Set<String>> {
    /// Builds the [`PostboardClient`].
    ///
    /// Fails with [`ApiError::InvalidUrl`] when the base URL does not parse.
    pub fn build(self) -> Result<PostboardClient, Error> {
        let base_url = Url::parse(&self.url.0)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.url.0, e)))?;

        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        Ok(PostboardClient {
            inner: Arc::new(PostboardClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = PostboardClient::builder().url("not a url").build();
        match result {
            Err(Error::Api(ApiError::InvalidUrl(msg))) => {
                assert!(msg.contains("not a url"));
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_base_url_round_trip() {
        let client = PostboardClient::builder()
            .url("http://localhost:3000")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/");
        assert_eq!(client.endpoint("/posts/1"), "http://localhost:3000/posts/1");
    }
}
