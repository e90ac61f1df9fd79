//! HEAD request probing
//!
//! A [`Prober`] turns one URL into one [`ProbeResult`]. The HTTP implementation
//! never reads a response body and never retries.

use crate::{Config, InspectorError, ProbeError};
use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Data extracted from one successful HEAD exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status_code: u16,
    /// As advertised by the server; `-1` when absent or unparsable
    pub content_length: i64,
    /// Header value up to the first `;`, trimmed; empty when absent
    pub content_type: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError>;
}

/// Issues HEAD requests through a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(config: &Config) -> Result<Self, InspectorError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| InspectorError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| ProbeError::Transport(format!("invalid URL: {e}")))?;

        debug!("HEAD {}", parsed);
        let request = self.client.head(parsed).send();

        match timeout(self.timeout, request).await {
            Ok(Ok(response)) => Ok(extract_result(&response)),
            Ok(Err(e)) => Err(ProbeError::from_reqwest(e, self.timeout)),
            Err(_) => Err(ProbeError::Timeout(self.timeout)),
        }
    }
}

fn extract_result(response: &Response) -> ProbeResult {
    let headers = response.headers();

    let content_length = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(-1);

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(media_type)
        .unwrap_or_default();

    ProbeResult {
        status_code: response.status().as_u16(),
        content_length,
        content_type,
    }
}

/// Drop parameters such as `charset` from a Content-Type value.
pub fn media_type(header: &str) -> String {
    header.split(';').next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("text/html; charset=UTF-8"), "text/html");
        assert_eq!(media_type("  application/zip  "), "application/zip");
        assert_eq!(media_type("text/plain;charset=utf-8;q=1"), "text/plain");
        assert_eq!(media_type(""), "");
    }

    #[test]
    fn test_http_prober_builds_with_insecure_tls() {
        let config = Config {
            insecure: true,
            ..Default::default()
        };
        assert!(HttpProber::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_malformed_url_is_transport_error() {
        let prober = HttpProber::new(&Config::default()).unwrap();
        let err = prober.probe("not a url").await.unwrap_err();
        assert!(matches!(err, ProbeError::Transport(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nobody is listening on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let prober = HttpProber::new(&Config::default()).unwrap();
        let err = prober
            .probe(&format!("http://127.0.0.1:{port}/"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Transport(_)));
    }
}
