// HTTP fetch adapter - Blocking downloads for the asset bootstrap

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

use crate::error::{ToolsError, ToolsResult};
use crate::ports::Fetcher;

const USER_AGENT: &str = "curl";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Fetcher backed by a blocking reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client sending `Accept: */*` and a curl user agent
    pub fn new() -> ToolsResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> ToolsResult<Vec<u8>> {
        debug!(url, "GET");
        let failure = |e: reqwest::Error| ToolsError::Download {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(failure)?;
        let body = response.bytes().map_err(failure)?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_not_download_errors() {
        let err = Client::new().get("not a url").build().unwrap_err();
        let err = ToolsError::from(err);

        assert!(matches!(err, ToolsError::HttpClient(_)));
        assert!(err.to_string().starts_with("Failed to build HTTP client"));
    }

    #[test]
    fn test_fetch_failure_names_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("not a url").unwrap_err();

        match err {
            ToolsError::Download { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
