// src/client.rs

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::LeafletConfig;
use crate::error::ScraperError;

/// A single blocking GET that yields the raw body. Non-2xx is an error.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScraperError>;
}

/// Browser-like blocking client shared by the page fetch and every image download.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &LeafletConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .default_headers(browser_headers(config)?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!(%url, %status, "response received");
        if !status.is_success() {
            return Err(ScraperError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

// Accept-Encoding is left to reqwest so it can decode what it advertises.
fn browser_headers(config: &LeafletConfig) -> Result<HeaderMap, ScraperError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&config.accept_language)?);
    headers.insert(CONNECTION, HeaderValue::from_str(&config.connection)?);
    Ok(headers)
}
