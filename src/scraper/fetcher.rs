use crate::config::SiteConfig;
use crate::model::ScraperError;
use crate::scraper::PageFetcher;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Url;
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(site: &SiteConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );

        let mut builder = Client::builder()
            .user_agent(site.user_agent.as_str())
            .default_headers(headers);
        if let Some(timeout) = site.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}

/// Joins a site-relative path (or an absolute href) onto the base URL.
///
/// The result is the WHATWG serialization: non-ASCII and spaces in the path
/// and query come back percent-encoded, so links that differ only in encoding
/// compare equal.
pub fn absolute_url(base_url: &str, path: &str) -> Result<String, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidUrl {
        url: path.to_string(),
        reason,
    };
    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    let joined = base.join(path).map_err(|e| invalid(e.to_string()))?;
    Ok(joined.to_string())
}
