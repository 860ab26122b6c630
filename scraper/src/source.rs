//! Where HTML comes from.

use reqwest::blocking::Client;
use tracing::debug;

use crate::{Error, Result};

/// A fetched page: final status code plus the body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub html: String,
}

impl Page {
    /// A 2xx response.
    pub fn ok(html: impl Into<String>) -> Self {
        Self {
            status: 200,
            html: html.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can answer a GET with a page.
///
/// Only transport failures are errors; a non-2xx answer is still a `Page`.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<Page>;
}

/// `PageSource` backed by a blocking reqwest client (the network session).
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn get(&self, url: &str) -> Result<Page> {
        let http_error = |source: reqwest::Error| Error::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(http_error)?;
        let status = response.status().as_u16();
        let html = response.text().map_err(http_error)?;

        debug!(url, status, bytes = html.len(), "fetched");
        Ok(Page { status, html })
    }
}
