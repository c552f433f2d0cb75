//! A quick, built-in way to grab the map pages from the live FAQ.
//!
//! This module can be disabled by building this crate without default features.

use crate::config::{Config, MapSpec};
use crate::driver::PageSource;
use crate::error::*;
use reqwest::blocking::Client;

/// A quick, built-in way to grab the map pages from the live FAQ.
pub struct Downloader {
    client: Client,
    root_url: String
}

impl Downloader {
    /// Create a HTTP client that identifies itself with the configured user
    /// agent.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, &config.root_url))
    }

    /// Provide your own client for use by this struct.
    ///
    /// This means you can configure the client as you wish while still doing
    /// less work than re-implementing the functionality provided by this struct.
    #[inline]
    pub fn with_client<S: Into<String>>(client: Client, root_url: S) -> Self {
        Self {
            client,
            root_url: root_url.into()
        }
    }

    /// Full URL of a map's page.
    #[inline]
    pub fn page_url(&self, map: &MapSpec) -> String {
        format!("{}{}", self.root_url, map.path)
    }

    /// Helper to get the HTML of the given URL.
    fn get_string(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();

        if !status.is_success() {
            bail!(ErrorKind::NonSuccessStatus(url.to_string(), status.as_u16()));
        }

        Ok(resp.text()?)
    }
}

impl PageSource for Downloader {
    fn fetch_page(&self, map: &MapSpec) -> Result<String> {
        self.get_string(&self.page_url(map))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn page_urls() {
        let config = Config::embedded().unwrap();
        let dl = Downloader::new(&config).unwrap();

        assert_eq!(
            dl.page_url(&config.maps[1]),
            "https://gamefaqs.gamespot.com/switch/\
             230454-hyrule-warriors-definitive-edition/faqs/73095/great-sea-map"
        );
    }
}
