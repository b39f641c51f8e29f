use std::time::Duration;

use monitor_logging::monitor_info;
use serde::Deserialize;

use crate::CatalogError;

/// Community-maintained list of known OParl endpoints.
pub const DEFAULT_ENDPOINTS_URL: &str =
    "https://raw.githubusercontent.com/OParl/resources/master/endpoints.yml";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINTS_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One entry of `endpoints.yml`. Fields other than `title` and `url` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    pub title: String,
    pub url: String,
}

/// Parses an endpoint list, keeping the document order. An empty document is an empty list.
pub fn parse_endpoints_yml(bytes: &[u8]) -> Result<Vec<Endpoint>, CatalogError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Loads the endpoint catalog over HTTP.
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    settings: CatalogSettings,
}

impl EndpointCatalog {
    pub fn new(settings: CatalogSettings) -> Self {
        Self { settings }
    }

    pub async fn fetch(&self) -> Result<Vec<Endpoint>, CatalogError> {
        let url = reqwest::Url::parse(&self.settings.url)
            .map_err(|err| CatalogError::InvalidUrl(err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        monitor_info!("Loading endpoints from {}", url);
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let endpoints = parse_endpoints_yml(&bytes)?;
        monitor_info!("Loaded {} endpoints", endpoints.len());
        Ok(endpoints)
    }

    /// `(display name, url)` pairs in catalog order.
    pub async fn selection_options(&self) -> Result<Vec<(String, String)>, CatalogError> {
        Ok(self
            .fetch()
            .await?
            .into_iter()
            .map(|endpoint| (endpoint.title, endpoint.url))
            .collect())
    }
}
