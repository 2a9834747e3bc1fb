//! HTTP GET of the static JSON resources.

use greennest_catalog::{CatalogItem, decode_blogs, decode_plants};

use crate::error::FetchError;

/// Client for the site's static JSON resources.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET `{base_url}{path}` and decode a plants collection.
    pub async fn fetch_plants(&self, path: &str) -> Result<Vec<CatalogItem>, FetchError> {
        let bytes = self.fetch_bytes(path).await?;
        decode_plants(&bytes).map_err(|err| FetchError::Decode(err.to_string()))
    }

    /// GET `{base_url}{path}` and decode a blog collection.
    pub async fn fetch_blogs(&self, path: &str) -> Result<Vec<CatalogItem>, FetchError> {
        let bytes = self.fetch_bytes(path).await?;
        decode_blogs(&bytes).map_err(|err| FetchError::Decode(err.to_string()))
    }

    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(body.to_vec())
    }
}
