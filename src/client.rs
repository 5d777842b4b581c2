// client.rs
use reqwest::blocking::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::errors::ZooplaError;
use crate::listings::{normalize, ListingResults, RawListingResults, PROPERTY_LISTINGS};
use crate::request::{ApiRequest, RequestBuilder, SearchOptions};
use crate::transport::{http_client, Transport, DEFAULT_TIMEOUT};

/// Listings API client: builds the request, sends it, decodes and
/// normalizes the answer. One blocking exchange per search.
#[derive(Debug, Clone)]
pub struct ZooplaClient<T = Client> {
    builder: RequestBuilder,
    transport: T,
}

impl ZooplaClient<Client> {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ZooplaError> {
        let builder = RequestBuilder::with_default_base(api_key)?;
        let transport = http_client(DEFAULT_TIMEOUT)?;
        Ok(Self { builder, transport })
    }

    pub fn from_config(config: &Config) -> Result<Self, ZooplaError> {
        let builder = RequestBuilder::new(config.api_key.clone(), config.base_url.clone());
        let transport = http_client(config.timeout)?;
        Ok(Self { builder, transport })
    }
}

impl<T: Transport> ZooplaClient<T> {
    pub fn with_transport(api_key: impl Into<String>, base_url: Url, transport: T) -> Self {
        Self {
            builder: RequestBuilder::new(api_key, base_url),
            transport,
        }
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn search_listings(&self, options: &SearchOptions) -> Result<ListingResults, ZooplaError> {
        let request = self.builder.build(PROPERTY_LISTINGS, options)?;
        self.execute(&request)
    }

    /// Search with raw query parameters instead of typed options. Repeated
    /// keys are all sent.
    pub fn search_listings_with_values<K, V>(
        &self,
        values: &[(K, V)],
    ) -> Result<ListingResults, ZooplaError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self
            .builder
            .build_with_values(PROPERTY_LISTINGS, &SearchOptions::default(), values)?;
        self.execute(&request)
    }

    fn execute(&self, request: &ApiRequest) -> Result<ListingResults, ZooplaError> {
        debug!(url = %request.redacted_url(), "sending listings request");

        let response = self.transport.send(request)?;
        if !response.is_success() {
            warn!(status = response.status, "listings request rejected");
            return Err(ZooplaError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let raw: RawListingResults = serde_json::from_str(&response.body)?;
        let results = normalize(raw)?;

        info!(
            result_count = results.result_count,
            returned = results.listings.len(),
            "listings normalized"
        );
        Ok(results)
    }
}
