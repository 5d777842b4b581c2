// request/builder.rs
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use url::Url;

use crate::errors::ZooplaError;
use crate::request::SearchOptions;

pub const BASE_URL: &str = "http://api.zoopla.co.uk/api/v1/";

/// Reserved query parameter carrying the credential.
pub const API_KEY_PARAM: &str = "api_key";

pub const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fully qualified request, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl ApiRequest {
    /// Decoded query parameters in wire order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// The URL with the API key masked, for logs.
    pub fn redacted_url(&self) -> String {
        let mut url = self.url.clone();
        let pairs = self.query_pairs();
        url.query_pairs_mut().clear().extend_pairs(pairs.iter().map(|(k, v)| {
            if k == API_KEY_PARAM {
                (k.as_str(), "***")
            } else {
                (k.as_str(), v.as_str())
            }
        }));
        url.to_string()
    }
}

/// Turns search options into authenticated requests against one endpoint.
///
/// Holds no mutable state, so one builder can serve any number of callers.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    api_key: String,
    base_url: Url,
}

impl RequestBuilder {
    pub fn new(api_key: impl Into<String>, base_url: Url) -> Self {
        Self {
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Builder against the production endpoint.
    pub fn with_default_base(api_key: impl Into<String>) -> Result<Self, ZooplaError> {
        let base_url = Url::parse(BASE_URL).map_err(|e| ZooplaError::InvalidPath {
            path: BASE_URL.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(api_key, base_url))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn build(
        &self,
        resource_path: &str,
        options: &SearchOptions,
    ) -> Result<ApiRequest, ZooplaError> {
        self.build_with_values(resource_path, options, &[] as &[(&str, &str)])
    }

    /// Like [`build`](Self::build) but appends raw `key=value` pairs after the
    /// typed options, for filters `SearchOptions` does not cover.
    ///
    /// Every pair is appended in order, duplicates included. Pairs named
    /// `api_key` are dropped; the credential always comes from the builder.
    pub fn build_with_values<K, V>(
        &self,
        resource_path: &str,
        options: &SearchOptions,
        values: &[(K, V)],
    ) -> Result<ApiRequest, ZooplaError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.resolve(resource_path)?;

        {
            let mut query = url.query_pairs_mut();
            for (name, value) in options.query_pairs() {
                query.append_pair(name, &value);
            }
            for (name, value) in values {
                if name.as_ref() == API_KEY_PARAM {
                    continue;
                }
                query.append_pair(name.as_ref(), value.as_ref());
            }
            // Last mutation before the serializer is dropped.
            query.append_pair(API_KEY_PARAM, &self.api_key);
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        Ok(ApiRequest {
            method: Method::GET,
            url,
            headers,
        })
    }

    fn resolve(&self, resource_path: &str) -> Result<Url, ZooplaError> {
        let invalid = |reason: String| ZooplaError::InvalidPath {
            path: resource_path.to_string(),
            reason,
        };

        let mut url = self
            .base_url
            .join(resource_path)
            .map_err(|e| invalid(e.to_string()))?;

        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path()) {
            return Err(invalid(format!("resolves outside {}", self.base_url)));
        }

        // Only the builder writes the query.
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}
