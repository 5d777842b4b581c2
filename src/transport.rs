// transport.rs
use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::request::{ApiRequest, CLIENT_USER_AGENT};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a built request. Timeouts and cancellation belong to the
/// implementation.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Blocking reqwest client with the crate user agent.
pub fn http_client(timeout: Duration) -> Result<Client, TransportError> {
    Client::builder()
        .user_agent(CLIENT_USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| TransportError::RequestFailed(e.to_string()))
}

impl Transport for Client {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let resp = self
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .send()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_2xx_only() {
        let ok = RawResponse {
            status: 204,
            body: String::new(),
        };
        let redirect = RawResponse {
            status: 302,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }

    #[test]
    fn builds_http_client() {
        assert!(http_client(DEFAULT_TIMEOUT).is_ok());
    }
}
