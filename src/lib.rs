//! Client for the Zoopla property listings API.
//!
//! [`request`] turns [`SearchOptions`] into an authenticated request,
//! [`listings`] turns the loosely typed JSON answer into [`Listing`]s, and
//! [`ZooplaClient`] runs one against the other over a [`Transport`].

pub mod client;
pub mod config;
pub mod errors;
pub mod listings;
pub mod request;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::ZooplaClient;
pub use config::Config;
pub use errors::{CoercionError, ZooplaError};
pub use listings::{normalize, Listing, ListingResults, PriceChange, RawListingResults};
pub use request::{ApiRequest, RequestBuilder, SearchOptions};
pub use transport::{RawResponse, Transport, TransportError};
