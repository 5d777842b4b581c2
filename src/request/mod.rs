mod builder;
mod options;

pub use builder::{ApiRequest, RequestBuilder, API_KEY_PARAM, BASE_URL, CLIENT_USER_AGENT};
pub use options::{
    Furnished, ListingStatus, OrderBy, Ordering, OutputType, PropertyType, SearchOptions,
    SearchOptionsBuilder,
};
