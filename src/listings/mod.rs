mod models;
mod normalize;

pub use models::{
    Listing, ListingResults, PriceChange, RawListing, RawListingResults, RawPriceChange, RawScalar,
};
pub use normalize::{coerce, normalize};

/// Resource path of the property listings search.
pub const PROPERTY_LISTINGS: &str = "property_listings.js";
