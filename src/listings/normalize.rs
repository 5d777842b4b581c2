// listings/normalize.rs
use crate::errors::CoercionError;
use crate::listings::models::{
    Listing, ListingResults, PriceChange, RawListing, RawListingResults, RawPriceChange, RawScalar,
};

/// Converts a decoded result set into typed listings.
///
/// Output order and length match the input. The first numeric field that
/// cannot be coerced aborts the whole conversion.
pub fn normalize(raw: RawListingResults) -> Result<ListingResults, CoercionError> {
    let listings = raw
        .listings
        .into_iter()
        .enumerate()
        .map(|(index, listing)| normalize_listing(index, listing))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListingResults {
        result_count: raw.result_count,
        listings,
    })
}

fn normalize_listing(index: usize, raw: RawListing) -> Result<Listing, CoercionError> {
    let optional = |field: &str, value: Option<RawScalar>| -> Result<Option<f64>, CoercionError> {
        value.map(|v| coerce(&v, field, index)).transpose()
    };

    let price_change = raw
        .price_change
        .into_iter()
        .enumerate()
        .map(|(i, change)| normalize_price_change(index, i, change))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Listing {
        num_bathrooms: optional("num_bathrooms", raw.num_bathrooms)?,
        num_bedrooms: optional("num_bedrooms", raw.num_bedrooms)?,
        num_floors: optional("num_floors", raw.num_floors)?,
        num_recepts: optional("num_recepts", raw.num_recepts)?,
        price: optional("price", raw.price)?,
        price_change,

        listing_id: raw.listing_id,
        outcode: raw.outcode,
        displayable_address: raw.displayable_address,
        county: raw.county,
        country: raw.country,
        listing_status: raw.listing_status,
        status: raw.status,
        price_modifier: raw.price_modifier,
        property_type: raw.property_type,
        street_name: raw.street_name,
        thumbnail_url: raw.thumbnail_url,
        image_url: raw.image_url,
        image_caption: raw.image_caption,
        floor_plan: raw.floor_plan,
        description: raw.description,
        short_description: raw.short_description,
        details_url: raw.details_url,
        new_home: raw.new_home,
        latitude: raw.latitude,
        longitude: raw.longitude,
        first_published_date: raw.first_published_date,
        last_published_date: raw.last_published_date,
        agent_name: raw.agent_name,
        agent_logo: raw.agent_logo,
        agent_phone: raw.agent_phone,
    })
}

fn normalize_price_change(
    listing_index: usize,
    position: usize,
    raw: RawPriceChange,
) -> Result<PriceChange, CoercionError> {
    let field = format!("price_change[{position}].price");
    Ok(PriceChange {
        price: coerce(&raw.price, &field, listing_index)?,
        date: raw.date,
    })
}

/// Numbers pass through, strings must parse as a finite float, every
/// other shape is rejected.
pub fn coerce(value: &RawScalar, field: &str, listing_index: usize) -> Result<f64, CoercionError> {
    let parsed = match value {
        RawScalar::Number(n) => Some(*n),
        RawScalar::Text(s) => s.parse::<f64>().ok(),
        RawScalar::Other(_) => None,
    };

    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| CoercionError {
            field: field.to_string(),
            listing_index,
            raw_value: value.to_raw_string(),
        })
}
