// listings/models.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// result
//  ├── result_count
//  └── listing[]
//       ├── listing_id, outcode, displayable_address, ...   (strings)
//       ├── num_bedrooms, num_bathrooms, num_floors,
//       │   num_recepts, price                            (number OR string)
//       ├── price_change[]
//       │    ├── price                                    (number OR string)
//       │    └── date
//       ├── floor_plan[]                                  (strings)
//       └── latitude, longitude                           (numbers)

/// A scalar the API sends either as a JSON number or as a numeric string.
///
/// Anything else lands in `Other` so the normalizer can report it with
/// context instead of the decoder failing on the whole body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Default for RawScalar {
    fn default() -> Self {
        RawScalar::Other(Value::Null)
    }
}

impl RawScalar {
    /// The value as it appeared on the wire, JSON-encoded.
    pub fn to_raw_string(&self) -> String {
        match self {
            RawScalar::Number(n) => n.to_string(),
            RawScalar::Text(s) => Value::String(s.clone()).to_string(),
            RawScalar::Other(v) => v.to_string(),
        }
    }
}

/// Keeps an explicit `null` as `Some(RawScalar::Other(Null))`; only a
/// missing key becomes `None` (via `#[serde(default)]`).
fn present<'de, D>(deserializer: D) -> Result<Option<RawScalar>, D::Error>
where
    D: Deserializer<'de>,
{
    RawScalar::deserialize(deserializer).map(Some)
}

/// Reads `null` as the type's default, so a null copy-through field is an
/// empty string or list rather than a decode error.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPriceChange {
    #[serde(default)]
    pub price: RawScalar,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

/// One listing exactly as decoded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(deserialize_with = "null_as_default")]
    pub listing_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub outcode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub displayable_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "present")]
    pub num_bathrooms: Option<RawScalar>,
    #[serde(deserialize_with = "present")]
    pub num_bedrooms: Option<RawScalar>,
    #[serde(deserialize_with = "present")]
    pub num_floors: Option<RawScalar>,
    #[serde(deserialize_with = "present")]
    pub num_recepts: Option<RawScalar>,
    #[serde(deserialize_with = "null_as_default")]
    pub listing_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "present")]
    pub price: Option<RawScalar>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_modifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change: Vec<RawPriceChange>,
    #[serde(deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub street_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_caption: String,
    #[serde(deserialize_with = "null_as_default")]
    pub floor_plan: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub new_home: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub first_published_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_published_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub agent_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub agent_logo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub agent_phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawListingResults {
    pub result_count: u64,
    #[serde(default, rename = "listing", deserialize_with = "null_as_default")]
    pub listings: Vec<RawListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub price: f64,
    pub date: String,
}

impl PriceChange {
    pub fn changed_at(&self) -> Option<NaiveDateTime> {
        parse_api_date(&self.date)
    }
}

/// A listing with every numeric field resolved to `f64`.
///
/// Numeric fields are `None` only when the API left them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub listing_id: String,
    pub outcode: String,
    pub displayable_address: String,
    pub county: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_bathrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_bedrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_floors: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_recepts: Option<f64>,
    pub listing_status: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub price_modifier: String,
    pub price_change: Vec<PriceChange>,
    pub property_type: String,
    pub street_name: String,
    pub thumbnail_url: String,
    pub image_url: String,
    pub image_caption: String,
    pub floor_plan: Vec<String>,
    pub description: String,
    pub short_description: String,
    pub details_url: String,
    pub new_home: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub first_published_date: String,
    pub last_published_date: String,
    pub agent_name: String,
    pub agent_logo: String,
    pub agent_phone: String,
}

impl Listing {
    pub fn first_published(&self) -> Option<NaiveDateTime> {
        parse_api_date(&self.first_published_date)
    }

    pub fn last_published(&self) -> Option<NaiveDateTime> {
        parse_api_date(&self.last_published_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingResults {
    pub result_count: u64,
    #[serde(rename = "listing")]
    pub listings: Vec<Listing>,
}

/// Dates arrive as `YYYY-MM-DD HH:MM:SS`, older price changes as plain
/// `YYYY-MM-DD`.
fn parse_api_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
