// request/options.rs
use serde::{Deserialize, Serialize};

/// Area type a location search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Postcode,
    Outcode,
    Street,
    Town,
    Area,
    County,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Postcode => "postcode",
            OutputType::Outcode => "outcode",
            OutputType::Street => "street",
            OutputType::Town => "town",
            OutputType::Area => "area",
            OutputType::County => "county",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Price,
    Age,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Price => "price",
            OrderBy::Age => "age",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    Descending,
    Ascending,
}

impl Ordering {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ordering::Descending => "descending",
            Ordering::Ascending => "ascending",
        }
    }
}

/// Whether the search covers properties for sale or to let.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Sale,
    Rent,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Sale => "sale",
            ListingStatus::Rent => "rent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Furnished {
    Furnished,
    Unfurnished,
    PartFurnished,
}

impl Furnished {
    pub fn as_str(&self) -> &'static str {
        match self {
            Furnished::Furnished => "furnished",
            Furnished::Unfurnished => "unfurnished",
            Furnished::PartFurnished => "part-furnished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Houses,
    Flats,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Houses => "houses",
            PropertyType::Flats => "flats",
        }
    }
}

/// Filters for a property listings search.
///
/// Every filter is optional and `None` is never sent. A present number is
/// always sent, zero included, so `minimum_price: Some(0)` reaches the API
/// as `minimum_price=0`. Empty strings count as absent.
///
/// Fields are encoded in the order they are declared here. NaN and infinite
/// coordinates or radii are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Free-form area name or postcode.
    pub area: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
    pub postcode: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Bounding box
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub lon_min: Option<f64>,
    pub lon_max: Option<f64>,

    pub output_type: Option<OutputType>,
    /// Miles, from 0.5 to 40.
    pub radius: Option<f64>,
    pub order_by: Option<OrderBy>,
    pub ordering: Option<Ordering>,
    pub listing_status: Option<ListingStatus>,
    pub include_sold: Option<bool>,
    pub include_rented: Option<bool>,

    /// Sale price, or weekly rent when `listing_status` is `Rent`.
    pub minimum_price: Option<u64>,
    pub maximum_price: Option<u64>,
    pub minimum_beds: Option<u32>,
    pub maximum_beds: Option<u32>,

    pub furnished: Option<Furnished>,
    pub property_type: Option<PropertyType>,
    pub new_homes: Option<bool>,
    pub chain_free: Option<bool>,
    pub keywords: Option<String>,
    pub listing_id: Option<String>,
    pub branch_id: Option<String>,

    pub page_number: Option<u32>,
    /// Upstream default is 10, maximum 100.
    pub page_size: Option<u32>,
    /// Ask for cut-down entries without `price_change` and `floor_plan`.
    pub summarised: Option<bool>,
}

impl SearchOptions {
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }

    /// The query parameters these options produce, in declared field order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_text(&mut pairs, "area", &self.area);
        push_text(&mut pairs, "street", &self.street);
        push_text(&mut pairs, "town", &self.town);
        push_text(&mut pairs, "postcode", &self.postcode);
        push_text(&mut pairs, "county", &self.county);
        push_text(&mut pairs, "country", &self.country);
        push_float(&mut pairs, "latitude", self.latitude);
        push_float(&mut pairs, "longitude", self.longitude);
        push_float(&mut pairs, "lat_min", self.lat_min);
        push_float(&mut pairs, "lat_max", self.lat_max);
        push_float(&mut pairs, "lon_min", self.lon_min);
        push_float(&mut pairs, "lon_max", self.lon_max);
        push_value(&mut pairs, "output_type", self.output_type.map(|v| v.as_str()));
        push_float(&mut pairs, "radius", self.radius);
        push_value(&mut pairs, "order_by", self.order_by.map(|v| v.as_str()));
        push_value(&mut pairs, "ordering", self.ordering.map(|v| v.as_str()));
        push_value(
            &mut pairs,
            "listing_status",
            self.listing_status.map(|v| v.as_str()),
        );
        push_value(&mut pairs, "include_sold", self.include_sold.map(one_zero));
        push_value(&mut pairs, "include_rented", self.include_rented.map(one_zero));
        push_value(&mut pairs, "minimum_price", self.minimum_price);
        push_value(&mut pairs, "maximum_price", self.maximum_price);
        push_value(&mut pairs, "minimum_beds", self.minimum_beds);
        push_value(&mut pairs, "maximum_beds", self.maximum_beds);
        push_value(&mut pairs, "furnished", self.furnished.map(|v| v.as_str()));
        push_value(
            &mut pairs,
            "property_type",
            self.property_type.map(|v| v.as_str()),
        );
        push_value(&mut pairs, "new_homes", self.new_homes.map(yes_no));
        push_value(&mut pairs, "chain_free", self.chain_free.map(yes_no));
        push_text(&mut pairs, "keywords", &self.keywords);
        push_text(&mut pairs, "listing_id", &self.listing_id);
        push_text(&mut pairs, "branch_id", &self.branch_id);
        push_value(&mut pairs, "page_number", self.page_number);
        push_value(&mut pairs, "page_size", self.page_size);
        push_value(&mut pairs, "summarised", self.summarised.map(yes_no));

        pairs
    }
}

fn push_text(
    pairs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: &Option<String>,
) {
    if let Some(v) = value.as_deref().filter(|s| !s.is_empty()) {
        pairs.push((name, v.to_string()));
    }
}

fn push_value<V: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<V>,
) {
    if let Some(v) = value {
        pairs.push((name, v.to_string()));
    }
}

/// NaN and infinities are never sent.
fn push_float(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<f64>) {
    push_value(pairs, name, value.filter(|v| v.is_finite()));
}

fn one_zero(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Consuming builder for [`SearchOptions`].
#[derive(Debug, Default)]
pub struct SearchOptionsBuilder {
    opts: SearchOptions,
}

macro_rules! text_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.opts.$name = Some(value.into());
                self
            }
        )*
    };
}

macro_rules! value_setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, value: $ty) -> Self {
                self.opts.$name = Some(value);
                self
            }
        )*
    };
}

impl SearchOptionsBuilder {
    text_setters!(
        area,
        street,
        town,
        postcode,
        county,
        country,
        keywords,
        listing_id,
        branch_id,
    );

    value_setters!(
        output_type: OutputType,
        radius: f64,
        order_by: OrderBy,
        ordering: Ordering,
        listing_status: ListingStatus,
        include_sold: bool,
        include_rented: bool,
        minimum_price: u64,
        maximum_price: u64,
        minimum_beds: u32,
        maximum_beds: u32,
        furnished: Furnished,
        property_type: PropertyType,
        new_homes: bool,
        chain_free: bool,
        page_number: u32,
        page_size: u32,
        summarised: bool,
    );

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.opts.latitude = Some(latitude);
        self.opts.longitude = Some(longitude);
        self
    }

    pub fn bounding_box(
        mut self,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> Self {
        self.opts.lat_min = Some(lat_min);
        self.opts.lat_max = Some(lat_max);
        self.opts.lon_min = Some(lon_min);
        self.opts.lon_max = Some(lon_max);
        self
    }

    pub fn price_range(mut self, minimum: u64, maximum: u64) -> Self {
        self.opts.minimum_price = Some(minimum);
        self.opts.maximum_price = Some(maximum);
        self
    }

    pub fn beds_range(mut self, minimum: u32, maximum: u32) -> Self {
        self.opts.minimum_beds = Some(minimum);
        self.opts.maximum_beds = Some(maximum);
        self
    }

    pub fn build(self) -> SearchOptions {
        self.opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_produce_no_pairs() {
        assert!(SearchOptions::default().query_pairs().is_empty());
    }

    #[test]
    fn each_single_field_produces_exactly_one_pair() {
        let cases: Vec<(SearchOptions, &str, &str)> = vec![
            (SearchOptions::builder().area("Oxford").build(), "area", "Oxford"),
            (SearchOptions::builder().street("High St").build(), "street", "High St"),
            (SearchOptions::builder().town("Leeds").build(), "town", "Leeds"),
            (SearchOptions::builder().postcode("SW1A 1AA").build(), "postcode", "SW1A 1AA"),
            (SearchOptions::builder().county("Kent").build(), "county", "Kent"),
            (SearchOptions::builder().country("England").build(), "country", "England"),
            (
                SearchOptions::builder().output_type(OutputType::Outcode).build(),
                "output_type",
                "outcode",
            ),
            (SearchOptions::builder().radius(0.5).build(), "radius", "0.5"),
            (SearchOptions::builder().order_by(OrderBy::Age).build(), "order_by", "age"),
            (
                SearchOptions::builder().ordering(Ordering::Ascending).build(),
                "ordering",
                "ascending",
            ),
            (
                SearchOptions::builder().listing_status(ListingStatus::Rent).build(),
                "listing_status",
                "rent",
            ),
            (SearchOptions::builder().include_sold(true).build(), "include_sold", "1"),
            (SearchOptions::builder().include_rented(false).build(), "include_rented", "0"),
            (SearchOptions::builder().minimum_price(100000).build(), "minimum_price", "100000"),
            (SearchOptions::builder().maximum_price(450000).build(), "maximum_price", "450000"),
            (SearchOptions::builder().minimum_beds(2).build(), "minimum_beds", "2"),
            (SearchOptions::builder().maximum_beds(4).build(), "maximum_beds", "4"),
            (
                SearchOptions::builder().furnished(Furnished::PartFurnished).build(),
                "furnished",
                "part-furnished",
            ),
            (
                SearchOptions::builder().property_type(PropertyType::Flats).build(),
                "property_type",
                "flats",
            ),
            (SearchOptions::builder().new_homes(true).build(), "new_homes", "yes"),
            (SearchOptions::builder().chain_free(false).build(), "chain_free", "no"),
            (SearchOptions::builder().keywords("garden").build(), "keywords", "garden"),
            (SearchOptions::builder().listing_id("12345").build(), "listing_id", "12345"),
            (SearchOptions::builder().branch_id("77").build(), "branch_id", "77"),
            (SearchOptions::builder().page_number(3).build(), "page_number", "3"),
            (SearchOptions::builder().page_size(50).build(), "page_size", "50"),
            (SearchOptions::builder().summarised(true).build(), "summarised", "yes"),
        ];

        for (opts, name, value) in cases {
            assert_eq!(opts.query_pairs(), vec![(name, value.to_string())], "field {name}");
        }
    }

    #[test]
    fn zero_is_sent_when_present() {
        let opts = SearchOptions::builder().minimum_price(0).build();
        assert_eq!(opts.query_pairs(), vec![("minimum_price", "0".to_string())]);
    }

    #[test]
    fn non_finite_floats_are_not_sent() {
        let opts = SearchOptions::builder()
            .radius(f64::NAN)
            .location(f64::INFINITY, -0.12)
            .bounding_box(f64::NEG_INFINITY, 52.0, -1.5, f64::NAN)
            .build();
        assert_eq!(
            opts.query_pairs(),
            vec![
                ("longitude", "-0.12".to_string()),
                ("lat_max", "52".to_string()),
                ("lon_min", "-1.5".to_string()),
            ]
        );
    }

    #[test]
    fn empty_string_is_treated_as_absent() {
        let opts = SearchOptions::builder().area("").town("Bath").build();
        assert_eq!(opts.query_pairs(), vec![("town", "Bath".to_string())]);
    }

    #[test]
    fn pairs_follow_declared_order_not_set_order() {
        let opts = SearchOptions::builder()
            .page_size(10)
            .minimum_beds(2)
            .postcode("SW1A 1AA")
            .build();
        let names: Vec<&str> = opts.query_pairs().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["postcode", "minimum_beds", "page_size"]);
    }

    #[test]
    fn bounding_box_and_location_format_floats_shortest() {
        let opts = SearchOptions::builder()
            .location(51.5, -0.12)
            .bounding_box(51.0, 52.0, -1.5, 0.25)
            .build();
        assert_eq!(
            opts.query_pairs(),
            vec![
                ("latitude", "51.5".to_string()),
                ("longitude", "-0.12".to_string()),
                ("lat_min", "51".to_string()),
                ("lat_max", "52".to_string()),
                ("lon_min", "-1.5".to_string()),
                ("lon_max", "0.25".to_string()),
            ]
        );
    }
}
