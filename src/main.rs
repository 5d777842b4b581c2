use std::process::ExitCode;

use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::Level;

use zoopla_simple::request::{Furnished, ListingStatus, OrderBy, Ordering, PropertyType};
use zoopla_simple::{Config, ListingResults, SearchOptions, ZooplaClient, ZooplaError};

/// Search Zoopla property listings. Reads the API key from ZOOPLA_API_KEY.
#[derive(Debug, Parser)]
#[command(name = "zoopla-search", version)]
struct Cli {
    /// Area name or postcode
    #[arg(long)]
    area: Option<String>,
    #[arg(long)]
    postcode: Option<String>,
    /// Search radius in miles (0.5 to 40)
    #[arg(long)]
    radius: Option<f64>,
    /// sale or rent
    #[arg(long, value_parser = wire_enum::<ListingStatus>)]
    status: Option<ListingStatus>,
    #[arg(long)]
    min_price: Option<u64>,
    #[arg(long)]
    max_price: Option<u64>,
    #[arg(long)]
    min_beds: Option<u32>,
    #[arg(long)]
    max_beds: Option<u32>,
    /// houses or flats
    #[arg(long, value_parser = wire_enum::<PropertyType>)]
    property_type: Option<PropertyType>,
    /// furnished, unfurnished or part-furnished
    #[arg(long, value_parser = wire_enum::<Furnished>)]
    furnished: Option<Furnished>,
    /// price or age
    #[arg(long, value_parser = wire_enum::<OrderBy>)]
    order_by: Option<OrderBy>,
    /// ascending or descending
    #[arg(long, value_parser = wire_enum::<Ordering>)]
    ordering: Option<Ordering>,
    #[arg(long)]
    keywords: Option<String>,
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    page_size: Option<u32>,

    /// Raw query parameter (key=value), sent instead of the typed filters.
    /// May be repeated.
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Print the normalized results as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            area: self.area.clone(),
            postcode: self.postcode.clone(),
            radius: self.radius,
            listing_status: self.status,
            minimum_price: self.min_price,
            maximum_price: self.max_price,
            minimum_beds: self.min_beds,
            maximum_beds: self.max_beds,
            property_type: self.property_type,
            furnished: self.furnished,
            order_by: self.order_by,
            ordering: self.ordering,
            keywords: self.keywords.clone(),
            page_number: self.page,
            page_size: self.page_size,
            ..Default::default()
        }
    }
}

/// Parses a CLI value using the same names the API uses on the wire.
fn wire_enum<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|e| e.to_string())
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

fn run(cli: &Cli) -> Result<ListingResults, ZooplaError> {
    let config = Config::from_env()?;
    let client = ZooplaClient::from_config(&config)?;

    if cli.params.is_empty() {
        client.search_listings(&cli.search_options())
    } else {
        client.search_listings_with_values(&cli.params)
    }
}

fn print_summary(results: &ListingResults) {
    println!("{} results", results.result_count);
    for listing in &results.listings {
        let price = listing.price.map(|p| format!("{p:.0}")).unwrap_or_else(|| "-".to_string());
        let beds = listing
            .num_bedrooms
            .map(|b| format!("{b} bed"))
            .unwrap_or_else(|| "? bed".to_string());
        println!(
            "{:<10} {:>10} {:<7} {}",
            listing.listing_id, price, beds, listing.displayable_address
        );
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let results = match run(&cli) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("❌ Search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("❌ Could not encode results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&results);
    }

    ExitCode::SUCCESS
}
