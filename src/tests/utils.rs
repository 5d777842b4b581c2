use std::cell::RefCell;

use serde_json::{json, Value};
use url::Url;

use crate::request::{ApiRequest, BASE_URL};
use crate::transport::{RawResponse, Transport, TransportError};
use crate::ZooplaClient;

/// Transport that answers with a canned response and remembers what it was
/// asked to send.
pub struct FakeTransport {
    response: Result<RawResponse, String>,
    pub sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn ok(body: Value) -> Self {
        Self::with_status(200, body.to_string())
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Ok(RawResponse {
                status,
                body: body.into(),
            }),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: Err(msg.to_string()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn last_sent(&self) -> ApiRequest {
        self.sent
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| panic!("no request was sent"))
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        self.response
            .clone()
            .map_err(TransportError::RequestFailed)
    }
}

pub fn client_with(transport: &FakeTransport) -> ZooplaClient<&FakeTransport> {
    let base = Url::parse(BASE_URL).unwrap_or_else(|e| panic!("bad base url: {e}"));
    ZooplaClient::with_transport("test-key", base, transport)
}

/// A trimmed response in the shape the listings endpoint returns, with the
/// numeric fields split between numbers and strings.
pub fn sample_response() -> Value {
    json!({
        "result_count": 2,
        "listing": [
            {
                "listing_id": "34582831",
                "outcode": "SW1A",
                "displayable_address": "Whitehall, London SW1A",
                "num_bedrooms": "2",
                "num_bathrooms": 1,
                "num_floors": 0,
                "num_recepts": "1",
                "listing_status": "sale",
                "status": "for_sale",
                "price": "850000",
                "price_modifier": "offers_over",
                "price_change": [
                    {"price": "900000", "date": "2014-05-01 09:12:44"},
                    {"price": 850000, "date": "2014-06-01 10:00:00"}
                ],
                "property_type": "Flat",
                "floor_plan": ["http://li.zoocdn.com/fp1.png"],
                "details_url": "http://www.zoopla.co.uk/for-sale/details/34582831",
                "latitude": 51.5033,
                "longitude": -0.1276,
                "first_published_date": "2014-05-01 09:12:44",
                "last_published_date": "2014-06-01 10:00:00",
                "agent_name": "Example Estates"
            },
            {
                "listing_id": "34582999",
                "displayable_address": "Victoria Street, London SW1E",
                "num_bedrooms": 3,
                "price": 1200000,
                "listing_status": "sale"
            }
        ]
    })
}
