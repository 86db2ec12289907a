//! Wire types for the nearby-search and place-details endpoints.
//!
//! Both endpoints wrap their payload in an envelope carrying a `status`
//! string (`"OK"`, `"ZERO_RESULTS"`, `"REQUEST_DENIED"`, ...) and an optional
//! `error_message`. Every field is optional or defaulted: the service omits
//! keys freely, and a missing key must read as "absent" rather than fail the
//! page.

use serde::Deserialize;

use places_core::{format_opening_hours, PlaceCandidate, PlaceDetails};

/// Envelope statuses that indicate a normal answer.
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Response from `nearbysearch/json`.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    /// Continuation cursor; only valid after a short activation delay.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One entry of a nearby-search result list.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl PlaceResult {
    /// Converts the entry into a candidate. Entries without a `place_id`
    /// cannot be deduplicated and yield `None`.
    #[must_use]
    pub fn into_candidate(self) -> Option<PlaceCandidate> {
        let place_id = self.place_id.filter(|id| !id.is_empty())?;
        Some(PlaceCandidate {
            place_id,
            name: self.name,
            rating: self.rating,
            review_count: self.user_ratings_total,
            types: self.types,
        })
    }
}

/// Response from `details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetailResult>,
}

/// The `result` object of a details response, limited to the requested fields.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Google Maps page for the place.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

impl From<PlaceDetailResult> for PlaceDetails {
    fn from(result: PlaceDetailResult) -> Self {
        let opening_hours = result
            .opening_hours
            .and_then(|h| format_opening_hours(&h.weekday_text));
        PlaceDetails {
            opening_hours,
            website: result.website,
            maps_url: result.url,
        }
    }
}

/// One decoded nearby-search page, ready for the collector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub candidates: Vec<PlaceCandidate>,
    pub next_page_token: Option<String>,
}

/// Returns `true` if `status` is absent or one of the normal envelope values.
#[must_use]
pub fn is_normal_status(status: Option<&str>) -> bool {
    matches!(status, None | Some(STATUS_OK | STATUS_ZERO_RESULTS))
}
