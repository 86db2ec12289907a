//! HTTP client for the places nearby-search and place-details endpoints.
//!
//! Wraps `reqwest` with API key management, query construction, and typed
//! response decoding. Envelope statuses other than `OK`/`ZERO_RESULTS` are
//! logged but not turned into errors: such responses simply carry no results.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use places_core::{PlaceDetails, SearchArea};

use crate::error::PlacesError;
use crate::types::{is_normal_status, DetailsResponse, NearbySearchResponse, SearchPage};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

const NEARBY_SEARCH_PATH: &str = "nearbysearch/json";
const DETAILS_PATH: &str = "details/json";

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &str =
    "name,formatted_address,formatted_phone_number,website,opening_hours,url";

/// Client for the places REST API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Endpoint paths are joined relative to the base, which only keeps
        // the last segment when the base ends with a slash.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one nearby-search page for `keyword` around `area`.
    ///
    /// Pass the previous page's `next_page_token` as `page_token` to continue;
    /// `None` requests the first page.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected JSON.
    pub async fn nearby_search(
        &self,
        area: &SearchArea,
        keyword: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let location = area.center.to_string();
        let radius = area.radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", keyword),
        ];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let context = format!("nearbysearch(keyword={keyword})");
        let url = self.build_url(NEARBY_SEARCH_PATH, &params)?;
        let response: NearbySearchResponse = self.request_json(url, &context).await?;
        log_abnormal_status(
            &context,
            response.status.as_deref(),
            response.error_message.as_deref(),
        );

        let candidates = response
            .results
            .into_iter()
            .filter_map(|entry| {
                let candidate = entry.into_candidate();
                if candidate.is_none() {
                    tracing::warn!(%context, "skipping search entry without place_id");
                }
                candidate
            })
            .collect();

        Ok(SearchPage {
            candidates,
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetches the detail fields for a single place.
    ///
    /// Returns `Ok(None)` when the response carries no `result` object.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected JSON.
    pub async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
        let context = format!("details(place_id={place_id})");
        let url = self.build_url(
            DETAILS_PATH,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let response: DetailsResponse = self.request_json(url, &context).await?;
        log_abnormal_status(
            &context,
            response.status.as_deref(),
            response.error_message.as_deref(),
        );

        Ok(response.result.map(PlaceDetails::from))
    }

    /// Builds the endpoint URL with percent-encoded query parameters.
    ///
    /// The API key is appended last so that it never leads a logged prefix.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// `context` names the call in errors; the URL itself is never included
    /// because it carries the API key.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                context: context.to_owned(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

fn log_abnormal_status(context: &str, status: Option<&str>, error_message: Option<&str>) {
    if !is_normal_status(status) {
        tracing::warn!(
            %context,
            status = status.unwrap_or_default(),
            error_message = error_message.unwrap_or_default(),
            "places API returned a non-OK status"
        );
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
