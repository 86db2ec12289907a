//! The seam between the collection pipeline and the places API.

use std::future::Future;

use places_core::{PlaceDetails, SearchArea};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::SearchPage;

/// A provider of nearby-search pages and place details.
///
/// [`PlacesClient`] is the production implementation; the collector is
/// generic over this trait so it can be driven by an in-memory fake.
pub trait PlaceSource {
    fn nearby_search(
        &self,
        area: &SearchArea,
        keyword: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<SearchPage, PlacesError>> + Send;

    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<PlaceDetails>, PlacesError>> + Send;
}

impl PlaceSource for PlacesClient {
    fn nearby_search(
        &self,
        area: &SearchArea,
        keyword: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<SearchPage, PlacesError>> + Send {
        PlacesClient::nearby_search(self, area, keyword, page_token)
    }

    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<PlaceDetails>, PlacesError>> + Send {
        PlacesClient::place_details(self, place_id)
    }
}
