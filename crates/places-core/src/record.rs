//! Place data as it moves through a collection run.
//!
//! A [`PlaceCandidate`] is a raw nearby-search entry. Candidates that pass the
//! rating threshold become [`PlaceRecord`]s, which the enrichment stage later
//! extends with [`PlaceDetails`]. Fields the external service may omit are
//! modelled as `Option` rather than being silently absent.

/// Separator appended after every weekday entry in the opening-hours text.
const OPENING_HOURS_SEPARATOR: &str = "  ";

/// A nearby-search result entry before rating filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: Option<String>,
    /// Average rating on the service's 0–5 scale.
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub types: Vec<String>,
}

/// Fields merged into a record by the enrichment stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub opening_hours: Option<String>,
    pub website: Option<String>,
    pub maps_url: Option<String>,
}

/// A candidate that met the rating threshold, optionally enriched with details.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub place_id: String,
    pub name: Option<String>,
    pub rating: f64,
    pub review_count: Option<u32>,
    /// Rating shrunk toward the run's prior by review volume; see
    /// [`bayesian_rating`].
    pub bayesian_rating: f64,
    pub types: Vec<String>,
    pub opening_hours: Option<String>,
    pub website: Option<String>,
    pub maps_url: Option<String>,
}

impl PlaceRecord {
    /// Promotes a rated candidate into a record with no detail fields yet.
    #[must_use]
    pub fn from_candidate(candidate: PlaceCandidate, rating: f64, bayesian_rating: f64) -> Self {
        Self {
            place_id: candidate.place_id,
            name: candidate.name,
            rating,
            review_count: candidate.review_count,
            bayesian_rating,
            types: candidate.types,
            opening_hours: None,
            website: None,
            maps_url: None,
        }
    }

    /// Merges detail fields into the record.
    ///
    /// Only the three detail fields are touched, and only when the incoming
    /// value is present. Identity, name, rating, review count and types keep
    /// their search-stage values.
    pub fn apply_details(&mut self, details: PlaceDetails) {
        if let Some(hours) = details.opening_hours {
            self.opening_hours = Some(hours);
        }
        if let Some(website) = details.website {
            self.website = Some(website);
        }
        if let Some(maps_url) = details.maps_url {
            self.maps_url = Some(maps_url);
        }
    }
}

/// Bayesian average of a rating: `(v/(v+m))*R + (m/(v+m))*C`.
///
/// `v` is the place's review count, `R` its rating, `m` the prior weight in
/// reviews and `C` the prior mean. With no reviews and no prior weight the
/// raw rating is returned.
#[must_use]
pub fn bayesian_rating(rating: f64, review_count: u32, prior_mean: f64, prior_reviews: u32) -> f64 {
    if review_count == 0 && prior_reviews == 0 {
        return rating;
    }
    let v = f64::from(review_count);
    let m = f64::from(prior_reviews);
    (v / (v + m)) * rating + (m / (v + m)) * prior_mean
}

/// Flattens weekday opening-hours entries into a single cell value.
///
/// Every entry is followed by two spaces, including the last one. Returns
/// `None` for an empty list so that "no hours published" stays distinguishable
/// from an empty string.
#[must_use]
pub fn format_opening_hours(weekday_text: &[String]) -> Option<String> {
    if weekday_text.is_empty() {
        return None;
    }
    let mut out = String::new();
    for day in weekday_text {
        out.push_str(day);
        out.push_str(OPENING_HOURS_SEPARATOR);
    }
    Some(out)
}
