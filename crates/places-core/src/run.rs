//! Per-run accumulation state: the identifier set and the result sequence.

use std::collections::HashSet;

use crate::record::{bayesian_rating, PlaceCandidate, PlaceRecord};

/// What happened to a candidate offered to [`CollectionRun::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    /// The identifier was already seen under an earlier page or keyword.
    Duplicate,
    BelowThreshold,
    Unrated,
    /// Rated well enough but with fewer reviews than the run requires.
    TooFewReviews,
    /// The run already holds its maximum number of records.
    LimitReached,
}

/// State owned by a single collection run.
///
/// Every identifier offered is remembered, whether or not the candidate is
/// admitted, so a place rejected once is never reconsidered. Records are kept
/// in discovery order and never removed.
#[derive(Debug)]
pub struct CollectionRun {
    min_rating: f64,
    min_reviews: u32,
    prior_reviews: u32,
    limit: Option<usize>,
    seen: HashSet<String>,
    records: Vec<PlaceRecord>,
}

impl CollectionRun {
    /// A run admitting every rated candidate at or above `min_rating`, with
    /// no review floor, no Bayesian prior weight and no record limit.
    #[must_use]
    pub fn new(min_rating: f64) -> Self {
        Self {
            min_rating,
            min_reviews: 0,
            prior_reviews: 0,
            limit: None,
            seen: HashSet::new(),
            records: Vec::new(),
        }
    }

    /// Require at least `min_reviews` reviews; a missing count reads as zero.
    #[must_use]
    pub fn with_min_reviews(mut self, min_reviews: u32) -> Self {
        self.min_reviews = min_reviews;
        self
    }

    /// Weight of the prior, in reviews, used for each record's Bayesian
    /// rating. The prior mean is the run's minimum rating.
    #[must_use]
    pub fn with_prior_reviews(mut self, prior_reviews: u32) -> Self {
        self.prior_reviews = prior_reviews;
        self
    }

    /// Stop admitting once `limit` records are held.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Returns `true` once the record limit, if any, has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.records.len() >= limit)
    }

    /// Records the candidate's identifier and admits it if its rating is
    /// present and at least the run's minimum, and it has enough reviews.
    ///
    /// A full run refuses candidates without recording them as seen.
    pub fn observe(&mut self, candidate: PlaceCandidate) -> Admission {
        if self.is_full() {
            return Admission::LimitReached;
        }
        if !self.seen.insert(candidate.place_id.clone()) {
            return Admission::Duplicate;
        }
        let Some(rating) = candidate.rating else {
            return Admission::Unrated;
        };
        if rating < self.min_rating {
            return Admission::BelowThreshold;
        }
        let reviews = candidate.review_count.unwrap_or(0);
        if reviews < self.min_reviews {
            return Admission::TooFewReviews;
        }

        let bayesian = bayesian_rating(rating, reviews, self.min_rating, self.prior_reviews);
        self.records
            .push(PlaceRecord::from_candidate(candidate, rating, bayesian));
        Admission::Admitted
    }

    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [PlaceRecord] {
        &mut self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<PlaceRecord> {
        self.records
    }
}
