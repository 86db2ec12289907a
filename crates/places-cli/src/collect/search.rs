//! Search stage: paginate nearby-search per keyword into the run.

use std::time::Duration;

use places_client::{PlaceSource, PlacesError};
use places_core::{Admission, CollectionRun, SearchArea};

/// Upper bound on pages per keyword, guarding against a token that never
/// stops repeating. The service itself serves at most three.
pub(crate) const MAX_PAGES_PER_KEYWORD: usize = 10;

/// Counters for one keyword, or summed over a whole search stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeywordTotals {
    pub pages: usize,
    pub admitted: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl KeywordTotals {
    fn add(&mut self, other: KeywordTotals) {
        self.pages += other.pages;
        self.admitted += other.admitted;
        self.duplicates += other.duplicates;
        self.rejected += other.rejected;
    }
}

/// Log reason for an admission outcome that rejects the candidate on its
/// own merits; `None` for admitted, duplicate and limit outcomes.
pub(crate) fn rejection_reason(admission: Admission) -> Option<&'static str> {
    match admission {
        Admission::BelowThreshold => Some("rating below threshold"),
        Admission::Unrated => Some("no rating"),
        Admission::TooFewReviews => Some("too few reviews"),
        Admission::Admitted | Admission::Duplicate | Admission::LimitReached => None,
    }
}

/// Run [`search_keyword`] for each keyword in order.
///
/// # Errors
///
/// Propagates the first transport-level failure.
pub(crate) async fn search_all<S: PlaceSource>(
    source: &S,
    area: &SearchArea,
    keywords: &[String],
    page_delay: Duration,
    run: &mut CollectionRun,
) -> Result<KeywordTotals, PlacesError> {
    let mut totals = KeywordTotals::default();
    for keyword in keywords {
        if run.is_full() {
            tracing::info!(%keyword, "record limit reached; skipping remaining keywords");
            break;
        }
        let keyword_totals = search_keyword(source, area, keyword, page_delay, run).await?;
        tracing::info!(
            %keyword,
            pages = keyword_totals.pages,
            admitted = keyword_totals.admitted,
            duplicates = keyword_totals.duplicates,
            rejected = keyword_totals.rejected,
            "keyword searched"
        );
        totals.add(keyword_totals);
    }
    Ok(totals)
}

/// Fetch every page for `keyword`, offering each candidate to `run`.
///
/// Starts without a page token and follows `next_page_token` until a page
/// omits it. Before each follow-up request the stage waits `page_delay`,
/// since fresh tokens are rejected until the service activates them.
///
/// A page the service answered but that could not be used (non-2xx status,
/// undecodable body) is logged and ends the keyword as if it were the last
/// page.
///
/// Pagination also stops as soon as the run reaches its record limit; the
/// rest of that page is left unobserved.
///
/// # Errors
///
/// Returns [`PlacesError::Http`] and other transport-level failures.
pub(crate) async fn search_keyword<S: PlaceSource>(
    source: &S,
    area: &SearchArea,
    keyword: &str,
    page_delay: Duration,
    run: &mut CollectionRun,
) -> Result<KeywordTotals, PlacesError> {
    let mut totals = KeywordTotals::default();
    let mut page_token: Option<String> = None;

    loop {
        if totals.pages >= MAX_PAGES_PER_KEYWORD {
            tracing::warn!(
                %keyword,
                max_pages = MAX_PAGES_PER_KEYWORD,
                "page limit reached; stopping pagination"
            );
            break;
        }

        if page_token.is_some() && !page_delay.is_zero() {
            tokio::time::sleep(page_delay).await;
        }

        let page = match source
            .nearby_search(area, keyword, page_token.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) if e.is_bad_response() => {
                totals.pages += 1;
                tracing::warn!(%keyword, error = %e, "unusable search page; treating as last page");
                break;
            }
            Err(e) => return Err(e),
        };
        totals.pages += 1;

        for candidate in page.candidates {
            let place_id = candidate.place_id.clone();
            match run.observe(candidate) {
                Admission::Admitted => totals.admitted += 1,
                Admission::Duplicate => totals.duplicates += 1,
                Admission::LimitReached => break,
                rejected => {
                    let reason = rejection_reason(rejected).unwrap_or("rejected");
                    tracing::debug!(%keyword, %place_id, reason, "candidate not admitted");
                    totals.rejected += 1;
                }
            }
        }

        if run.is_full() {
            tracing::info!(%keyword, records = run.records().len(), "record limit reached");
            break;
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(totals)
}
