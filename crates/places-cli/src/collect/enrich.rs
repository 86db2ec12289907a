//! Enrichment stage: merge place details into admitted records.

use places_client::{PlaceSource, PlacesError};
use places_core::CollectionRun;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EnrichTotals {
    pub requested: usize,
    pub enriched: usize,
    pub failed: usize,
}

/// Request details for each record in discovery order and merge them in.
///
/// The details endpoint is not paginated: exactly one request per record.
/// Unusable responses leave that record unenriched.
///
/// # Errors
///
/// Returns transport-level failures; the records enriched so far keep their
/// merged fields.
pub(crate) async fn enrich_records<S: PlaceSource>(
    source: &S,
    run: &mut CollectionRun,
) -> Result<EnrichTotals, PlacesError> {
    let mut totals = EnrichTotals::default();

    for record in run.records_mut() {
        totals.requested += 1;
        match source.place_details(&record.place_id).await {
            Ok(Some(details)) => {
                record.apply_details(details);
                totals.enriched += 1;
            }
            Ok(None) => {
                tracing::debug!(place_id = %record.place_id, "details response had no result");
            }
            Err(e) if e.is_bad_response() => {
                tracing::warn!(place_id = %record.place_id, error = %e, "unusable details response");
                totals.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(totals)
}
