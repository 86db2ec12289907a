//! The `collect` command: search, enrich, export.
//!
//! The two stages run strictly one after the other on a single
//! [`CollectionRun`]; every request is awaited before the next one is sent.

mod enrich;
mod search;

use std::time::Duration;

use anyhow::Context;

use places_client::{PlaceSource, PlacesClient};
use places_core::{AppConfig, CollectionRun};

use enrich::enrich_records;
use search::search_all;

/// Run the full collection described by `config` and write the spreadsheet.
///
/// When `dry_run` is `true` the records are summarized on stdout instead.
///
/// # Errors
///
/// Returns an error if the API key cannot be read, the client cannot be
/// built, a request fails at the transport level, or the export fails.
pub(crate) async fn run_collect(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let api_key = places_core::load_api_key(&config.api_key_path)?;
    let client = PlacesClient::with_base_url(
        &api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
    .context("failed to build places client")?;

    let run = collect_places(&client, config).await?;

    if dry_run {
        println!(
            "dry run: {} places rated >= {} would be written to {}",
            run.records().len(),
            run.min_rating(),
            config.output_path.display()
        );
        for record in run.records() {
            println!(
                "  {} | {} | {} (bayesian {:.2}, {} reviews)",
                record.place_id,
                record.name.as_deref().unwrap_or("-"),
                record.rating,
                record.bayesian_rating,
                record
                    .review_count
                    .map_or_else(|| "?".to_owned(), |n| n.to_string())
            );
        }
        return Ok(());
    }

    crate::export::write_records(&config.output_path, run.records())?;
    tracing::info!(
        path = %config.output_path.display(),
        records = run.records().len(),
        "spreadsheet written"
    );
    Ok(())
}

/// Search every configured keyword, then enrich every admitted record.
///
/// # Errors
///
/// Propagates transport-level failures from either stage.
pub(crate) async fn collect_places<S: PlaceSource>(
    source: &S,
    config: &AppConfig,
) -> anyhow::Result<CollectionRun> {
    let mut run = CollectionRun::new(config.min_rating)
        .with_min_reviews(config.min_reviews)
        .with_prior_reviews(config.bayes_prior_reviews)
        .with_limit(config.limit);
    let page_delay = Duration::from_millis(config.page_delay_ms);

    let search = search_all(source, &config.area, &config.keywords, page_delay, &mut run)
        .await
        .context("search stage failed")?;
    let enrich = enrich_records(source, &mut run)
        .await
        .context("enrichment stage failed")?;

    tracing::info!(
        keywords = config.keywords.len(),
        pages = search.pages,
        seen = run.seen_count(),
        admitted = run.records().len(),
        details_requested = enrich.requested,
        enriched = enrich.enriched,
        details_failed = enrich.failed,
        "collection run complete"
    );
    Ok(run)
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
