//! Spreadsheet export of the final record collection.
//!
//! Writes CSV with a header row. The three detail columns are included only
//! when at least one record carries that field, so a run whose enrichment
//! produced no websites has no `website` column at all.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use places_core::PlaceRecord;

const BASE_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "rating",
    "bayesian_rating",
    "review_count",
    "types",
];

/// Joins category tags inside a single cell.
const TYPES_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailColumn {
    OpeningHours,
    Website,
    MapsUrl,
}

impl DetailColumn {
    const ALL: [DetailColumn; 3] = [
        DetailColumn::OpeningHours,
        DetailColumn::Website,
        DetailColumn::MapsUrl,
    ];

    fn header(self) -> &'static str {
        match self {
            DetailColumn::OpeningHours => "opening_hours",
            DetailColumn::Website => "website",
            DetailColumn::MapsUrl => "maps_url",
        }
    }

    fn value(self, record: &PlaceRecord) -> Option<&str> {
        match self {
            DetailColumn::OpeningHours => record.opening_hours.as_deref(),
            DetailColumn::Website => record.website.as_deref(),
            DetailColumn::MapsUrl => record.maps_url.as_deref(),
        }
    }
}

/// Write `records` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_records(path: &Path, records: &[PlaceRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(file, records).with_context(|| format!("failed to write {}", path.display()))
}

/// Serialize `records` as CSV into `writer`, one row per record in order.
///
/// # Errors
///
/// Returns [`csv::Error`] on I/O failure.
pub(crate) fn write_csv<W: Write>(writer: W, records: &[PlaceRecord]) -> Result<(), csv::Error> {
    let detail_columns: Vec<DetailColumn> = DetailColumn::ALL
        .into_iter()
        .filter(|column| records.iter().any(|r| column.value(r).is_some()))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    header.extend(detail_columns.iter().map(|c| c.header()));
    wtr.write_record(&header)?;

    for record in records {
        let mut row: Vec<String> = vec![
            record.place_id.clone(),
            record.name.clone().unwrap_or_default(),
            record.rating.to_string(),
            format!("{:.2}", record.bayesian_rating),
            record
                .review_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            record.types.join(TYPES_SEPARATOR),
        ];
        row.extend(
            detail_columns
                .iter()
                .map(|c| c.value(record).unwrap_or_default().to_owned()),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
