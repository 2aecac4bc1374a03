//! CSV reading into raw postal records.
//!
//! Columns are located by header name, not position. A column the header
//! does not name, or a row shorter than the header, degrades to empty text
//! for that field; extra columns are ignored.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use postal_model::{
    AREA_COLUMN, DISTRICT_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, POSTAL_CODE_COLUMN, RawRecord,
};

use crate::decode::decode_lossy;

/// Positions of the recognized columns within the header row.
#[derive(Debug, Clone, Copy, Default)]
struct ColumnIndex {
    postal_code: Option<usize>,
    area: Option<usize>,
    district: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

impl ColumnIndex {
    fn from_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Self {
        let mut index = ColumnIndex::default();
        for (position, header) in headers.enumerate() {
            match normalize_header(header) {
                POSTAL_CODE_COLUMN => index.postal_code.get_or_insert(position),
                AREA_COLUMN => index.area.get_or_insert(position),
                DISTRICT_COLUMN => index.district.get_or_insert(position),
                LATITUDE_COLUMN => index.latitude.get_or_insert(position),
                LONGITUDE_COLUMN => index.longitude.get_or_insert(position),
                _ => continue,
            };
        }
        index
    }
}

fn field(record: &csv::StringRecord, position: Option<usize>) -> String {
    position
        .and_then(|idx| record.get(idx))
        .unwrap_or("")
        .to_string()
}

/// Sanitize `raw` bytes and parse them as a headered CSV table, yielding one
/// [`RawRecord`] per data row in input order.
///
/// # Errors
///
/// Returns an error when the CSV structure itself cannot be parsed; field
/// level noise never fails.
pub fn parse_records(raw: &[u8]) -> Result<Vec<RawRecord>> {
    let text = decode_lossy(raw);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers().context("read csv header")?.clone();
    let index = ColumnIndex::from_headers(headers.iter());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        rows.push(RawRecord {
            postal_code: field(&record, index.postal_code),
            area: field(&record, index.area),
            district: field(&record, index.district),
            latitude: field(&record, index.latitude),
            longitude: field(&record, index.longitude),
        });
    }
    debug!(row_count = rows.len(), "csv table parsed");
    Ok(rows)
}
