//! Row validation and routing.
//!
//! Each raw row runs through an ordered chain of checks; the first failing
//! check wins and the reasons are mutually exclusive. Every row lands in
//! exactly one of the two outcome streams, in input order.

use std::ops::RangeInclusive;

use tracing::debug;

use postal_model::{CleanRecord, RawRecord, RejectReason, RejectedRecord};

use crate::corrector::fix_district;
use crate::numeric::extract_float;
use crate::text::normalize_text;

/// Loose bounding box for Sri Lanka.
pub const LATITUDE_RANGE: RangeInclusive<f64> = 4.5..=10.5;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = 78.5..=83.5;

/// Terminal outcome for a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(CleanRecord),
    Rejected(RejectedRecord),
}

/// All rows of a run, split into the two output streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedRows {
    pub accepted: Vec<CleanRecord>,
    pub rejected: Vec<RejectedRecord>,
}

impl CleanedRows {
    /// Total number of routed rows across both streams.
    #[must_use]
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

/// Route a single raw row to its terminal outcome.
///
/// Check order: missing postal code, then numeric extraction of both
/// coordinates, then the bounds check. The district/area repair is applied
/// unconditionally before any outcome is produced, so rejected rows carry
/// corrected names too.
#[must_use]
pub fn route_record(raw: &RawRecord) -> RowOutcome {
    let postal_code = normalize_text(&raw.postal_code);
    let (area, district) = fix_district(&raw.area, &raw.district);

    if postal_code.is_empty() {
        return RowOutcome::Rejected(RejectedRecord {
            postal_code,
            area,
            district,
            latitude: normalize_text(&raw.latitude),
            longitude: normalize_text(&raw.longitude),
            reason: RejectReason::MissingPostalCode,
        });
    }

    let (Some(latitude), Some(longitude)) =
        (extract_float(&raw.latitude), extract_float(&raw.longitude))
    else {
        return RowOutcome::Rejected(RejectedRecord {
            postal_code,
            area,
            district,
            latitude: normalize_text(&raw.latitude),
            longitude: normalize_text(&raw.longitude),
            reason: RejectReason::NotNumeric,
        });
    };

    if !(LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude)) {
        return RowOutcome::Rejected(RejectedRecord {
            postal_code,
            area,
            district,
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            reason: RejectReason::OutOfBounds,
        });
    }

    RowOutcome::Accepted(CleanRecord {
        postal_code,
        area,
        district,
        latitude,
        longitude,
    })
}

/// Route every row, preserving input order within each stream.
#[must_use]
pub fn clean_records(rows: &[RawRecord]) -> CleanedRows {
    let mut cleaned = CleanedRows::default();
    let mut missing_postal_code = 0usize;
    let mut not_numeric = 0usize;
    let mut out_of_bounds = 0usize;

    for raw in rows {
        match route_record(raw) {
            RowOutcome::Accepted(record) => cleaned.accepted.push(record),
            RowOutcome::Rejected(record) => {
                match record.reason {
                    RejectReason::MissingPostalCode => missing_postal_code += 1,
                    RejectReason::NotNumeric => not_numeric += 1,
                    RejectReason::OutOfBounds => out_of_bounds += 1,
                }
                cleaned.rejected.push(record);
            }
        }
    }

    debug!(
        input_rows = rows.len(),
        accepted = cleaned.accepted.len(),
        missing_postal_code,
        not_numeric,
        out_of_bounds,
        "routing complete"
    );
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pc: &str, area: &str, district: &str, lat: &str, lon: &str) -> RawRecord {
        RawRecord {
            postal_code: pc.to_string(),
            area: area.to_string(),
            district: district.to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
        }
    }

    #[test]
    fn colombo_is_accepted() {
        let outcome = route_record(&raw("00500", "Colombo 5", "Colombo", "6.9271", "79.8612"));
        let RowOutcome::Accepted(record) = outcome else {
            panic!("expected accepted, got {outcome:?}");
        };
        assert_eq!(record.postal_code, "00500");
        assert_eq!(record.latitude, 6.9271);
        assert_eq!(record.longitude, 79.8612);
    }

    #[test]
    fn new_york_is_out_of_bounds() {
        let outcome = route_record(&raw("10001", "Manhattan", "New York", "40.0", "-74.0"));
        let RowOutcome::Rejected(record) = outcome else {
            panic!("expected rejected, got {outcome:?}");
        };
        assert_eq!(record.reason, RejectReason::OutOfBounds);
        // Out-of-bounds rows carry the parsed numbers, not the source text.
        assert_eq!(record.latitude, "40");
        assert_eq!(record.longitude, "-74");
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(matches!(
            route_record(&raw("1", "A", "B", "4.5", "78.5")),
            RowOutcome::Accepted(_)
        ));
        assert!(matches!(
            route_record(&raw("1", "A", "B", "10.5", "83.5")),
            RowOutcome::Accepted(_)
        ));
        assert!(matches!(
            route_record(&raw("1", "A", "B", "10.500001", "83.5")),
            RowOutcome::Rejected(_)
        ));
    }

    #[test]
    fn missing_postal_code_wins_over_valid_coordinates() {
        for pc in ["", "   ", "\t \u{07}"] {
            let outcome = route_record(&raw(pc, "Colombo 5", "Colombo", "6.9271", "79.8612"));
            let RowOutcome::Rejected(record) = outcome else {
                panic!("expected rejected for postal code {pc:?}");
            };
            assert_eq!(record.reason, RejectReason::MissingPostalCode);
            assert_eq!(record.postal_code, "");
            // Coordinates stay as normalized text at this stage.
            assert_eq!(record.latitude, "6.9271");
            assert_eq!(record.longitude, "79.8612");
        }
    }

    #[test]
    fn non_numeric_coordinate_rejects_with_normalized_text() {
        let outcome = route_record(&raw("80000", "Galle", "Galle", " north ", "80.2"));
        let RowOutcome::Rejected(record) = outcome else {
            panic!("expected rejected");
        };
        assert_eq!(record.reason, RejectReason::NotNumeric);
        assert_eq!(record.latitude, "north");
        assert_eq!(record.longitude, "80.2");
    }

    #[test]
    fn rejected_rows_still_carry_corrected_district() {
        let outcome = route_record(&raw("", "Badulla Nuwara", "Eliya", "x", "y"));
        let RowOutcome::Rejected(record) = outcome else {
            panic!("expected rejected");
        };
        assert_eq!(record.area, "Badulla");
        assert_eq!(record.district, "Nuwara Eliya");
    }

    #[test]
    fn clean_records_conserves_rows_and_order() {
        let rows = vec![
            raw("00100", "Colombo 1", "Colombo", "6.93", "79.84"),
            raw("", "Kandy", "Kandy", "7.29", "80.63"),
            raw("90000", "Batticaloa", "Batticaloa", "7.71", "81.69"),
            raw("10001", "Manhattan", "New York", "40.0", "-74.0"),
        ];
        let cleaned = clean_records(&rows);

        assert_eq!(cleaned.total(), rows.len());
        assert_eq!(cleaned.accepted.len(), 2);
        assert_eq!(cleaned.rejected.len(), 2);
        assert_eq!(cleaned.accepted[0].postal_code, "00100");
        assert_eq!(cleaned.accepted[1].postal_code, "90000");
        assert_eq!(cleaned.rejected[0].reason, RejectReason::MissingPostalCode);
        assert_eq!(cleaned.rejected[1].reason, RejectReason::OutOfBounds);
    }
}
