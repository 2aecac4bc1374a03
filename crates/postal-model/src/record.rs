//! Record types flowing through the cleaning pipeline.
//!
//! A [`RawRecord`] is built once per input row, consumed by the router, and
//! turned into either a [`CleanRecord`] or a [`RejectedRecord`]. The reason
//! strings on [`RejectReason`] are part of the observable output contract
//! and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Input/output column names, looked up by name rather than position.
pub const POSTAL_CODE_COLUMN: &str = "Postal Code";
pub const AREA_COLUMN: &str = "Area";
pub const DISTRICT_COLUMN: &str = "District";
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const REASON_COLUMN: &str = "Reason";

/// Header of the accepted output stream.
pub const ACCEPTED_HEADER: [&str; 5] = [
    POSTAL_CODE_COLUMN,
    AREA_COLUMN,
    DISTRICT_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
];

/// Header of the rejected output stream.
pub const REJECTED_HEADER: [&str; 6] = [
    POSTAL_CODE_COLUMN,
    AREA_COLUMN,
    DISTRICT_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    REASON_COLUMN,
];

/// One row exactly as read from the source table.
///
/// Fields may be empty and may carry control characters or stray whitespace;
/// nothing is normalized at this stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub postal_code: String,
    pub area: String,
    pub district: String,
    pub latitude: String,
    pub longitude: String,
}

/// A validated row.
///
/// Invariants: `postal_code` is non-empty, `latitude` lies in [4.5, 10.5]
/// and `longitude` in [78.5, 83.5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub postal_code: String,
    pub area: String,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CleanRecord {
    /// Latitude rendered with exactly six decimal places, as written to the
    /// accepted stream.
    #[must_use]
    pub fn latitude_text(&self) -> String {
        format!("{:.6}", self.latitude)
    }

    /// Longitude rendered with exactly six decimal places.
    #[must_use]
    pub fn longitude_text(&self) -> String {
        format!("{:.6}", self.longitude)
    }
}

/// A row routed to the rejected stream.
///
/// `latitude` and `longitude` hold the normalized original text when the
/// reason is [`RejectReason::MissingPostalCode`] or
/// [`RejectReason::NotNumeric`], and the plain numeric rendering when the
/// reason is [`RejectReason::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub postal_code: String,
    pub area: String,
    pub district: String,
    pub latitude: String,
    pub longitude: String,
    pub reason: RejectReason,
}

/// The closed set of row-level rejection reasons, first-applicable-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Postal code empty after normalization.
    #[serde(rename = "missing postal code")]
    MissingPostalCode,
    /// Latitude or longitude yielded no numeric value.
    #[serde(rename = "lat/lon not numeric")]
    NotNumeric,
    /// Coordinates parsed but fell outside the geographic bounding box.
    #[serde(rename = "out of bounds")]
    OutOfBounds,
}

impl RejectReason {
    /// The literal reason text written to the rejected stream.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::MissingPostalCode => "missing postal code",
            RejectReason::NotNumeric => "lat/lon not numeric",
            RejectReason::OutOfBounds => "out of bounds",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RejectReason {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "missing postal code" => Ok(RejectReason::MissingPostalCode),
            "lat/lon not numeric" => Ok(RejectReason::NotNumeric),
            "out of bounds" => Ok(RejectReason::OutOfBounds),
            other => Err(ModelError::UnknownReason(other.to_string())),
        }
    }
}
