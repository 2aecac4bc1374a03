//! Row normalization and validation for postal-code records.
//!
//! Four stateless transforms composed into a single linear pass:
//! [`text::normalize_text`], [`corrector::fix_district`],
//! [`numeric::extract_float`], and the router in [`validate`].

pub mod corrector;
pub mod numeric;
pub mod text;
pub mod validate;

pub use corrector::fix_district;
pub use numeric::extract_float;
pub use text::normalize_text;
pub use validate::{
    CleanedRows, LATITUDE_RANGE, LONGITUDE_RANGE, RowOutcome, clean_records, route_record,
};
