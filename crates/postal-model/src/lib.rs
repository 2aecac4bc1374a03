pub mod error;
pub mod record;

pub use error::{ModelError, Result};
pub use record::{
    ACCEPTED_HEADER, AREA_COLUMN, CleanRecord, DISTRICT_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN,
    POSTAL_CODE_COLUMN, REASON_COLUMN, REJECTED_HEADER, RawRecord, RejectReason, RejectedRecord,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_strings_are_fixed() {
        assert_eq!(RejectReason::MissingPostalCode.as_str(), "missing postal code");
        assert_eq!(RejectReason::NotNumeric.as_str(), "lat/lon not numeric");
        assert_eq!(RejectReason::OutOfBounds.as_str(), "out of bounds");
    }

    #[test]
    fn reason_parses_back_from_display() {
        for reason in [
            RejectReason::MissingPostalCode,
            RejectReason::NotNumeric,
            RejectReason::OutOfBounds,
        ] {
            let parsed: RejectReason = reason.to_string().parse().expect("parse reason");
            assert_eq!(parsed, reason);
        }
        assert!("not a reason".parse::<RejectReason>().is_err());
    }

    #[test]
    fn coordinates_render_with_six_decimals() {
        let record = CleanRecord {
            postal_code: "10350".to_string(),
            area: "Colombo 5".to_string(),
            district: "Colombo".to_string(),
            latitude: 6.9271,
            longitude: 79.8612,
        };
        assert_eq!(record.latitude_text(), "6.927100");
        assert_eq!(record.longitude_text(), "79.861200");
    }
}
