//! Property tests for the pure transforms.

use proptest::prelude::*;

use postal_core::{RowOutcome, extract_float, normalize_text, route_record};
use postal_model::RawRecord;

proptest! {
    #[test]
    fn normalize_is_idempotent(input in "\\PC{0,60}") {
        let once = normalize_text(&input);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn normalized_text_has_no_edge_or_double_spaces(input in ".{0,60}") {
        let normalized = normalize_text(&input);
        prop_assert!(!normalized.starts_with(' '));
        prop_assert!(!normalized.ends_with(' '));
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn six_decimal_rendering_parses_back(lat in 4.5f64..=10.5, lon in 78.5f64..=83.5) {
        let lat_text = format!("{lat:.6}");
        let lon_text = format!("{lon:.6}");
        let lat_back = extract_float(&lat_text).expect("latitude parses");
        let lon_back = extract_float(&lon_text).expect("longitude parses");
        prop_assert!((lat_back - lat).abs() < 1e-6);
        prop_assert!((lon_back - lon).abs() < 1e-6);
    }

    #[test]
    fn in_bounds_rows_with_postal_code_are_accepted(
        lat in 4.5f64..=10.5,
        lon in 78.5f64..=83.5,
    ) {
        let raw = RawRecord {
            postal_code: "00100".to_string(),
            area: "Colombo 1".to_string(),
            district: "Colombo".to_string(),
            latitude: format!("{lat:.6}"),
            longitude: format!("{lon:.6}"),
        };
        prop_assert!(matches!(route_record(&raw), RowOutcome::Accepted(_)));
    }
}
