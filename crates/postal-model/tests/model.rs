//! Serialization behavior of the record model.

use postal_model::{CleanRecord, RejectReason, RejectedRecord};

#[test]
fn clean_record_round_trips_through_json() {
    let record = CleanRecord {
        postal_code: "20000".to_string(),
        area: "Kandy".to_string(),
        district: "Kandy".to_string(),
        latitude: 7.2906,
        longitude: 80.6337,
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: CleanRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn reject_reason_serializes_as_contract_string() {
    let record = RejectedRecord {
        postal_code: "".to_string(),
        area: "Galle".to_string(),
        district: "Galle".to_string(),
        latitude: "6.0535".to_string(),
        longitude: "80.2210".to_string(),
        reason: RejectReason::MissingPostalCode,
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains("\"missing postal code\""));

    let round: RejectedRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round.reason, RejectReason::MissingPostalCode);
}
