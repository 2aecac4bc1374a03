//! Repair for a recurring data-entry defect around the Nuwara Eliya district.
//!
//! Source rows frequently split the two-word district name across columns:
//! the trailing "Nuwara" sticks to the Area value and "Eliya" lands in the
//! District column. The repair is a hardcoded rule targeting exactly that
//! split, deliberately not generalized.

use crate::text::normalize_text;

const DISTRICT_FIX: &str = "Nuwara Eliya";
const AREA_SUFFIX: &str = " Nuwara";

/// Normalize `area` and `district`, then apply the split-word repair.
///
/// The district rewrite and the area suffix strip run independently on every
/// call; neither is gated on the other having triggered. A district already
/// reading "Nuwara Eliya" matches none of the conditions and passes through
/// unchanged.
#[must_use]
pub fn fix_district(area: &str, district: &str) -> (String, String) {
    let area = normalize_text(area);
    let mut district = normalize_text(district);

    if district == "Eliya" || district.ends_with(" Eliya") || district.starts_with("Eliya ") {
        district = DISTRICT_FIX.to_string();
    }

    let area = match area.strip_suffix(AREA_SUFFIX) {
        Some(rest) => rest.trim().to_string(),
        None => area,
    };

    (area, district)
}
