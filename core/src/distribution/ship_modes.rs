//! Ship mode tables. The dimension's 20 rows walk the cross product of
//! types and codes in index order, with one carrier per row.

use super::Distribution;

const TYPES: &[&str] = &["EXPRESS", "AIR", "SURFACE", "SEA", "OVERNIGHT"];

const CODES: &[&str] = &["AIR", "SURFACE", "SEA", "LIBRARY"];

const CARRIERS: &[&str] = &[
    "UPS", "FEDEX", "AIRBORNE", "USPS", "DHL", "TBS", "ZHOU", "PRIVATECARRIER", "MSC", "LATVIAN",
    "ALLIANCE", "ORIENTAL", "BARIAN", "BOXBUNDLES", "ZOUROS", "GERMA", "DIAMOND", "RUPEKSA",
    "GREAT EASTERN", "HARMSTORF",
];

pub fn ship_mode_types() -> Distribution {
    Distribution::uniform(TYPES.to_vec())
}

pub fn ship_mode_codes() -> Distribution {
    Distribution::uniform(CODES.to_vec())
}

pub fn ship_mode_carriers() -> Distribution {
    Distribution::uniform(CARRIERS.to_vec())
}
