//! Demographic value tables. The customer demographics dimension is a
//! full cross product of these, so their sizes are load-bearing: the
//! table's static row count is 2 * 5 * 7 * 20 * 4 * 7 * 7 * 7.

use super::Distribution;

pub fn genders() -> Distribution {
    Distribution::uniform(vec!["M", "F"])
}

pub fn marital_statuses() -> Distribution {
    Distribution::uniform(vec!["M", "S", "D", "W", "U"])
}

pub fn education_levels() -> Distribution {
    Distribution::uniform(vec![
        "Primary",
        "Secondary",
        "College",
        "2 yr Degree",
        "4 yr Degree",
        "Advanced Degree",
        "Unknown",
    ])
}

/// Stored as strings; rows parse them back into purchase estimates.
pub fn purchase_bands() -> Distribution {
    Distribution::uniform(vec![
        "500", "1000", "1500", "2000", "2500", "3000", "3500", "4000", "4500", "5000", "5500",
        "6000", "6500", "7000", "7500", "8000", "8500", "9000", "9500", "10000",
    ])
}

pub fn credit_ratings() -> Distribution {
    Distribution::uniform(vec!["Low Risk", "Good", "High Risk", "Unknown"])
}

pub fn buy_potentials() -> Distribution {
    Distribution::uniform(vec![
        "0-500",
        "501-1000",
        "1001-5000",
        "5001-10000",
        ">10000",
        "Unknown",
    ])
}

pub fn location_types() -> Distribution {
    Distribution::uniform(vec!["apartment", "condo", "single family"])
}
