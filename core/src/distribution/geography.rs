//! Street, city and county tables backing address synthesis.

use super::Distribution;

pub const STREET_NAMES: &[&str] = &[
    "", "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th", "11th", "12th",
    "13th", "14th", "15th", "Adams", "Ash", "Birch", "Broadway", "Cedar", "Center", "Cherry",
    "Chestnut", "Church", "College", "Davis", "Dogwood", "East", "Elm", "First", "Forest",
    "Fourth", "Franklin", "Green", "Highland", "Hickory", "Hill", "Hillcrest", "Jackson",
    "Jefferson", "Johnson", "Lake", "Lakeview", "Laurel", "Lee", "Lincoln", "Locust", "Madison",
    "Main", "Maple", "Meadow", "Mill", "Miller", "North", "Oak", "Park", "Pine", "Poplar",
    "Railroad", "Ridge", "River", "Second", "Smith", "South", "Spring", "Spruce", "Sunset",
    "Sycamore", "Third", "Valley", "View", "Walnut", "Washington", "West", "Williams", "Willow",
    "Wilson", "Woodland",
];

pub const STREET_TYPES: &[&str] = &[
    "Street", "ST", "Avenue", "Ave", "Boulevard", "Blvd", "Road", "RD", "Drive", "Dr", "Lane",
    "Ln", "Court", "Ct", "Circle", "Cir", "Parkway", "Pkwy", "Way", "Wy",
];

pub const CITIES: &[&str] = &[
    "Fairview", "Midway", "Oak Grove", "Five Points", "Oakland", "Riverview", "Salem",
    "Centerville", "Pleasant Hill", "Liberty", "Mount Pleasant", "Greenville", "Franklin",
    "Springfield", "Glendale", "Union", "Wilson", "Riverside", "Bethel", "Clinton", "Lakeview",
    "Marion", "Greenwood", "Ashland", "Antioch", "Concord", "Spring Hill", "Georgetown",
    "Sunnyside", "Mount Olive", "Kingston", "Florence", "Hillcrest", "Shady Grove", "Woodville",
    "Oakdale", "Harmony", "Highland Park", "Pine Grove", "Crossroads", "Jamestown", "Summit",
    "Red Hill", "Deerfield", "Stringtown", "Mountain View", "Friendship", "Arlington", "Enterprise",
    "Lincoln", "Hopewell", "Macedonia", "Newport", "Unionville", "Bridgeport", "Waterloo",
    "Plainview", "Pleasant Valley", "Edgewood", "Farmington",
];

/// (county, state, zip prefix, gmt offset).
pub const COUNTIES: &[(&str, &str, i32, i32)] = &[
    ("Williamson County", "TN", 38, -5),
    ("Walker County", "GA", 30, -5),
    ("Ziebach County", "SD", 57, -6),
    ("Luce County", "MI", 49, -5),
    ("Richland County", "OH", 44, -5),
    ("Barrow County", "GA", 31, -5),
    ("Fairfield County", "OH", 43, -5),
    ("Maverick County", "TX", 78, -6),
    ("Mobile County", "AL", 36, -6),
    ("Levy County", "FL", 32, -5),
    ("Orange County", "CA", 92, -8),
    ("Jackson County", "MO", 64, -6),
    ("Kittitas County", "WA", 98, -8),
    ("Mesa County", "CO", 81, -7),
    ("Pennington County", "SD", 57, -7),
    ("Dauphin County", "PA", 17, -5),
    ("Lunenburg County", "VA", 23, -5),
    ("Perry County", "MS", 39, -6),
    ("Huron County", "MI", 48, -5),
    ("Franklin Parish", "LA", 71, -6),
    ("Daviess County", "IN", 47, -5),
    ("San Miguel County", "NM", 87, -7),
    ("Pierce County", "NE", 68, -6),
    ("Bronx County", "NY", 10, -5),
    ("Sioux County", "IA", 51, -6),
];

pub fn street_names() -> Distribution {
    Distribution::uniform(STREET_NAMES.to_vec())
}

pub fn street_types() -> Distribution {
    Distribution::uniform(STREET_TYPES.to_vec())
}

pub fn cities() -> Distribution {
    // Larger towns near the front of the table carry more weight.
    let weights: Vec<i32> = (0..CITIES.len())
        .map(|i| if i < 20 { 4 } else { 1 })
        .collect();
    Distribution::new(CITIES.to_vec(), &[&weights])
}

pub fn county_count() -> usize {
    COUNTIES.len()
}
