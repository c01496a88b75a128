//! Return reason table, read sequentially by surrogate key. The table
//! must hold at least as many entries as the reason dimension's row
//! count at the largest scale.

use super::Distribution;

const RETURN_REASONS: &[&str] = &[
    "Package was damaged",
    "Stopped working",
    "Did not get it on time",
    "Not the product that was ordered",
    "Parts missing",
    "Does not work with a product that I have",
    "Gift exchange",
    "Did not like the color",
    "Did not like the make of the product",
    "Did not know I ordered it",
    "Found a better price in a store",
    "Found a better extended warranty in a store",
    "Wrong size",
    "Lost my job",
    "Ordered twice by mistake",
    "No longer needed",
    "Duplicate gift",
    "Arrived too late",
    "Changed my mind",
    "Item was recalled",
    "Did not fit",
    "Quality not as expected",
    "Bought as a backup",
    "Incompatible accessory",
    "Wrong model delivered",
    "Packaging was opened",
    "Instructions missing",
    "Battery did not hold charge",
    "Color faded after washing",
    "Shrank after washing",
    "Too heavy to use",
    "Too difficult to assemble",
    "Missed the rebate deadline",
    "Better product released",
    "Allergic reaction",
    "Did not match the description",
    "Screen was scratched",
    "Motor was noisy",
    "Seams came apart",
    "Zipper was broken",
    "Handle came loose",
    "Finish was chipped",
    "Smelled of chemicals",
    "Could not register the warranty",
    "Power cord too short",
    "Remote control missing",
    "Manual in wrong language",
    "Did not work outdoors",
    "Stitching came undone",
    "Lens was cracked",
    "Buttons fell off",
    "Fabric was torn",
    "Wheel was bent",
    "Chain kept slipping",
    "Strap was too short",
    "Bulb burned out immediately",
    "Software would not install",
    "Charger overheated",
    "Antenna would not extend",
    "Latch would not close",
    "Keys stuck",
    "Lid did not seal",
    "Blade was dull",
    "Frame was warped",
    "Glass was cloudy",
    "Thread count mislabeled",
    "Scale was inaccurate",
    "Timer did not work",
    "Alarm was too quiet",
    "Filter was missing",
    "Hose leaked",
    "Valve was stuck",
    "Gauge read wrong",
    "Spring was broken",
    "Clip would not hold",
];

pub fn return_reasons() -> Distribution {
    Distribution::uniform(RETURN_REASONS.to_vec())
}
