//! Item hierarchy and attribute tables.

use super::Distribution;
use crate::decimal::Decimal;
use crate::rng::RandomNumberStream;
use crate::value_generator::generate_uniform_random_int;

/// Category table entry: (name, carries sizes).
const CATEGORIES: &[(&str, bool)] = &[
    ("Women", true),
    ("Men", true),
    ("Children", true),
    ("Shoes", true),
    ("Music", false),
    ("Jewelry", false),
    ("Home", false),
    ("Sports", false),
    ("Books", false),
    ("Electronics", false),
];

/// Classes per category, parallel to CATEGORIES: (name, brand count).
const CATEGORY_CLASSES: &[&[(&str, i32)]] = &[
    &[("dresses", 6), ("fragrances", 4), ("maternity", 3), ("swimwear", 5)],
    &[("accessories", 4), ("pants", 5), ("shirts", 6), ("sportswear", 4)],
    &[("infants", 3), ("newborn", 3), ("school-uniforms", 2), ("toddlers", 4)],
    &[("athletic", 6), ("kids", 4), ("mens", 5), ("womens", 5)],
    &[("classical", 3), ("country", 4), ("pop", 6), ("rock", 6)],
    &[("costume", 4), ("diamonds", 3), ("gold", 4), ("pendants", 3), ("rings", 4), ("womens watch", 3)],
    &[("bathroom", 4), ("bedding", 5), ("curtains/drapes", 3), ("decor", 5), ("furniture", 6), ("lighting", 4)],
    &[("baseball", 4), ("basketball", 4), ("camping", 5), ("fishing", 4), ("fitness", 5), ("golf", 5)],
    &[("business", 3), ("cooking", 4), ("fiction", 6), ("history", 3), ("romance", 5), ("travel", 4)],
    &[("audio", 5), ("cameras", 4), ("memory", 3), ("monitors", 3), ("portable", 5), ("televisions", 6)],
];

const COLORS: &[&str] = &[
    "almond", "antique", "aquamarine", "azure", "beige", "bisque", "black", "blue", "blush",
    "brown", "burlywood", "burnished", "chartreuse", "chiffon", "chocolate", "coral", "cornflower",
    "cream", "cyan", "dark", "deep", "dim", "dodger", "drab", "firebrick", "forest", "frosted",
    "gainsboro", "ghost", "goldenrod", "green", "grey", "honeydew", "hot", "indian", "ivory",
    "khaki", "lace", "lavender", "lawn", "lemon", "light", "lime", "linen", "magenta", "maroon",
    "medium", "metallic", "midnight", "mint", "misty", "moccasin", "navajo", "navy", "olive",
    "orange", "orchid", "pale", "papaya", "peach", "peru", "pink", "plum", "powder", "puff",
    "purple", "red", "rose", "rosy", "royal", "saddle", "salmon", "sandy", "seashell", "sienna",
    "sky", "slate", "smoke", "snow", "spring", "steel", "tan", "thistle", "tomato", "turquoise",
    "violet", "wheat", "white", "yellow",
];

/// Weight sets for colors.
pub const COLORS_UNIFORM: usize = 0;
pub const COLORS_SKEWED: usize = 1;

const UNITS: &[&str] = &[
    "Unknown", "Each", "Dozen", "Case", "Pound", "Ounce", "Pallet", "Gross", "Box", "Bunch",
    "Bundle", "Carton", "Cup", "Dram", "Gram", "Lb", "N/A", "Oz", "Tbl", "Ton", "Tsp",
];

const SIZES: &[&str] = &["N/A", "petite", "small", "medium", "large", "extra large", "economy"];

/// Weight sets for sizes.
pub const SIZES_NO_SIZE: usize = 0;
pub const SIZES_SIZED: usize = 1;

/// Closed id ranges with selection weights.
const MANAGER_ID_RANGES: &[(i32, i32, i32)] =
    &[(1, 20, 30), (21, 40, 30), (41, 60, 20), (61, 80, 12), (81, 100, 8)];

const MANUFACT_ID_RANGES: &[(i32, i32, i32)] =
    &[(1, 200, 30), (201, 400, 25), (401, 600, 20), (601, 800, 15), (801, 1000, 10)];

/// Current price bands as (low cents, high cents, weight).
const CURRENT_PRICE_RANGES: &[(i32, i32, i32)] = &[
    (9, 499, 30),
    (500, 999, 30),
    (1000, 9999, 25),
    (10000, 99999, 15),
];

pub struct ItemsDistributions {
    categories: Distribution,
    has_size: Vec<bool>,
    classes: Vec<Distribution>,
    class_brand_counts: Vec<Vec<i32>>,
    colors: Distribution,
    units: Distribution,
    sizes: Distribution,
    brand_syllables: Distribution,
}

pub struct CategoryClass {
    pub id: i64,
    pub name: &'static str,
    pub brand_count: i32,
}

impl ItemsDistributions {
    pub fn new() -> Self {
        let category_names = CATEGORIES.iter().map(|&(name, _)| name).collect();
        let classes = CATEGORY_CLASSES
            .iter()
            .map(|classes| Distribution::uniform(classes.iter().map(|&(name, _)| name).collect()))
            .collect();
        let class_brand_counts = CATEGORY_CLASSES
            .iter()
            .map(|classes| classes.iter().map(|&(_, brands)| brands).collect())
            .collect();
        // First color set uniform, second front-loaded toward the
        // common colors at the start of the table.
        let uniform: Vec<i32> = vec![1; COLORS.len()];
        let skewed: Vec<i32> = (0..COLORS.len())
            .map(|i| if i < 16 { 8 } else { 1 })
            .collect();
        let no_size: Vec<i32> = SIZES.iter().map(|&s| i32::from(s == "N/A")).collect();
        let sized: Vec<i32> = SIZES.iter().map(|&s| if s == "N/A" { 0 } else { 1 }).collect();
        Self {
            categories: Distribution::uniform(category_names),
            has_size: CATEGORIES.iter().map(|&(_, sized)| sized).collect(),
            classes,
            class_brand_counts,
            colors: Distribution::new(COLORS.to_vec(), &[&uniform, &skewed]),
            units: Distribution::uniform(UNITS.to_vec()),
            sizes: Distribution::new(SIZES.to_vec(), &[&no_size, &sized]),
            brand_syllables: Distribution::uniform(super::english::SYLLABLES.to_vec()),
        }
    }

    pub fn pick_random_category_index(&self, stream: &mut RandomNumberStream) -> usize {
        self.categories.pick_random_index(0, stream)
    }

    pub fn category_at(&self, index: usize) -> &'static str {
        self.categories.value_at(index)
    }

    pub fn category_has_size(&self, index: usize) -> bool {
        self.has_size[index]
    }

    pub fn pick_random_category_class(
        &self,
        category_index: usize,
        stream: &mut RandomNumberStream,
    ) -> CategoryClass {
        let classes = &self.classes[category_index];
        let index = classes.pick_random_index(0, stream);
        CategoryClass {
            id: index as i64 + 1,
            name: classes.value_at(index),
            brand_count: self.class_brand_counts[category_index][index],
        }
    }

    pub fn pick_random_color(&self, weight_set: usize, stream: &mut RandomNumberStream) -> &'static str {
        self.colors.pick_random_value(weight_set, stream)
    }

    pub fn pick_random_unit(&self, stream: &mut RandomNumberStream) -> &'static str {
        self.units.pick_random_value(0, stream)
    }

    pub fn pick_random_size(&self, weight_set: usize, stream: &mut RandomNumberStream) -> &'static str {
        self.sizes.pick_random_value(weight_set, stream)
    }

    pub fn brand_syllables(&self) -> &Distribution {
        &self.brand_syllables
    }

    /// One draw; returns a closed (min, max) manager id range.
    pub fn pick_random_manager_id_range(&self, stream: &mut RandomNumberStream) -> (i32, i32) {
        pick_range(MANAGER_ID_RANGES, stream)
    }

    pub fn pick_random_manufact_id_range(&self, stream: &mut RandomNumberStream) -> (i32, i32) {
        pick_range(MANUFACT_ID_RANGES, stream)
    }

    /// One draw; returns a (min, max) price band in cents-precision decimals.
    pub fn pick_random_current_price_range(&self, stream: &mut RandomNumberStream) -> (Decimal, Decimal) {
        let (low, high) = pick_range(CURRENT_PRICE_RANGES, stream);
        (Decimal::new(i64::from(low), 2), Decimal::new(i64::from(high), 2))
    }
}

impl Default for ItemsDistributions {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_range(ranges: &[(i32, i32, i32)], stream: &mut RandomNumberStream) -> (i32, i32) {
    let total: i32 = ranges.iter().map(|&(_, _, w)| w).sum();
    let weight = generate_uniform_random_int(1, total, stream);
    let mut cumulative = 0;
    let mut picked = (0, 0);
    for &(low, high, band_weight) in ranges {
        picked = (low, high);
        cumulative += band_weight;
        if weight <= cumulative {
            break;
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_bands_come_back_as_cent_decimals() {
        let items = ItemsDistributions::new();
        let mut stream = RandomNumberStream::new(216, 2);
        let bands = [
            ("0.09", "4.99"),
            ("5.00", "9.99"),
            ("10.00", "99.99"),
            ("100.00", "999.99"),
        ];
        for _ in 0..200 {
            let (low, high) = items.pick_random_current_price_range(&mut stream);
            let picked = (low.to_string(), high.to_string());
            assert!(
                bands.iter().any(|&(l, h)| picked.0 == l && picked.1 == h),
                "unexpected price band {picked:?}"
            );
        }
    }

    #[test]
    fn id_ranges_respect_their_bounds() {
        let items = ItemsDistributions::new();
        let mut stream = RandomNumberStream::new(211, 2);
        for _ in 0..200 {
            let (low, high) = items.pick_random_manager_id_range(&mut stream);
            assert!(low >= 1 && high <= 100 && low < high);
            let (low, high) = items.pick_random_manufact_id_range(&mut stream);
            assert!(low >= 1 && high <= 1000 && low < high);
        }
    }
}
