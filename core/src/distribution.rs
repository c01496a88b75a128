//! Weighted categorical value tables.
//!
//! A Distribution is an ordered list of values with one or more weight
//! sets. Random picks draw a single uniform value from the stream and
//! binary-search the cumulative weights, so every pick costs exactly
//! one seed. Sequential lookups by index cost none.
//!
//! The embedded tables live in the submodules; they are fixed data and
//! must never be reordered once a dataset has been published.

pub mod calendar;
pub mod demographics;
pub mod english;
pub mod geography;
pub mod items;
pub mod reasons;
pub mod ship_modes;

use crate::rng::RandomNumberStream;
use crate::value_generator::generate_uniform_random_int;

pub struct Distribution {
    values: Vec<&'static str>,
    cumulative_weights: Vec<Vec<i32>>,
}

impl Distribution {
    pub fn new(values: Vec<&'static str>, weight_sets: &[&[i32]]) -> Self {
        let cumulative_weights = weight_sets
            .iter()
            .map(|weights| {
                assert_eq!(weights.len(), values.len(), "weight set size mismatch");
                let mut total = 0;
                weights
                    .iter()
                    .map(|w| {
                        total += w;
                        total
                    })
                    .collect()
            })
            .collect();
        Self { values, cumulative_weights }
    }

    /// Single uniform weight set.
    pub fn uniform(values: Vec<&'static str>) -> Self {
        let weights = vec![1; values.len()];
        Self::new(values, &[&weights])
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn value_at(&self, index: usize) -> &'static str {
        self.values[index]
    }

    pub fn value_for_index_mod_size(&self, index: i64) -> &'static str {
        self.values[(index % self.values.len() as i64) as usize]
    }

    /// One stream draw, weighted by the given weight set.
    pub fn pick_random_index(&self, weight_set: usize, stream: &mut RandomNumberStream) -> usize {
        let cumulative = &self.cumulative_weights[weight_set];
        let max_weight = *cumulative.last().unwrap_or(&1);
        let weight = generate_uniform_random_int(1, max_weight, stream);
        cumulative.partition_point(|&total| total < weight)
    }

    pub fn pick_random_value(&self, weight_set: usize, stream: &mut RandomNumberStream) -> &'static str {
        self.values[self.pick_random_index(weight_set, stream)]
    }
}

/// Every value table used by the row generators, built once per
/// session.
pub struct Distributions {
    pub calendar: calendar::CalendarDistribution,
    pub syllables: Distribution,
    pub nouns: Distribution,
    pub verbs: Distribution,
    pub adjectives: Distribution,
    pub adverbs: Distribution,
    pub auxiliaries: Distribution,
    pub prepositions: Distribution,
    pub articles: Distribution,
    pub terminators: Distribution,
    pub sentences: Distribution,
    pub genders: Distribution,
    pub marital_statuses: Distribution,
    pub education_levels: Distribution,
    pub purchase_bands: Distribution,
    pub credit_ratings: Distribution,
    pub buy_potentials: Distribution,
    pub location_types: Distribution,
    pub street_names: Distribution,
    pub street_types: Distribution,
    pub cities: Distribution,
    pub return_reasons: Distribution,
    pub ship_mode_types: Distribution,
    pub ship_mode_codes: Distribution,
    pub ship_mode_carriers: Distribution,
    pub items: items::ItemsDistributions,
}

impl Distributions {
    pub fn new() -> Self {
        Self {
            calendar: calendar::CalendarDistribution::new(),
            syllables: english::syllables(),
            nouns: english::nouns(),
            verbs: english::verbs(),
            adjectives: english::adjectives(),
            adverbs: english::adverbs(),
            auxiliaries: english::auxiliaries(),
            prepositions: english::prepositions(),
            articles: english::articles(),
            terminators: english::terminators(),
            sentences: english::sentences(),
            genders: demographics::genders(),
            marital_statuses: demographics::marital_statuses(),
            education_levels: demographics::education_levels(),
            purchase_bands: demographics::purchase_bands(),
            credit_ratings: demographics::credit_ratings(),
            buy_potentials: demographics::buy_potentials(),
            location_types: demographics::location_types(),
            street_names: geography::street_names(),
            street_types: geography::street_types(),
            cities: geography::cities(),
            return_reasons: reasons::return_reasons(),
            ship_mode_types: ship_modes::ship_mode_types(),
            ship_mode_codes: ship_modes::ship_mode_codes(),
            ship_mode_carriers: ship_modes::ship_mode_carriers(),
            items: items::ItemsDistributions::new(),
        }
    }
}

impl Default for Distributions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberStream;

    #[test]
    fn weighted_pick_lands_in_proportion() {
        let distribution =
            Distribution::new(vec!["common", "rare"], &[&[99, 1]]);
        let mut stream = RandomNumberStream::new(0, 0);
        let mut rare = 0;
        for _ in 0..10_000 {
            if distribution.pick_random_value(0, &mut stream) == "rare" {
                rare += 1;
            }
        }
        assert!(rare > 50 && rare < 200, "rare picked {rare} times out of 10000");
    }

    #[test]
    fn pick_costs_exactly_one_seed() {
        let distribution = Distribution::uniform(vec!["a", "b", "c"]);
        let mut stream = RandomNumberStream::new(0, 0);
        distribution.pick_random_index(0, &mut stream);
        assert_eq!(stream.seeds_used(), 1);
    }

    #[test]
    fn index_mod_size_wraps() {
        let distribution = Distribution::uniform(vec!["a", "b", "c"]);
        assert_eq!(distribution.value_for_index_mod_size(0), "a");
        assert_eq!(distribution.value_for_index_mod_size(4), "b");
    }
}
