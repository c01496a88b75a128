//! Street address synthesis.
//!
//! One stream feeds the whole address. The draw count is fixed at
//! seven regardless of the values picked, so address columns can share
//! a single slot in every table's stream bank.

use crate::distribution::geography::COUNTIES;
use crate::distribution::Distributions;
use crate::rng::RandomNumberStream;
use crate::scaling::Scaling;
use crate::table::Table;
use crate::value_generator::generate_uniform_random_int;

#[derive(Clone, Default)]
pub struct Address {
    pub street_number: i32,
    pub street_name: String,
    pub street_type: &'static str,
    pub suite_number: String,
    pub city: &'static str,
    pub county: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub zip: i32,
    pub gmt_offset: i32,
}

pub fn make_address(
    table: Table,
    scaling: &Scaling,
    distributions: &Distributions,
    stream: &mut RandomNumberStream,
) -> Address {
    let street_number = generate_uniform_random_int(1, 1000, stream);

    let word_one = distributions.street_names.pick_random_value(0, stream);
    let word_two = distributions.street_names.pick_random_value(0, stream);
    let street_name = if word_two.is_empty() {
        word_one.to_string()
    } else {
        format!("{word_one} {word_two}")
    };
    let street_type = distributions.street_types.pick_random_value(0, stream);

    let suite_draw = generate_uniform_random_int(1, 100, stream);
    let suite_number = if suite_draw % 2 == 1 {
        format!("Suite {}", (suite_draw / 2) * 10)
    } else {
        format!("Suite {}", (b'A' + ((suite_draw / 2) % 25) as u8) as char)
    };

    // Small tables draw their city from a prefix of the table bounded
    // by their own row count, so reruns at larger scales extend the
    // set instead of reshuffling it.
    let city = if table.is_small() {
        let bound = scaling
            .row_count(table)
            .min(distributions.cities.size() as i64) as i32;
        let index = generate_uniform_random_int(1, bound, stream);
        distributions.cities.value_at((index - 1) as usize)
    } else {
        distributions.cities.pick_random_value(0, stream)
    };

    let region = generate_uniform_random_int(0, (COUNTIES.len() - 1) as i32, stream) as usize;
    let (county, state, zip_prefix, gmt_offset) = COUNTIES[region];

    Address {
        street_number,
        street_name,
        street_type,
        suite_number,
        city,
        county,
        state,
        country: "United States",
        zip: zip_prefix * 10_000 + compute_city_hash(city),
        gmt_offset,
    }
}

fn compute_city_hash(city: &str) -> i32 {
    let mut hash: i32 = 0;
    for byte in city.bytes() {
        hash = hash.wrapping_mul(26).wrapping_add(i32::from(byte) - i32::from(b'A'));
        if hash > 1_000_000 {
            hash %= 1_000_000;
        }
    }
    hash.rem_euclid(10_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberStream;

    #[test]
    fn address_costs_seven_seeds() {
        let scaling = Scaling::new(1).expect("scale 1");
        let distributions = Distributions::new();
        let mut stream = RandomNumberStream::new(710, 7);
        make_address(Table::CustomerAddress, &scaling, &distributions, &mut stream);
        assert_eq!(stream.seeds_used(), 7);
    }

    #[test]
    fn small_tables_use_a_bounded_city_list() {
        let scaling = Scaling::new(1).expect("scale 1");
        let distributions = Distributions::new();
        let mut stream = RandomNumberStream::new(711, 7);
        let bound = scaling.row_count(Table::Warehouse) as usize;
        for _ in 0..200 {
            let address = make_address(Table::Warehouse, &scaling, &distributions, &mut stream);
            let position = crate::distribution::geography::CITIES
                .iter()
                .position(|&city| city == address.city);
            assert!(matches!(position, Some(index) if index < bound));
        }
    }

    #[test]
    fn zip_codes_carry_the_county_prefix() {
        let scaling = Scaling::new(1).expect("scale 1");
        let distributions = Distributions::new();
        let mut stream = RandomNumberStream::new(712, 7);
        let address = make_address(Table::CustomerAddress, &scaling, &distributions, &mut stream);
        assert_eq!(address.zip / 10_000, COUNTIES.iter().find(|c| c.0 == address.county).map(|c| c.2).unwrap_or(-1));
        assert!(address.zip % 10_000 >= 0);
    }
}
