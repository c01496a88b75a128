//! Random permutations of surrogate-key ranges.
//!
//! Fact tables walk dimension keys in a shuffled order so adjacent
//! rows do not reference adjacent dimension entries. The shuffle is
//! driven entirely by one column stream, so it costs a fixed number of
//! seeds and stays reproducible across chunked runs.

use crate::rng::RandomNumberStream;
use crate::value_generator::generate_uniform_random_int;

/// Fisher-Yates style shuffle of the keys 1..=size. Consumes exactly
/// `size` seeds from the stream.
pub fn make_permutation(size: i64, stream: &mut RandomNumberStream) -> Vec<i64> {
    let mut permutation: Vec<i64> = (1..=size).collect();
    for index in 0..size as usize {
        let swap = generate_uniform_random_int(0, (size - 1) as i32, stream) as usize;
        permutation.swap(index, swap);
    }
    permutation
}

/// One-based lookup that wraps around the end of the permutation.
pub fn get_permutation_entry(permutation: &[i64], index: i64) -> i64 {
    let size = permutation.len() as i64;
    permutation[((index - 1) % size) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberStream;

    #[test]
    fn permutation_covers_every_key_once() {
        let mut stream = RandomNumberStream::new(700, 0);
        let permutation = make_permutation(100, &mut stream);
        let mut seen = permutation.clone();
        seen.sort_unstable();
        assert_eq!(seen, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn lookup_wraps_past_the_end() {
        let mut stream = RandomNumberStream::new(700, 0);
        let permutation = make_permutation(10, &mut stream);
        assert_eq!(get_permutation_entry(&permutation, 1), get_permutation_entry(&permutation, 11));
    }
}
