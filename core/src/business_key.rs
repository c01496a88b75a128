//! Stable 16-character business keys derived from surrogate keys.
//!
//! The key is the surrogate key's 64 bits spelled as letters, one per
//! nibble: the high word most-significant nibble first, then the low
//! word least-significant nibble first. Key 1 is "AAAAAAAABAAAAAAA".

const KEY_ALPHABET: &[u8; 16] = b"ABCDEFGHIJKLMNOP";

pub fn to_business_key(key: i64) -> String {
    let upper = (key >> 32) as u32;
    let lower = key as u32;
    let mut out = String::with_capacity(16);
    for shift in (0..8).rev() {
        out.push(KEY_ALPHABET[((upper >> (shift * 4)) & 0xF) as usize] as char);
    }
    for shift in 0..8 {
        out.push(KEY_ALPHABET[((lower >> (shift * 4)) & 0xF) as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_one() {
        assert_eq!(to_business_key(1), "AAAAAAAABAAAAAAA");
    }

    #[test]
    fn low_word_is_little_endian_nibbles() {
        assert_eq!(to_business_key(2_415_022), "AAAAAAAAOKJNECAA");
    }
}
