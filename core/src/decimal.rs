//! Fixed-point money arithmetic.
//!
//! Values are an integer count of units at a given number of decimal
//! places. Multiplication truncates back down to cents, matching how
//! the generated prices have always rounded.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal {
    number: i64,
    precision: i32,
}

impl Default for Decimal {
    fn default() -> Self {
        ZERO
    }
}

pub const ZERO: Decimal = Decimal { number: 0, precision: 2 };
pub const ONE: Decimal = Decimal { number: 100, precision: 2 };

impl Decimal {
    pub const fn new(number: i64, precision: i32) -> Self {
        Self { number, precision }
    }

    pub fn from_int(value: i64) -> Self {
        Self { number: value * 100, precision: 2 }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn precision(&self) -> i32 {
        self.precision
    }

    pub fn add(&self, other: &Decimal) -> Decimal {
        let (a, b, precision) = align(self, other);
        Decimal { number: a + b, precision }
    }

    pub fn subtract(&self, other: &Decimal) -> Decimal {
        let (a, b, precision) = align(self, other);
        Decimal { number: a - b, precision }
    }

    /// Product truncated to cents.
    pub fn multiply(&self, other: &Decimal) -> Decimal {
        let mut number = self.number * other.number;
        let mut precision = self.precision + other.precision;
        while precision > 2 {
            number /= 10;
            precision -= 1;
        }
        Decimal { number, precision }
    }

    pub fn negate(&self) -> Decimal {
        Decimal { number: -self.number, precision: self.precision }
    }
}

fn align(a: &Decimal, b: &Decimal) -> (i64, i64, i32) {
    let precision = a.precision.max(b.precision);
    (
        a.number * pow10(precision - a.precision),
        b.number * pow10(precision - b.precision),
        precision,
    )
}

fn pow10(exponent: i32) -> i64 {
    10_i64.pow(exponent as u32)
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = pow10(self.precision);
        let sign = if self.number < 0 { "-" } else { "" };
        let magnitude = self.number.abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / divisor,
            magnitude % divisor,
            width = self.precision as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_truncates_to_cents() {
        let price = Decimal::new(333, 2); // 3.33
        let rate = Decimal::new(7, 2); // 0.07
        assert_eq!(price.multiply(&rate), Decimal::new(23, 2)); // 0.2331 -> 0.23
    }

    #[test]
    fn add_aligns_precision() {
        let a = Decimal::new(15, 1); // 1.5
        let b = Decimal::new(25, 2); // 0.25
        assert_eq!(a.add(&b), Decimal::new(175, 2));
    }

    #[test]
    fn display_pads_fraction() {
        assert_eq!(Decimal::new(105, 2).to_string(), "1.05");
        assert_eq!(Decimal::new(-5, 2).to_string(), "-0.05");
    }
}
