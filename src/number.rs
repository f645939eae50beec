//! Loosely typed numeric input.
//!
//! Callers that marshal values off a wire (JSON bodies, query strings) hand
//! them over as whatever shape they arrived in. `Number` keeps that shape so
//! the cipher can tell "not an integer" apart from "out of range".

/// A caller-supplied value that may or may not be a usable integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Whole number.
    Int(i128),
    /// Floating-point value, possibly fractional or non-finite.
    Float(f64),
    /// Anything that did not parse as a number.
    NonNumeric,
}

impl Number {
    /// Integral value, if there is one.
    ///
    /// Floats count when they are finite, have no fractional part and fit in `i128`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Number::Int(v) => Some(v),
            Number::Float(f) => float_to_i128(f),
            Number::NonNumeric => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_i128(f: f64) -> Option<i128> {
    // i128::MAX as f64 rounds up to 2^127, which is itself out of range
    const BOUND: f64 = i128::MAX as f64;
    if !f.is_finite() || f.fract() != 0.0 || f >= BOUND || f < -BOUND {
        return None;
    }
    Some(f as i128)
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Number::Int(i128::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Number {
    fn from(v: usize) -> Self {
        i128::try_from(v).map_or(Number::NonNumeric, Number::Int)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<&str> for Number {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(v) = s.parse::<i128>() {
            return Number::Int(v);
        }
        match s.parse::<f64>() {
            // "NaN"/"inf" parse as floats but were never meant as numbers
            Ok(f) if f.is_finite() => Number::Float(f),
            _ => Number::NonNumeric,
        }
    }
}

impl From<String> for Number {
    fn from(s: String) -> Self {
        Number::from(s.as_str())
    }
}
