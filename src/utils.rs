//! Common small functions used throughout the crate
//!
//! These are left public for the convenience of the user. The fixed-width
//! wrapper in particular is what every directive line in a deck goes through.

// internal modules
use crate::error::{Error, Result};

// external crates
use itertools::Itertools;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends floats with the fixed-point formatting used for deck directives
pub trait NumberFmt {
    /// Fixed-point decimal with a set number of places
    ///
    /// Negative zero is written as `0.000000` since PartiSn has no use for the
    /// sign and it only makes diffs of generated decks noisy.
    ///
    /// ```rust
    /// # use partisn::utils::NumberFmt;
    /// assert_eq!(1.5_f64.fixed(6), "1.500000".to_string());
    /// assert_eq!((-0.0_f64).fixed(3), "0.000".to_string());
    /// assert_eq!((-12.26_f64).fixed(1), "-12.3".to_string());
    /// ```
    fn fixed(&self, precision: usize) -> String;
}

impl NumberFmt for f64 {
    fn fixed(&self, precision: usize) -> String {
        let value = if *self == 0.0 { 0.0 } else { *self };
        f!("{:.precision$}", value, precision = precision)
    }
}

/// Split a line into newline terminated chunks of a fixed character width
///
/// This is a pure character count split, with no attempt to break on word
/// boundaries. PartiSn tolerates a line break anywhere inside a continued
/// directive, so the only requirement is that no line exceeds `width`.
///
/// Every chunk is exactly `width` characters except possibly the last, and
/// an empty string gives an empty result.
///
/// ```rust
/// # use partisn::utils::wrap_fixed_width;
/// let wrapped = wrap_fixed_width("abcdefg", 3).unwrap();
/// assert_eq!(wrapped, "abc\ndef\ng\n");
///
/// assert_eq!(wrap_fixed_width("", 50).unwrap(), "");
/// assert!(wrap_fixed_width("abc", 0).is_err());
/// ```
pub fn wrap_fixed_width(s: &str, width: usize) -> Result<String> {
    if width == 0 {
        return Err(Error::invalid("wrap width must be a positive integer"));
    }

    let mut wrapped = String::with_capacity(s.len() + s.len() / width + 1);
    for chunk in &s.chars().chunks(width) {
        wrapped.extend(chunk);
        wrapped.push('\n');
    }
    Ok(wrapped)
}

/// Check that a list of values is non-empty and strictly increasing
///
/// ```rust
/// # use partisn::utils::is_strictly_increasing;
/// assert!(is_strictly_increasing(&[0.0, 1.0, 2.5]));
/// assert!(!is_strictly_increasing(&[0.0, 1.0, 1.0]));
/// assert!(!is_strictly_increasing(&[]));
/// ```
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    !values.is_empty() && values.iter().tuple_windows().all(|(a, b)| a < b)
}
