//! Formatting options for [`Real`]s.
//!
//! The [`Display`] implementation for [`Real`] groups the digits of integers with commas, so
//! `1234` is rendered `1,234`. Use [`Real::formatted`] with [`FormatOptions`] to control this.

use std::fmt::{self, Display, Formatter};
use super::Real;

/// Formatting options for a [`Real`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Whether to group the digits of integers with commas.
    pub separators: Separator,
}

impl FormatOptions {
    /// Options that render integers with grouped digits, such as `1,000,000`.
    pub const GROUPED: FormatOptions = FormatOptions { separators: Separator::Always };

    /// Options that render numbers without any grouping, such as `1000000`.
    pub const PLAIN: FormatOptions = FormatOptions { separators: Separator::Never };
}

/// Whether to display separators for large numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Separator {
    /// Always display separators. For example, the number _one million_ is rendered with commas as
    /// `1,000,000`.
    Always,

    /// Never display separators.
    ///
    /// This is the default option.
    #[default]
    Never,
}

/// Inserts a comma every three digits into the whole part of a string representing a number.
///
/// A leading sign and any fractional part are left untouched.
pub fn insert_separators(s: &mut String) {
    let start = usize::from(s.starts_with(['-', '+']));
    let decimal = s.find('.').unwrap_or(s.len());
    s.reserve((decimal - start) / 3);

    // go backwards from the decimal point, so earlier insertion points don't shift
    let mut i = decimal;
    while i > start + 3 {
        i -= 3;
        s.insert(i, ',');
    }
}

/// A [`Display`] wrapper that formats a [`Real`] with the given options.
#[derive(Debug, Clone, Copy)]
pub struct RealFormatter<'a> {
    real: &'a Real,
    options: FormatOptions,
}

impl Display for RealFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.real {
            Real::Integer(n) => {
                let mut s = n.to_string();
                if self.options.separators == Separator::Always {
                    insert_separators(&mut s);
                }
                f.write_str(&s)
            },
            Real::Rational(fraction) => write!(f, "{}", fraction.to_f64()),
            Real::Irrational(x) => write!(f, "{}", x),
        }
    }
}

impl Real {
    /// Returns a [`Display`] wrapper that formats this value with the given options.
    pub fn formatted(&self, options: FormatOptions) -> RealFormatter<'_> {
        RealFormatter { real: self, options }
    }

    /// Renders this value without digit grouping, for use in machine-readable output.
    pub fn to_plain_string(&self) -> String {
        self.formatted(FormatOptions::PLAIN).to_string()
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.formatted(FormatOptions::GROUPED).fmt(f)
    }
}
