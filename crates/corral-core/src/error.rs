// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Error types for domain validation and range utilities.
//!
//! Validation failures surface immediately and synchronously through
//! [`CastError`], which identifies exactly one violated constraint.
//! The clamping arithmetic operations are total by design and never
//! produce errors; only validation (`cast`), variadic reduction over an
//! empty slice ([`EmptyInputError`]), and the defensive checked-division
//! path ([`DivisionByZeroError`]) are fallible.

/// The side of the range a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeDirection {
    /// The value was below the domain minimum.
    Low,
    /// The value was above the domain maximum.
    High,
}

impl std::fmt::Display for RangeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "below minimum"),
            Self::High => write!(f, "above maximum"),
        }
    }
}

/// The single constraint a raw value violated during a cast.
///
/// A cast reports exactly one violation, checked in this order:
/// number-ness, finiteness, integer-ness, range, zero exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastErrorKind {
    /// The raw value is NaN.
    NotANumber,
    /// The raw value is an infinity.
    NotFinite,
    /// The raw value is not a mathematical integer (integer domains only).
    NotInteger,
    /// The raw value lies outside the inclusive `[min, max]` range.
    OutOfRange(RangeDirection),
    /// The raw value is zero and the domain excludes zero.
    ZeroExcluded,
}

impl std::fmt::Display for CastErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "value is NaN"),
            Self::NotFinite => write!(f, "value is not finite"),
            Self::NotInteger => write!(f, "value is not an integer"),
            Self::OutOfRange(direction) => write!(f, "value is {direction}"),
            Self::ZeroExcluded => write!(f, "value is zero, which the domain excludes"),
        }
    }
}

/// The error type for fallible domain construction.
///
/// Carries the name of the rejecting domain and the violated constraint.
///
/// # Examples
///
/// ```rust
/// # use corral_core::error::{CastError, CastErrorKind, RangeDirection};
/// let err = CastError::new("Int8", CastErrorKind::OutOfRange(RangeDirection::High));
/// assert_eq!(err.domain(), "Int8");
/// assert_eq!(format!("{err}"), "cannot cast into Int8: value is above maximum");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastError {
    domain: &'static str,
    kind: CastErrorKind,
}

impl CastError {
    /// Creates a new `CastError` for the named domain.
    #[inline]
    pub const fn new(domain: &'static str, kind: CastErrorKind) -> Self {
        Self { domain, kind }
    }

    /// The name of the domain that rejected the value.
    #[inline]
    pub const fn domain(&self) -> &'static str {
        self.domain
    }

    /// The violated constraint.
    #[inline]
    pub const fn kind(&self) -> CastErrorKind {
        self.kind
    }
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot cast into {}: {}", self.domain, self.kind)
    }
}

impl std::error::Error for CastError {}

/// The error returned by variadic `min`/`max` reduction over zero values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyInputError;

impl std::fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "min/max reduction requires at least one value")
    }
}

impl std::error::Error for EmptyInputError {}

/// The error returned by the defensive checked-division path.
///
/// Division through a [`NonZeroValue`](crate::value::NonZeroValue) witness is
/// total; this error only exists for call sites that hold a plain domain value
/// as divisor and cannot express the non-zero constraint statically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DivisionByZeroError;

impl std::fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "division by zero")
    }
}

impl std::error::Error for DivisionByZeroError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_error_display() {
        let err = CastError::new("Uint16", CastErrorKind::OutOfRange(RangeDirection::Low));
        assert_eq!(format!("{err}"), "cannot cast into Uint16: value is below minimum");

        let err = CastError::new("FiniteNumber", CastErrorKind::NotANumber);
        assert_eq!(format!("{err}"), "cannot cast into FiniteNumber: value is NaN");

        let err = CastError::new("NonZeroInt16", CastErrorKind::ZeroExcluded);
        assert_eq!(
            format!("{err}"),
            "cannot cast into NonZeroInt16: value is zero, which the domain excludes"
        );
    }

    #[test]
    fn test_cast_error_accessors() {
        let err = CastError::new("Int8", CastErrorKind::NotInteger);
        assert_eq!(err.domain(), "Int8");
        assert_eq!(err.kind(), CastErrorKind::NotInteger);
    }

    #[test]
    fn test_utility_error_display() {
        assert_eq!(
            format!("{}", EmptyInputError),
            "min/max reduction requires at least one value"
        );
        assert_eq!(format!("{}", DivisionByZeroError), "division by zero");
    }
}
