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

//! Runtime description of one numeric domain.
//!
//! [`Bounds`] is the value-level view of a domain specification: an inclusive
//! `[min, max]` interval plus a zero-exclusion flag. The clamping engine
//! receives it alongside every raw result, keeping clamping a pure function
//! of `(raw, bounds)` with no state between calls.
//!
//! # Invariants
//!
//! `min <= max`, and a zero-excluding interval must contain at least one
//! non-zero value (equivalently, `min` and `max` are not both zero).

use num_traits::Zero;

/// An inclusive interval `[min, max]` with an optional zero exclusion.
///
/// # Examples
///
/// ```rust
/// # use corral_core::bounds::Bounds;
/// let b = Bounds::new(-128i64, 127i64, false);
/// assert!(b.contains(0));
/// assert!(!b.contains(128));
///
/// let nz = Bounds::new(-128i64, 127i64, true);
/// assert!(!nz.contains(0));
/// assert!(nz.contains(-1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    min: T,
    max: T,
    exclude_zero: bool,
}

impl<T> Bounds<T>
where
    T: Copy + PartialOrd + Zero,
{
    /// Creates new `Bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`, or if `exclude_zero` is set and the interval
    /// contains no non-zero value.
    #[inline]
    pub fn new(min: T, max: T, exclude_zero: bool) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min must be less than or equal to max"
        );
        assert!(
            !exclude_zero || !min.is_zero() || !max.is_zero(),
            "Invalid bounds: a zero-excluding interval must contain a non-zero value"
        );
        Self {
            min,
            max,
            exclude_zero,
        }
    }

    /// Creates new `Bounds` if the inputs are valid.
    ///
    /// Returns `None` if `min > max`, or if `exclude_zero` is set and the
    /// interval contains no non-zero value.
    #[inline]
    pub fn try_new(min: T, max: T, exclude_zero: bool) -> Option<Self> {
        if min <= max && (!exclude_zero || !min.is_zero() || !max.is_zero()) {
            Some(Self {
                min,
                max,
                exclude_zero,
            })
        } else {
            None
        }
    }

    /// Creates new `Bounds` without checking invariants in release builds.
    ///
    /// The caller must ensure `min <= max` and that a zero-excluding interval
    /// contains a non-zero value. A `debug_assert!` catches errors during
    /// development.
    #[inline]
    pub fn new_unchecked(min: T, max: T, exclude_zero: bool) -> Self {
        debug_assert!(
            min <= max,
            "Invalid bounds: min must be less than or equal to max"
        );
        debug_assert!(
            !exclude_zero || !min.is_zero() || !max.is_zero(),
            "Invalid bounds: a zero-excluding interval must contain a non-zero value"
        );
        Self {
            min,
            max,
            exclude_zero,
        }
    }

    /// The inclusive minimum of the interval.
    #[inline]
    pub const fn min(&self) -> T {
        self.min
    }

    /// The inclusive maximum of the interval.
    #[inline]
    pub const fn max(&self) -> T {
        self.max
    }

    /// Whether the domain excludes zero.
    #[inline]
    pub const fn excludes_zero(&self) -> bool {
        self.exclude_zero
    }

    /// Returns `true` if `value` lies in `[min, max]` and is not an excluded
    /// zero.
    ///
    /// This is the pure range-membership half of validation; kind checks
    /// (NaN, finiteness, integer-ness) live with the carrier type.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max && !(self.exclude_zero && value.is_zero())
    }
}

impl<T> std::fmt::Display for Bounds<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.exclude_zero {
            write!(f, "[{}, {}] \\ {{0}}", self.min, self.max)
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}
