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

//! # Domain Specifications
//!
//! [`DomainSpec`] is the declarative description of one numeric domain: a
//! carrier type, an inclusive `[MIN, MAX]` range, and a zero-exclusion flag,
//! expressed as associated items on a zero-sized tag type. The trait's
//! provided methods form the validator (`is`, `cast`) and the range
//! utilities (`clamp`, `random`, `min_of`, `max_of`); the clamping
//! arithmetic itself lives on [`DomainValue`](crate::value::DomainValue).
//!
//! Declaring a domain is a handful of constants:
//!
//! ```rust
//! use corral_core::domain::DomainSpec;
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Percent;
//!
//! impl DomainSpec for Percent {
//!     type Repr = i64;
//!     const NAME: &'static str = "Percent";
//!     const MIN: i64 = 0;
//!     const MAX: i64 = 100;
//!     const EXCLUDE_ZERO: bool = false;
//! }
//!
//! let v = Percent::cast(50).unwrap();
//! assert_eq!(v.get(), 50);
//! assert!(Percent::cast(101).is_err());
//! assert_eq!(Percent::clamp(250).get(), 100);
//! ```
//!
//! ## Motivation
//!
//! Roughly two dozen concrete domains share identical observable behavior.
//! Binding each to a tag type collapses them into one parametrized engine:
//! the tag costs nothing at runtime, while the type system keeps values of
//! different domains apart (the smart-constructor pattern).

use crate::{
    bounds::Bounds,
    error::{CastError, CastErrorKind, EmptyInputError, RangeDirection},
    scalar::ClampScalar,
    value::DomainValue,
};
use rand::Rng;

/// A declarative description of one numeric domain.
///
/// Implementors are zero-sized tag types; all behavior is provided. The
/// invariants of [`Bounds`] apply: `MIN <= MAX`, and a zero-excluding domain
/// must contain a non-zero value.
pub trait DomainSpec: Copy + std::fmt::Debug + Send + Sync + Sized + 'static {
    /// The carrier type: `i64` for integer domains, `f64` for float domains.
    type Repr: ClampScalar;

    /// The domain name used in diagnostics, e.g. `"Int8"`.
    const NAME: &'static str;

    /// The inclusive minimum of the domain.
    const MIN: Self::Repr;

    /// The inclusive maximum of the domain.
    const MAX: Self::Repr;

    /// Whether zero is excluded from the domain.
    const EXCLUDE_ZERO: bool;

    /// The runtime view of this specification.
    #[inline]
    fn bounds() -> Bounds<Self::Repr> {
        Bounds::new_unchecked(Self::MIN, Self::MAX, Self::EXCLUDE_ZERO)
    }

    /// Returns `true` iff `raw` is a member of the domain.
    #[inline]
    fn is(raw: Self::Repr) -> bool {
        raw.membership_error(&Self::bounds()).is_none()
    }

    /// Validates `raw` and tags it with the domain.
    ///
    /// # Errors
    ///
    /// Returns a [`CastError`] identifying exactly one violated constraint.
    #[inline]
    fn cast(raw: Self::Repr) -> Result<DomainValue<Self>, CastError> {
        match raw.membership_error(&Self::bounds()) {
            None => Ok(DomainValue::new_unchecked(raw)),
            Some(kind) => Err(CastError::new(Self::NAME, kind)),
        }
    }

    /// Forces an arbitrary raw value into the domain.
    ///
    /// Out-of-range values land on the nearest bound; an excluded zero is
    /// replaced by the nearest non-zero value (positive side preferred).
    /// Clamping is idempotent.
    #[inline]
    fn clamp(raw: Self::Repr) -> DomainValue<Self> {
        DomainValue::new_unchecked(raw.clamp_into(&Self::bounds()))
    }

    /// The smallest member of the domain.
    #[inline]
    fn min_value() -> DomainValue<Self> {
        Self::clamp(Self::MIN)
    }

    /// The largest member of the domain.
    #[inline]
    fn max_value() -> DomainValue<Self> {
        Self::clamp(Self::MAX)
    }

    /// Reduces `values` to its minimum.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `values` is empty.
    #[inline]
    fn min_of(values: &[DomainValue<Self>]) -> Result<DomainValue<Self>, EmptyInputError> {
        let (first, rest) = values.split_first().ok_or(EmptyInputError)?;
        Ok(rest
            .iter()
            .fold(*first, |acc, v| if v.get() < acc.get() { *v } else { acc }))
    }

    /// Reduces `values` to its maximum.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `values` is empty.
    #[inline]
    fn max_of(values: &[DomainValue<Self>]) -> Result<DomainValue<Self>, EmptyInputError> {
        let (first, rest) = values.split_first().ok_or(EmptyInputError)?;
        Ok(rest
            .iter()
            .fold(*first, |acc, v| if v.get() > acc.get() { *v } else { acc }))
    }

    /// Draws a uniform member of `[lo, hi]` from an injected generator.
    ///
    /// Bounds are swapped first when `lo > hi`, so any pair of members is
    /// accepted. The result never needs post-clamping; for zero-excluding
    /// domains a zero draw is rejected and redrawn.
    #[inline]
    fn random<R: Rng + ?Sized>(
        rng: &mut R,
        lo: DomainValue<Self>,
        hi: DomainValue<Self>,
    ) -> DomainValue<Self> {
        let (lo, hi) = if hi.get() < lo.get() { (hi, lo) } else { (lo, hi) };
        DomainValue::new_unchecked(Self::Repr::sample_inclusive(
            rng,
            lo.get(),
            hi.get(),
            &Self::bounds(),
        ))
    }
}

/// Extension surface for integer domains: acceptance of `f64` input.
///
/// Integer domains carry their values as `i64`, but callers frequently hold
/// floats (parsed input, measurements, results of float math). `cast_f64`
/// applies the full constraint order — NaN, finiteness, integer-ness — before
/// delegating to the integer validator.
///
/// # Examples
///
/// ```rust
/// use corral_core::domain::{DomainSpec, IntegerDomain};
/// use corral_core::error::CastErrorKind;
///
/// #[derive(Clone, Copy, Debug)]
/// struct Percent;
///
/// impl DomainSpec for Percent {
///     type Repr = i64;
///     const NAME: &'static str = "Percent";
///     const MIN: i64 = 0;
///     const MAX: i64 = 100;
///     const EXCLUDE_ZERO: bool = false;
/// }
/// impl IntegerDomain for Percent {}
///
/// assert_eq!(Percent::cast_f64(50.0).unwrap().get(), 50);
/// assert_eq!(Percent::cast_f64(50.5).unwrap_err().kind(), CastErrorKind::NotInteger);
/// assert_eq!(Percent::cast_f64(f64::NAN).unwrap_err().kind(), CastErrorKind::NotANumber);
/// ```
pub trait IntegerDomain: DomainSpec<Repr = i64> {
    /// Returns `true` iff `raw` is a finite integer-valued float inside the
    /// domain.
    #[inline]
    fn is_f64(raw: f64) -> bool {
        Self::cast_f64(raw).is_ok()
    }

    /// Validates a float against the integer domain.
    ///
    /// # Errors
    ///
    /// Returns `NotANumber` for NaN, `NotFinite` for infinities,
    /// `NotInteger` for fractional values, and otherwise the integer
    /// validator's verdict.
    fn cast_f64(raw: f64) -> Result<DomainValue<Self>, CastError> {
        if raw.is_nan() {
            return Err(CastError::new(Self::NAME, CastErrorKind::NotANumber));
        }
        if !raw.is_finite() {
            return Err(CastError::new(Self::NAME, CastErrorKind::NotFinite));
        }
        if raw.fract() != 0.0 {
            return Err(CastError::new(Self::NAME, CastErrorKind::NotInteger));
        }
        match num_traits::cast::<f64, i64>(raw) {
            Some(value) => Self::cast(value),
            // Integer-valued but beyond the carrier, so beyond every domain.
            None => {
                let direction = if raw > 0.0 {
                    RangeDirection::High
                } else {
                    RangeDirection::Low
                };
                Err(CastError::new(
                    Self::NAME,
                    CastErrorKind::OutOfRange(direction),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Clone, Copy, Debug)]
    struct TestInt8;

    impl DomainSpec for TestInt8 {
        type Repr = i64;
        const NAME: &'static str = "TestInt8";
        const MIN: i64 = -128;
        const MAX: i64 = 127;
        const EXCLUDE_ZERO: bool = false;
    }
    impl IntegerDomain for TestInt8 {}

    #[derive(Clone, Copy, Debug)]
    struct TestNonZero;

    impl DomainSpec for TestNonZero {
        type Repr = i64;
        const NAME: &'static str = "TestNonZero";
        const MIN: i64 = -128;
        const MAX: i64 = 127;
        const EXCLUDE_ZERO: bool = true;
    }

    #[derive(Clone, Copy, Debug)]
    struct TestUnit;

    impl DomainSpec for TestUnit {
        type Repr = f64;
        const NAME: &'static str = "TestUnit";
        const MIN: f64 = 0.0;
        const MAX: f64 = 1.0;
        const EXCLUDE_ZERO: bool = false;
    }

    #[test]
    fn test_is_and_cast_agree() {
        for raw in [-128i64, -1, 0, 1, 127] {
            assert!(TestInt8::is(raw));
            assert_eq!(TestInt8::cast(raw).unwrap().get(), raw);
        }
        for raw in [-129i64, 128, i64::MIN, i64::MAX] {
            assert!(!TestInt8::is(raw));
            assert!(TestInt8::cast(raw).is_err());
        }
    }

    #[test]
    fn test_cast_reports_direction() {
        assert_eq!(
            TestInt8::cast(-129).unwrap_err().kind(),
            CastErrorKind::OutOfRange(RangeDirection::Low)
        );
        assert_eq!(
            TestInt8::cast(128).unwrap_err().kind(),
            CastErrorKind::OutOfRange(RangeDirection::High)
        );
        assert_eq!(
            TestNonZero::cast(0).unwrap_err().kind(),
            CastErrorKind::ZeroExcluded
        );
    }

    #[test]
    fn test_cast_f64_constraint_order() {
        assert_eq!(
            TestInt8::cast_f64(f64::NAN).unwrap_err().kind(),
            CastErrorKind::NotANumber
        );
        assert_eq!(
            TestInt8::cast_f64(f64::INFINITY).unwrap_err().kind(),
            CastErrorKind::NotFinite
        );
        assert_eq!(
            TestInt8::cast_f64(1.5).unwrap_err().kind(),
            CastErrorKind::NotInteger
        );
        assert_eq!(
            TestInt8::cast_f64(1e300).unwrap_err().kind(),
            CastErrorKind::OutOfRange(RangeDirection::High)
        );
        assert_eq!(TestInt8::cast_f64(-3.0).unwrap().get(), -3);
        assert!(TestInt8::is_f64(42.0));
        assert!(!TestInt8::is_f64(42.5));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for raw in [i64::MIN, -129, -1, 0, 127, 128, i64::MAX] {
            let once = TestInt8::clamp(raw);
            let twice = TestInt8::clamp(once.get());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_min_max_value() {
        assert_eq!(TestInt8::min_value().get(), -128);
        assert_eq!(TestInt8::max_value().get(), 127);
        assert_eq!(TestUnit::max_value().get(), 1.0);
    }

    #[test]
    fn test_min_of_max_of() {
        let values: Vec<_> = [3i64, -7, 42, 0]
            .iter()
            .map(|&raw| TestInt8::cast(raw).unwrap())
            .collect();
        assert_eq!(TestInt8::min_of(&values).unwrap().get(), -7);
        assert_eq!(TestInt8::max_of(&values).unwrap().get(), 42);

        let single = [TestInt8::cast(9).unwrap()];
        assert_eq!(TestInt8::min_of(&single).unwrap().get(), 9);
    }

    #[test]
    fn test_min_of_empty_fails() {
        assert_eq!(TestInt8::min_of(&[]).unwrap_err(), EmptyInputError);
        assert_eq!(TestInt8::max_of(&[]).unwrap_err(), EmptyInputError);
    }

    #[test]
    fn test_random_swaps_inverted_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let lo = TestInt8::cast(-10).unwrap();
        let hi = TestInt8::cast(10).unwrap();
        for _ in 0..500 {
            // Deliberately passed high-to-low.
            let v = TestInt8::random(&mut rng, hi, lo);
            assert!((-10..=10).contains(&v.get()));
        }
    }

    #[test]
    fn test_random_float_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let lo = TestUnit::cast(0.25).unwrap();
        let hi = TestUnit::cast(0.75).unwrap();
        for _ in 0..500 {
            let v = TestUnit::random(&mut rng, lo, hi);
            assert!((0.25..=0.75).contains(&v.get()));
        }
    }
}
