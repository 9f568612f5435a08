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

//! # Carrier-Level Clamping Arithmetic
//!
//! [`ClampScalar`] is the per-carrier arithmetic engine behind every domain.
//! Each operation computes the exact mathematical result and then clamps it
//! back into the supplied [`Bounds`], so the operations are total: they never
//! overflow, never fail, and always return an in-range value.
//!
//! Two carriers exist:
//!
//! - `i64` backs all integer domains. Binary operations widen through `i128`,
//!   which holds any sum, difference, or product of two `i64` values exactly,
//!   so clamping always sees the true mathematical result.
//! - `f64` backs all float domains. IEEE-754 overflow to infinity is folded
//!   into the clamp (an infinite raw result lands on the nearest bound).
//!
//! ## Zero avoidance
//!
//! When a domain excludes zero and a clamped result would be zero, the result
//! is replaced by the nearest non-zero representable value, preferring the
//! positive side whenever the interval contains one: `+1` for integers and
//! [`f64::MIN_POSITIVE`] for floats, falling back to the negative mirror for
//! intervals that lie entirely at or below zero.

use crate::{
    bounds::Bounds,
    error::{CastErrorKind, RangeDirection},
};
use num_traits::Zero;
use rand::Rng;

/// A numeric carrier that supports domain validation and clamping arithmetic.
///
/// Implemented for `i64` (integer domains) and `f64` (float domains). All
/// operations are pure functions of their arguments and the supplied bounds;
/// no state is held between calls.
pub trait ClampScalar:
    Copy
    + PartialOrd
    + Zero
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Classifies `self` against `bounds`, returning the single violated
    /// constraint, or `None` when `self` is a member of the domain.
    ///
    /// Constraints are checked in a fixed order: number-ness, finiteness,
    /// range low, range high, zero exclusion.
    fn membership_error(self, bounds: &Bounds<Self>) -> Option<CastErrorKind>;

    /// Forces `self` into `bounds`: values below the minimum become the
    /// minimum, values above the maximum become the maximum, and an excluded
    /// zero becomes the nearest non-zero value. In-range values pass through
    /// unchanged.
    fn clamp_into(self, bounds: &Bounds<Self>) -> Self;

    /// Exact addition followed by [`clamp_into`](Self::clamp_into).
    fn add_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self;

    /// Exact subtraction followed by [`clamp_into`](Self::clamp_into).
    fn sub_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self;

    /// Exact multiplication followed by [`clamp_into`](Self::clamp_into).
    fn mul_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self;

    /// Exponentiation by a non-negative integer exponent, clamped.
    ///
    /// `0^0` is `1`. Results whose magnitude exceeds the carrier land on the
    /// bound matching the sign of the true result.
    fn pow_clamped(self, exp: u32, bounds: &Bounds<Self>) -> Self;

    /// Division followed by [`clamp_into`](Self::clamp_into).
    ///
    /// Integer carriers use floor division (rounding toward negative
    /// infinity); the float carrier divides directly. The caller must
    /// guarantee `rhs` is non-zero.
    fn div_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self;

    /// Mathematical absolute value followed by [`clamp_into`](Self::clamp_into).
    ///
    /// For two's-complement-style intervals where `min = -(max + 1)`,
    /// `abs(min)` exceeds `max` by one and clamps to `max`.
    fn abs_clamped(self, bounds: &Bounds<Self>) -> Self;

    /// Draws a uniform value from the inclusive range `[lo, hi]`.
    ///
    /// The caller must guarantee `lo <= hi` and that both endpoints are
    /// members of the domain. When the domain excludes zero a zero draw is
    /// rejected and redrawn; the range always contains a non-zero value
    /// because its endpoints are members.
    fn sample_inclusive<R: Rng + ?Sized>(
        rng: &mut R,
        lo: Self,
        hi: Self,
        bounds: &Bounds<Self>,
    ) -> Self;
}

/// Narrows an exact `i128` result into `bounds`, substituting the non-zero
/// boundary when required.
#[inline]
fn clamp_wide_i128(raw: i128, bounds: &Bounds<i64>) -> i64 {
    let clamped = if raw < bounds.min() as i128 {
        bounds.min()
    } else if raw > bounds.max() as i128 {
        bounds.max()
    } else {
        raw as i64
    };
    if bounds.excludes_zero() && clamped == 0 {
        nonzero_substitute_i64(bounds)
    } else {
        clamped
    }
}

/// The nearest non-zero value to zero inside `bounds`.
///
/// Prefers `+1` whenever the interval reaches it; an interval that excludes
/// zero and lies entirely at or below zero must contain `-1`.
#[inline]
fn nonzero_substitute_i64(bounds: &Bounds<i64>) -> i64 {
    if bounds.max() >= 1 { 1 } else { -1 }
}

/// The non-zero float nearest to zero inside `bounds`.
#[inline]
fn nonzero_substitute_f64(bounds: &Bounds<f64>) -> f64 {
    if bounds.max() >= f64::MIN_POSITIVE {
        f64::MIN_POSITIVE
    } else {
        -f64::MIN_POSITIVE
    }
}

impl ClampScalar for i64 {
    #[inline]
    fn membership_error(self, bounds: &Bounds<Self>) -> Option<CastErrorKind> {
        if self < bounds.min() {
            Some(CastErrorKind::OutOfRange(RangeDirection::Low))
        } else if self > bounds.max() {
            Some(CastErrorKind::OutOfRange(RangeDirection::High))
        } else if bounds.excludes_zero() && self == 0 {
            Some(CastErrorKind::ZeroExcluded)
        } else {
            None
        }
    }

    #[inline]
    fn clamp_into(self, bounds: &Bounds<Self>) -> Self {
        clamp_wide_i128(self as i128, bounds)
    }

    #[inline]
    fn add_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        clamp_wide_i128(self as i128 + rhs as i128, bounds)
    }

    #[inline]
    fn sub_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        clamp_wide_i128(self as i128 - rhs as i128, bounds)
    }

    #[inline]
    fn mul_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        clamp_wide_i128(self as i128 * rhs as i128, bounds)
    }

    #[inline]
    fn pow_clamped(self, exp: u32, bounds: &Bounds<Self>) -> Self {
        match (self as i128).checked_pow(exp) {
            Some(raw) => clamp_wide_i128(raw, bounds),
            // The true result overflowed i128; its sign still determines the
            // bound it clamps to. Negative iff the base is negative and the
            // exponent odd.
            None => {
                let raw = if self < 0 && exp % 2 == 1 {
                    i128::MIN
                } else {
                    i128::MAX
                };
                clamp_wide_i128(raw, bounds)
            }
        }
    }

    #[inline]
    fn div_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        debug_assert!(rhs != 0, "called `div_clamped` with a zero divisor");
        let a = self as i128;
        let b = rhs as i128;
        let quotient = a / b;
        let remainder = a % b;
        // Truncating division rounds toward zero; step down once when the
        // true quotient is negative and inexact.
        let floored = if remainder != 0 && (remainder < 0) != (b < 0) {
            quotient - 1
        } else {
            quotient
        };
        clamp_wide_i128(floored, bounds)
    }

    #[inline]
    fn abs_clamped(self, bounds: &Bounds<Self>) -> Self {
        clamp_wide_i128((self as i128).abs(), bounds)
    }

    #[inline]
    fn sample_inclusive<R: Rng + ?Sized>(
        rng: &mut R,
        lo: Self,
        hi: Self,
        bounds: &Bounds<Self>,
    ) -> Self {
        debug_assert!(lo <= hi, "called `sample_inclusive` with inverted bounds");
        loop {
            let drawn = rng.random_range(lo..=hi);
            if !(bounds.excludes_zero() && drawn == 0) {
                return drawn;
            }
        }
    }
}

impl ClampScalar for f64 {
    #[inline]
    fn membership_error(self, bounds: &Bounds<Self>) -> Option<CastErrorKind> {
        if self.is_nan() {
            Some(CastErrorKind::NotANumber)
        } else if !self.is_finite() {
            Some(CastErrorKind::NotFinite)
        } else if self < bounds.min() {
            Some(CastErrorKind::OutOfRange(RangeDirection::Low))
        } else if self > bounds.max() {
            Some(CastErrorKind::OutOfRange(RangeDirection::High))
        } else if bounds.excludes_zero() && self == 0.0 {
            Some(CastErrorKind::ZeroExcluded)
        } else {
            None
        }
    }

    #[inline]
    fn clamp_into(self, bounds: &Bounds<Self>) -> Self {
        // NaN compares false against every bound and would otherwise pass
        // through; it is pinned to the minimum so clamping stays total.
        let clamped = if self.is_nan() || self < bounds.min() {
            bounds.min()
        } else if self > bounds.max() {
            bounds.max()
        } else {
            self
        };
        if bounds.excludes_zero() && clamped == 0.0 {
            nonzero_substitute_f64(bounds)
        } else {
            clamped
        }
    }

    #[inline]
    fn add_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        (self + rhs).clamp_into(bounds)
    }

    #[inline]
    fn sub_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        (self - rhs).clamp_into(bounds)
    }

    #[inline]
    fn mul_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        (self * rhs).clamp_into(bounds)
    }

    #[inline]
    fn pow_clamped(self, exp: u32, bounds: &Bounds<Self>) -> Self {
        // powi saturates the exponent; beyond i32::MAX the result of any
        // finite base is already far outside every finite domain.
        let exp = exp.min(i32::MAX as u32) as i32;
        self.powi(exp).clamp_into(bounds)
    }

    #[inline]
    fn div_clamped(self, rhs: Self, bounds: &Bounds<Self>) -> Self {
        debug_assert!(rhs != 0.0, "called `div_clamped` with a zero divisor");
        (self / rhs).clamp_into(bounds)
    }

    #[inline]
    fn abs_clamped(self, bounds: &Bounds<Self>) -> Self {
        self.abs().clamp_into(bounds)
    }

    #[inline]
    fn sample_inclusive<R: Rng + ?Sized>(
        rng: &mut R,
        lo: Self,
        hi: Self,
        bounds: &Bounds<Self>,
    ) -> Self {
        debug_assert!(lo <= hi, "called `sample_inclusive` with inverted bounds");
        // The uniform sampler rejects ranges whose extent `hi - lo` overflows
        // to infinity (which needs endpoints of opposite sign, e.g. the full
        // finite range). For those, draw a convex combination instead: with
        // `lo <= 0 <= hi` both products stay within [lo, hi], so the sum is
        // finite and in range.
        let wide_extent = !(hi - lo).is_finite();
        loop {
            let drawn = if wide_extent {
                let u: f64 = rng.random();
                lo * (1.0 - u) + hi * u
            } else {
                rng.random_range(lo..=hi)
            };
            if !(bounds.excludes_zero() && drawn == 0.0) {
                return drawn;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn int8() -> Bounds<i64> {
        Bounds::new(-128, 127, false)
    }

    fn nonzero_int8() -> Bounds<i64> {
        Bounds::new(-128, 127, true)
    }

    #[test]
    fn test_membership_error_int() {
        let b = int8();
        assert_eq!(0i64.membership_error(&b), None);
        assert_eq!(
            (-129i64).membership_error(&b),
            Some(CastErrorKind::OutOfRange(RangeDirection::Low))
        );
        assert_eq!(
            128i64.membership_error(&b),
            Some(CastErrorKind::OutOfRange(RangeDirection::High))
        );
        assert_eq!(
            0i64.membership_error(&nonzero_int8()),
            Some(CastErrorKind::ZeroExcluded)
        );
    }

    #[test]
    fn test_membership_error_float() {
        let b = Bounds::new(-f64::MAX, f64::MAX, false);
        assert_eq!(0.5f64.membership_error(&b), None);
        assert_eq!(
            f64::NAN.membership_error(&b),
            Some(CastErrorKind::NotANumber)
        );
        assert_eq!(
            f64::INFINITY.membership_error(&b),
            Some(CastErrorKind::NotFinite)
        );
        let unit = Bounds::new(0.0, 1.0, false);
        assert_eq!(
            2.0f64.membership_error(&unit),
            Some(CastErrorKind::OutOfRange(RangeDirection::High))
        );
    }

    #[test]
    fn test_clamp_into_int() {
        let b = int8();
        assert_eq!(200i64.clamp_into(&b), 127);
        assert_eq!((-200i64).clamp_into(&b), -128);
        assert_eq!(42i64.clamp_into(&b), 42);
    }

    #[test]
    fn test_clamp_zero_substitution() {
        assert_eq!(0i64.clamp_into(&nonzero_int8()), 1);
        // Entirely non-positive interval falls back to -1.
        let negative = Bounds::new(-10i64, 0, true);
        assert_eq!(0i64.clamp_into(&negative), -1);

        let nz_float = Bounds::new(-f64::MAX, f64::MAX, true);
        assert_eq!(0.0f64.clamp_into(&nz_float), f64::MIN_POSITIVE);
        assert_eq!((-0.0f64).clamp_into(&nz_float), f64::MIN_POSITIVE);
    }

    #[test]
    fn test_add_clamped_overflow() {
        let b = int8();
        assert_eq!(127i64.add_clamped(10, &b), 127);
        assert_eq!((-128i64).add_clamped(-10, &b), -128);
        assert_eq!(100i64.add_clamped(-50, &b), 50);
        // The widened sum is exact even at the carrier's own limits.
        let full = Bounds::new(i64::MIN, i64::MAX, false);
        assert_eq!(i64::MAX.add_clamped(i64::MAX, &full), i64::MAX);
    }

    #[test]
    fn test_sub_clamped_underflow() {
        let uint16 = Bounds::new(0i64, 65535, false);
        assert_eq!(5i64.sub_clamped(10, &uint16), 0);
        let positive = Bounds::new(1i64, 9007199254740991, false);
        assert_eq!(3i64.sub_clamped(8, &positive), 1);
    }

    #[test]
    fn test_mul_clamped() {
        let b = int8();
        assert_eq!(30i64.mul_clamped(10, &b), 127);
        assert_eq!((-30i64).mul_clamped(10, &b), -128);
        assert_eq!(5i64.mul_clamped(5, &b), 25);
    }

    #[test]
    fn test_pow_clamped() {
        let b = int8();
        assert_eq!(2i64.pow_clamped(3, &b), 8);
        assert_eq!(2i64.pow_clamped(10, &b), 127);
        assert_eq!((-2i64).pow_clamped(9, &b), -128);
        assert_eq!(0i64.pow_clamped(0, &b), 1);
        // Exceeds i128 before clamping; sign of the true result decides.
        let safe = Bounds::new(-9007199254740991i64, 9007199254740991, false);
        assert_eq!(10i64.pow_clamped(40, &safe), 9007199254740991);
        assert_eq!((-10i64).pow_clamped(41, &safe), -9007199254740991);
    }

    #[test]
    fn test_div_clamped_floors() {
        let safe = Bounds::new(-9007199254740991i64, 9007199254740991, false);
        assert_eq!((-7i64).div_clamped(2, &safe), -4);
        assert_eq!(7i64.div_clamped(-2, &safe), -4);
        assert_eq!((-7i64).div_clamped(-2, &safe), 3);
        assert_eq!(7i64.div_clamped(2, &safe), 3);
        assert_eq!(6i64.div_clamped(2, &safe), 3);
    }

    #[test]
    fn test_abs_clamped_boundary() {
        let b = int8();
        assert_eq!((-128i64).abs_clamped(&b), 127);
        assert_eq!((-5i64).abs_clamped(&b), 5);
        assert_eq!(5i64.abs_clamped(&b), 5);
    }

    #[test]
    fn test_float_overflow_clamps() {
        let finite = Bounds::new(-f64::MAX, f64::MAX, false);
        assert_eq!(f64::MAX.add_clamped(f64::MAX, &finite), f64::MAX);
        assert_eq!((-f64::MAX).sub_clamped(f64::MAX, &finite), -f64::MAX);
        assert_eq!(f64::MAX.mul_clamped(2.0, &finite), f64::MAX);
        assert_eq!(1e-300f64.div_clamped(1e-300, &finite), 1.0);
    }

    #[test]
    fn test_float_clamp_nan_pins_to_min() {
        let unit = Bounds::new(0.0f64, 1.0, false);
        assert_eq!(f64::NAN.clamp_into(&unit), 0.0);
        assert_eq!(f64::INFINITY.clamp_into(&unit), 1.0);
        assert_eq!(f64::NEG_INFINITY.clamp_into(&unit), 0.0);
    }

    #[test]
    fn test_sample_inclusive_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let b = int8();
        for _ in 0..1000 {
            let v = i64::sample_inclusive(&mut rng, -5, 5, &b);
            assert!((-5..=5).contains(&v));
        }
    }

    #[test]
    fn test_sample_inclusive_avoids_excluded_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let b = nonzero_int8();
        for _ in 0..1000 {
            let v = i64::sample_inclusive(&mut rng, -1, 1, &b);
            assert!(v == -1 || v == 1);
        }
    }

    #[test]
    fn test_sample_inclusive_float() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let b = Bounds::new(-f64::MAX, f64::MAX, false);
        for _ in 0..1000 {
            let v = f64::sample_inclusive(&mut rng, -2.5, 2.5, &b);
            assert!((-2.5..=2.5).contains(&v));
        }
    }

    #[test]
    fn test_sample_inclusive_float_full_range() {
        // The extent of the full finite range overflows to infinity; the
        // sampler must still draw a finite in-range value.
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let b = Bounds::new(-f64::MAX, f64::MAX, false);
        for _ in 0..1000 {
            let v = f64::sample_inclusive(&mut rng, -f64::MAX, f64::MAX, &b);
            assert!(v.is_finite());
            assert!((-f64::MAX..=f64::MAX).contains(&v));
        }
    }

    #[test]
    fn test_sample_inclusive_float_wide_asymmetric_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        let b = Bounds::new(-f64::MAX, f64::MAX, true);
        for _ in 0..1000 {
            let v = f64::sample_inclusive(&mut rng, -f64::MAX / 4.0, f64::MAX, &b);
            assert!(v.is_finite());
            assert!(v != 0.0);
            assert!((-f64::MAX / 4.0..=f64::MAX).contains(&v));
        }
    }
}
