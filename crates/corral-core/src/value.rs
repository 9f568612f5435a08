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

//! # Branded Domain Values (Zero-Cost)
//!
//! [`DomainValue<D>`] is a phantom-tagged wrapper around a domain's carrier,
//! compiling down to a transparent `i64` or `f64` with no runtime overhead.
//! A value of this type can only come from the domain's validator or from a
//! clamping operation, so holding one is proof of membership — values of
//! different domains cannot be mixed, and invalid values cannot exist.
//!
//! The clamping algebra lives here as methods: `add`, `sub`, `mul`, `pow`
//! and `abs` are total and always return a member; `div` takes a
//! [`NonZeroValue<D>`] witness so division by zero is unrepresentable.
//! Values are immutable — every operation produces a new value.
//!
//! ## Usage
//!
//! ```rust
//! use corral_core::domain::DomainSpec;
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Percent;
//! impl DomainSpec for Percent {
//!     type Repr = i64;
//!     const NAME: &'static str = "Percent";
//!     const MIN: i64 = 0;
//!     const MAX: i64 = 100;
//!     const EXCLUDE_ZERO: bool = false;
//! }
//!
//! let a = Percent::cast(80).unwrap();
//! let b = Percent::cast(30).unwrap();
//! assert_eq!(a.add(b).get(), 100); // 110 clamps to the maximum
//! assert_eq!(b.sub(a).get(), 0);   // -50 clamps to the minimum
//! assert_eq!(format!("{}", a), "Percent(80)");
//! ```

use crate::{
    domain::DomainSpec,
    error::DivisionByZeroError,
    scalar::ClampScalar,
};
use num_traits::Zero;

/// A carrier value tagged with the domain it was validated against.
///
/// `#[repr(transparent)]`: the tag is compile-time only and the value has
/// the same layout as its carrier.
#[repr(transparent)]
pub struct DomainValue<D>
where
    D: DomainSpec,
{
    value: D::Repr,
    _marker: std::marker::PhantomData<D>,
}

impl<D> DomainValue<D>
where
    D: DomainSpec,
{
    /// Wraps a raw carrier value without validating it.
    ///
    /// Callers must have established membership; a `debug_assert!` documents
    /// the invariant during development.
    #[inline(always)]
    pub(crate) fn new_unchecked(value: D::Repr) -> Self {
        debug_assert!(
            value.membership_error(&D::bounds()).is_none(),
            "called `DomainValue::new_unchecked` with {} outside of {}",
            value,
            D::NAME,
        );
        Self {
            value,
            _marker: std::marker::PhantomData,
        }
    }

    /// The underlying carrier value.
    #[inline(always)]
    pub fn get(self) -> D::Repr {
        self.value
    }

    /// Clamping addition. Total; the result is always a member.
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new_unchecked(self.value.add_clamped(rhs.value, &D::bounds()))
    }

    /// Clamping subtraction. Total; the result is always a member.
    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::new_unchecked(self.value.sub_clamped(rhs.value, &D::bounds()))
    }

    /// Clamping multiplication. Total; the result is always a member.
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self::new_unchecked(self.value.mul_clamped(rhs.value, &D::bounds()))
    }

    /// Clamping exponentiation by a non-negative integer exponent.
    ///
    /// The exponent type makes negative exponents unrepresentable. `0^0`
    /// is `1` (clamped like any other result).
    #[inline]
    pub fn pow(self, exp: u32) -> Self {
        Self::new_unchecked(self.value.pow_clamped(exp, &D::bounds()))
    }

    /// Clamping division by a statically non-zero divisor.
    ///
    /// Integer domains floor-divide (rounding toward negative infinity, so
    /// `-7 / 2 == -4`); float domains divide directly. Total; never fails.
    #[inline]
    pub fn div(self, rhs: NonZeroValue<D>) -> Self {
        Self::new_unchecked(self.value.div_clamped(rhs.raw(), &D::bounds()))
    }

    /// Clamping division with a runtime zero check.
    ///
    /// Defense-in-depth for call sites that hold a plain divisor and cannot
    /// express the non-zero constraint statically.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZeroError`] when `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Result<Self, DivisionByZeroError> {
        let divisor = rhs.nonzero().ok_or(DivisionByZeroError)?;
        Ok(self.div(divisor))
    }

    /// Clamping absolute value.
    ///
    /// For symmetric two's-complement-style domains, `abs` of the minimum
    /// clamps to the maximum (e.g. `Int8::abs(-128) == 127`).
    #[inline]
    pub fn abs(self) -> Self {
        Self::new_unchecked(self.value.abs_clamped(&D::bounds()))
    }

    /// Promotes this value to a non-zero divisor witness.
    ///
    /// Returns `None` when the value is zero. For zero-excluding domains
    /// this always succeeds.
    #[inline]
    pub fn nonzero(self) -> Option<NonZeroValue<D>> {
        if self.value.is_zero() {
            None
        } else {
            Some(NonZeroValue(self))
        }
    }
}

impl<D: DomainSpec> Clone for DomainValue<D> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: DomainSpec> Copy for DomainValue<D> {}

impl<D: DomainSpec> PartialEq for DomainValue<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: DomainSpec> Eq for DomainValue<D> where D::Repr: Eq {}

impl<D: DomainSpec> PartialOrd for DomainValue<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: DomainSpec> Ord for DomainValue<D>
where
    D::Repr: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<D: DomainSpec> std::hash::Hash for DomainValue<D>
where
    D::Repr: std::hash::Hash,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Zero clamped into the domain (the non-zero substitute for
/// zero-excluding domains).
impl<D: DomainSpec> Default for DomainValue<D> {
    #[inline]
    fn default() -> Self {
        D::clamp(D::Repr::zero())
    }
}

impl<D: DomainSpec> std::fmt::Debug for DomainValue<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", D::NAME, self.value)
    }
}

impl<D: DomainSpec> std::fmt::Display for DomainValue<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", D::NAME, self.value)
    }
}

impl<D: DomainSpec> std::ops::Add for DomainValue<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        DomainValue::add(self, rhs)
    }
}

impl<D: DomainSpec> std::ops::Sub for DomainValue<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        DomainValue::sub(self, rhs)
    }
}

impl<D: DomainSpec> std::ops::Mul for DomainValue<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        DomainValue::mul(self, rhs)
    }
}

impl<D: DomainSpec> std::ops::Div<NonZeroValue<D>> for DomainValue<D> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: NonZeroValue<D>) -> Self {
        DomainValue::div(self, rhs)
    }
}

/// A domain value that is provably non-zero: the static divisor constraint.
///
/// Obtained through [`DomainValue::nonzero`] or `TryFrom`; division through
/// this witness is total.
#[repr(transparent)]
pub struct NonZeroValue<D>(DomainValue<D>)
where
    D: DomainSpec;

impl<D> NonZeroValue<D>
where
    D: DomainSpec,
{
    /// The witnessed domain value.
    #[inline(always)]
    pub fn get(self) -> DomainValue<D> {
        self.0
    }

    /// The underlying carrier value.
    #[inline(always)]
    pub fn raw(self) -> D::Repr {
        self.0.get()
    }
}

impl<D: DomainSpec> Clone for NonZeroValue<D> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: DomainSpec> Copy for NonZeroValue<D> {}

impl<D: DomainSpec> PartialEq for NonZeroValue<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: DomainSpec> std::fmt::Debug for NonZeroValue<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NonZero{:?}", self.0)
    }
}

impl<D: DomainSpec> TryFrom<DomainValue<D>> for NonZeroValue<D> {
    type Error = DivisionByZeroError;

    #[inline]
    fn try_from(value: DomainValue<D>) -> Result<Self, Self::Error> {
        value.nonzero().ok_or(DivisionByZeroError)
    }
}
