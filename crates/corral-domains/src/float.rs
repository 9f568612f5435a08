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

//! # Finite Float Domains
//!
//! Arbitrary finite `f64` ranges. Membership excludes NaN and the
//! infinities; arithmetic that overflows IEEE-754 (producing an infinity)
//! clamps to the nearest finite bound. The positive variant's minimum is
//! [`f64::MIN_POSITIVE`], the smallest normal double, which is also the
//! zero substitute for the non-zero variant.

use crate::macros::float_domain;

float_domain!(
    /// All finite doubles: `[-f64::MAX, f64::MAX]`.
    FiniteNumber, FiniteNumberValue,
    min = -f64::MAX, max = f64::MAX, exclude_zero = false
);

float_domain!(
    /// Finite doubles excluding zero.
    NonZeroFiniteNumber, NonZeroFiniteNumberValue,
    min = -f64::MAX, max = f64::MAX, exclude_zero = true
);

float_domain!(
    /// Strictly positive finite doubles: `[f64::MIN_POSITIVE, f64::MAX]`.
    ///
    /// The minimum is the smallest *normal* double, so positive subnormals
    /// (e.g. `1e-310`) are deliberately outside the domain; `cast` rejects
    /// them as below-minimum and `clamp` raises them to the minimum.
    PositiveFiniteNumber, PositiveFiniteNumberValue,
    min = f64::MIN_POSITIVE, max = f64::MAX, exclude_zero = false
);

float_domain!(
    /// Non-negative finite doubles: `[0.0, f64::MAX]`.
    NonNegativeFiniteNumber, NonNegativeFiniteNumberValue,
    min = 0.0, max = f64::MAX, exclude_zero = false
);
