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

//! # Integer Domains
//!
//! Fixed-width machine integer ranges (`Int8` .. `Uint32`), IEEE-754 safe
//! integer ranges (`SafeInt`, `SafeUint`), and their positive, non-negative
//! and non-zero variants. All are carried as `i64` and share the widened
//! `i128` clamping engine, so arithmetic at any boundary is exact before it
//! clamps.
//!
//! Safe integers are those exactly representable in an IEEE-754 double
//! (magnitude at most 2^53 - 1); they bound the otherwise-unbounded
//! `SafeInt`/`SafeUint` domains.

use crate::macros::integer_domain;

/// The largest integer exactly representable in an IEEE-754 double: 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// The smallest safe integer: -(2^53 - 1).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

integer_domain!(
    /// Signed 8-bit integers: `[-128, 127]`.
    Int8, Int8Value, min = -128, max = 127, exclude_zero = false
);

integer_domain!(
    /// Signed 8-bit integers excluding zero.
    NonZeroInt8, NonZeroInt8Value, min = -128, max = 127, exclude_zero = true
);

integer_domain!(
    /// Signed 16-bit integers: `[-32768, 32767]`.
    Int16, Int16Value, min = -32768, max = 32767, exclude_zero = false
);

integer_domain!(
    /// Signed 16-bit integers excluding zero.
    NonZeroInt16, NonZeroInt16Value, min = -32768, max = 32767, exclude_zero = true
);

integer_domain!(
    /// Strictly positive 16-bit integers: `[1, 32767]`.
    PositiveInt16, PositiveInt16Value, min = 1, max = 32767, exclude_zero = false
);

integer_domain!(
    /// Non-negative 16-bit integers: `[0, 32767]`.
    NonNegativeInt16, NonNegativeInt16Value, min = 0, max = 32767, exclude_zero = false
);

integer_domain!(
    /// Signed 32-bit integers: `[-2^31, 2^31 - 1]`.
    Int32, Int32Value, min = -2147483648, max = 2147483647, exclude_zero = false
);

integer_domain!(
    /// Signed 32-bit integers excluding zero.
    NonZeroInt32, NonZeroInt32Value, min = -2147483648, max = 2147483647, exclude_zero = true
);

integer_domain!(
    /// Strictly positive 32-bit integers: `[1, 2^31 - 1]`.
    PositiveInt32, PositiveInt32Value, min = 1, max = 2147483647, exclude_zero = false
);

integer_domain!(
    /// Non-negative 32-bit integers: `[0, 2^31 - 1]`.
    NonNegativeInt32, NonNegativeInt32Value, min = 0, max = 2147483647, exclude_zero = false
);

integer_domain!(
    /// Unsigned 8-bit integers: `[0, 255]`.
    Uint8, Uint8Value, min = 0, max = 255, exclude_zero = false
);

integer_domain!(
    /// Unsigned 16-bit integers: `[0, 65535]`.
    Uint16, Uint16Value, min = 0, max = 65535, exclude_zero = false
);

integer_domain!(
    /// Strictly positive 16-bit unsigned integers: `[1, 65535]`.
    PositiveUint16, PositiveUint16Value, min = 1, max = 65535, exclude_zero = false
);

integer_domain!(
    /// Unsigned 32-bit integers: `[0, 2^32 - 1]`.
    Uint32, Uint32Value, min = 0, max = 4294967295, exclude_zero = false
);

integer_domain!(
    /// Strictly positive 32-bit unsigned integers: `[1, 2^32 - 1]`.
    PositiveUint32, PositiveUint32Value, min = 1, max = 4294967295, exclude_zero = false
);

integer_domain!(
    /// IEEE-754 safe integers: `[-(2^53 - 1), 2^53 - 1]`.
    SafeInt, SafeIntValue, min = MIN_SAFE_INTEGER, max = MAX_SAFE_INTEGER, exclude_zero = false
);

integer_domain!(
    /// Safe integers excluding zero.
    NonZeroSafeInt, NonZeroSafeIntValue,
    min = MIN_SAFE_INTEGER, max = MAX_SAFE_INTEGER, exclude_zero = true
);

integer_domain!(
    /// Strictly positive safe integers: `[1, 2^53 - 1]`.
    PositiveSafeInt, PositiveSafeIntValue,
    min = 1, max = MAX_SAFE_INTEGER, exclude_zero = false
);

integer_domain!(
    /// Non-negative safe integers: `[0, 2^53 - 1]`.
    NonNegativeSafeInt, NonNegativeSafeIntValue,
    min = 0, max = MAX_SAFE_INTEGER, exclude_zero = false
);

integer_domain!(
    /// Unsigned safe integers: `[0, 2^53 - 1]`.
    SafeUint, SafeUintValue, min = 0, max = MAX_SAFE_INTEGER, exclude_zero = false
);

integer_domain!(
    /// Strictly positive unsigned safe integers: `[1, 2^53 - 1]`.
    PositiveSafeUint, PositiveSafeUintValue,
    min = 1, max = MAX_SAFE_INTEGER, exclude_zero = false
);

/// Strictly positive integers; shorthand for [`PositiveSafeInt`].
pub type PositiveInt = PositiveSafeInt;

/// A validated member of the `PositiveInt` domain.
pub type PositiveIntValue = PositiveSafeIntValue;

/// Non-zero integers; shorthand for [`NonZeroSafeInt`].
pub type NonZeroInt = NonZeroSafeInt;

/// A validated member of the `NonZeroInt` domain.
pub type NonZeroIntValue = NonZeroSafeIntValue;

/// Non-negative integers; shorthand for [`NonNegativeSafeInt`].
pub type NonNegativeInt = NonNegativeSafeInt;

/// A validated member of the `NonNegativeInt` domain.
pub type NonNegativeIntValue = NonNegativeSafeIntValue;
