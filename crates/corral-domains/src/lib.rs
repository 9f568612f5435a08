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

//! # Corral Domains
//!
//! Concrete range-constrained numeric domains built on the `corral-core`
//! engine: fixed-width machine integers, IEEE-754 safe integers, finite
//! floats, and their positive / non-negative / non-zero variants.
//!
//! Every domain offers the same surface:
//!
//! - `cast(raw)` / `is(raw)` — fallible validated construction and the
//!   non-failing membership predicate.
//! - `clamp(raw)` — force an arbitrary raw number into the domain.
//! - `add` / `sub` / `mul` / `div` / `pow` / `abs` on the domain's value
//!   type — total clamping arithmetic that never leaves the range.
//! - `min_of` / `max_of` / `random` — range utilities, with the random
//!   generator injected by the caller.
//! - `MIN` / `MAX` — the declared bounds.
//!
//! ## Usage
//!
//! ```rust
//! use corral_domains::{DomainSpec, Int8, Uint16};
//!
//! let a = Int8::cast(120).unwrap();
//! let b = Int8::cast(10).unwrap();
//! assert_eq!(a.add(b).get(), 127); // clamped at Int8::MAX
//!
//! assert!(Uint16::is(65535));
//! assert!(!Uint16::is(-1));
//! assert_eq!(Uint16::clamp(100000).get(), 65535);
//! ```

mod macros;

pub mod float;
pub mod int;

pub use corral_core::{
    bounds::Bounds,
    domain::{DomainSpec, IntegerDomain},
    error::{
        CastError, CastErrorKind, DivisionByZeroError, EmptyInputError, RangeDirection,
    },
    value::{DomainValue, NonZeroValue},
};
pub use float::*;
pub use int::*;
