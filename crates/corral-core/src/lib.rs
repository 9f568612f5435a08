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

//! # Corral Core
//!
//! The parametrized engine behind range-constrained numeric domains:
//! validated construction and self-clamping arithmetic for values that must
//! stay inside a declared `[min, max]` interval.
//!
//! ## Modules
//!
//! - `bounds`: [`Bounds<T>`](bounds::Bounds), the runtime view of a domain
//!   specification (inclusive interval plus zero-exclusion flag) with
//!   validated constructors.
//! - `scalar`: [`ClampScalar`](scalar::ClampScalar), the carrier-level
//!   clamping arithmetic for `i64` and `f64` — overflow-safe widening,
//!   floor division, saturating exponentiation, boundary absolute value,
//!   zero avoidance, and inclusive uniform sampling.
//! - `domain`: [`DomainSpec`](domain::DomainSpec), the declarative tag-type
//!   description of one domain with the validator (`is`, `cast`) and range
//!   utilities (`clamp`, `random`, `min_of`, `max_of`), plus
//!   [`IntegerDomain`](domain::IntegerDomain) for `f64` acceptance.
//! - `value`: [`DomainValue<D>`](value::DomainValue), the zero-cost branded
//!   value carrying the clamping algebra, and
//!   [`NonZeroValue<D>`](value::NonZeroValue), the static non-zero divisor
//!   witness.
//! - `error`: the error taxonomy for validation and range utilities.
//!
//! ## Purpose
//!
//! Concrete domains (`Int8`, `SafeUint`, `FiniteNumber`, ...) are thin tag
//! types bound to this engine; see the `corral-domains` crate. Everything
//! here is pure and stateless: operations are total once inputs are
//! validated, safe to call from any thread, and the one external effect —
//! random generation — takes its generator as an explicit parameter.

pub mod bounds;
pub mod domain;
pub mod error;
pub mod scalar;
pub mod value;
