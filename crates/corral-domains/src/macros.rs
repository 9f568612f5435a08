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

//! Declaration macros for concrete domains.
//!
//! Each macro expands to a zero-sized tag type, its `DomainSpec` binding,
//! and a value alias. A domain declaration is a single call naming the
//! range, so the two dozen domains in this crate stay free of duplicated
//! engine code.

/// Declares an integer domain (carrier `i64`) and its value alias.
macro_rules! integer_domain {
    (
        $(#[$meta:meta])*
        $name:ident, $alias:ident, min = $min:expr, max = $max:expr, exclude_zero = $ez:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
        pub struct $name;

        impl $crate::DomainSpec for $name {
            type Repr = i64;
            const NAME: &'static str = stringify!($name);
            const MIN: i64 = $min;
            const MAX: i64 = $max;
            const EXCLUDE_ZERO: bool = $ez;
        }

        impl $crate::IntegerDomain for $name {}

        #[doc = concat!("A validated member of the `", stringify!($name), "` domain.")]
        pub type $alias = $crate::DomainValue<$name>;
    };
}

/// Declares a float domain (carrier `f64`) and its value alias.
macro_rules! float_domain {
    (
        $(#[$meta:meta])*
        $name:ident, $alias:ident, min = $min:expr, max = $max:expr, exclude_zero = $ez:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
        pub struct $name;

        impl $crate::DomainSpec for $name {
            type Repr = f64;
            const NAME: &'static str = stringify!($name);
            const MIN: f64 = $min;
            const MAX: f64 = $max;
            const EXCLUDE_ZERO: bool = $ez;
        }

        #[doc = concat!("A validated member of the `", stringify!($name), "` domain.")]
        pub type $alias = $crate::DomainValue<$name>;
    };
}

pub(crate) use float_domain;
pub(crate) use integer_domain;
