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

//! # Typed Addition
//!
//! Addition that accepts any single type `T` implementing
//! `Add<Output = T>`: primitive integers and floats, or user types with their
//! own `Add` impl such as [`Vec3`](crate::math::vec3::Vec3).
//!
//! The bound is checked at compile time. Passing a type without `Add`, or
//! mixing operand types, is rejected by the compiler rather than failing at
//! runtime:
//!
//! ```rust,compile_fail
//! use cookbook_core::add;
//!
//! struct Opaque;
//! let _ = add!(Opaque, Opaque);
//! ```
//!
//! ```rust,compile_fail
//! use cookbook_core::add;
//!
//! let _ = add!(1_i32, 2.0_f64);
//! ```
//!
//! Operands are always folded from left to right, so for `a, b, c, d` the
//! result is `((a + b) + c) + d`. This matters for floating point and for
//! non-commutative `Add` impls.

use core::ops::Add;

/// Adds two values of the same type.
///
/// # Examples
///
/// ```rust
/// # use cookbook_core::num::add::add;
/// assert_eq!(add(1, 2), 3);
/// assert_eq!(add(1.0_f32, 2.0), 3.0);
/// ```
#[inline(always)]
pub fn add<T>(lhs: T, rhs: T) -> T
where
    T: Add<Output = T>,
{
    lhs + rhs
}

/// Adds two or more values of the same type, folding `rest` from the left.
///
/// Taking `first` and `second` separately keeps the two-operand minimum in
/// the signature; `rest` may be empty.
///
/// # Examples
///
/// ```rust
/// # use cookbook_core::num::add::add_all;
/// assert_eq!(add_all(1, 2, [3, 4, 5]), 15);
/// assert_eq!(add_all(1, 2, []), 3);
/// ```
#[inline]
pub fn add_all<T, I>(first: T, second: T, rest: I) -> T
where
    T: Add<Output = T>,
    I: IntoIterator<Item = T>,
{
    rest.into_iter().fold(add(first, second), add)
}

/// Adds two or more expressions of the same type, left to right.
///
/// Expands to nested [`add`] calls, so each operand is checked against the
/// `Add<Output = T>` bound. Fewer than two operands does not match the macro.
///
/// # Examples
///
/// ```rust
/// use cookbook_core::add;
///
/// assert_eq!(add!(1, 2), 3);
/// assert_eq!(add!(1, 2, 3, 4, 5), 15);
/// ```
///
/// ```rust,compile_fail
/// use cookbook_core::add;
///
/// let _ = add!(1);
/// ```
#[macro_export]
macro_rules! add {
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let acc = $first;
        $(
            let acc = $crate::num::add::add(acc, $rest);
        )+
        acc
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;

    /// Records operands in the order they were combined.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Trace(Vec<u8>);

    impl Add for Trace {
        type Output = Trace;

        fn add(mut self, rhs: Trace) -> Trace {
            self.0.extend(rhs.0);
            self
        }
    }

    fn t(v: u8) -> Trace {
        Trace(vec![v])
    }

    #[test]
    fn test_add_integers() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(add(-7_i64, 7), 0);
        assert_eq!(add(250_u8, 5), 255);
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(1.0_f32, 2.0), 3.0);
        assert_eq!(add(0.5_f64, 0.25), 0.75);
    }

    #[test]
    fn test_add_vec3() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(add(v1, v2), Vec3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_add_macro_two_operands() {
        assert_eq!(crate::add!(1, 2), 3);
        assert_eq!(crate::add!(1.0_f32, 2.0), 3.0);
    }

    #[test]
    fn test_add_macro_five_operands() {
        assert_eq!(crate::add!(1, 2, 3, 4, 5), 15);
    }

    #[test]
    fn test_add_macro_trailing_comma() {
        assert_eq!(crate::add!(10, 20, 30,), 60);
    }

    #[test]
    fn test_add_macro_vec3() {
        let sum = crate::add!(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(sum, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_add_macro_folds_left_to_right() {
        let sum = crate::add!(t(1), t(2), t(3), t(4));
        assert_eq!(sum, Trace(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_add_macro_evaluates_each_operand_once() {
        let mut calls = 0;
        let mut next = || {
            calls += 1;
            calls
        };
        let sum = crate::add!(next(), next(), next());
        assert_eq!(sum, 6);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_add_all_folds_left_to_right() {
        let sum = add_all(t(1), t(2), [t(3), t(4), t(5)]);
        assert_eq!(sum, Trace(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_add_all_empty_rest() {
        assert_eq!(add_all(4, 5, std::iter::empty()), 9);
    }

    #[test]
    fn test_add_all_accepts_iterators() {
        assert_eq!(add_all(1, 2, (3..=5).map(|n| n * 10)), 123);
    }
}
