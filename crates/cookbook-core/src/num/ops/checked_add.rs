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

use core::ops::Add;

/// A trait for integer types that support checked addition by value.
///
/// This mirrors primitive `checked_add`, exposed as a trait so generic code
/// can require it as a bound.
///
/// # Examples
///
/// ```rust
/// # use cookbook_core::num::ops::checked_add::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! impl_checked_add_val {
    ($($t:ty),+ $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }
        )+
    };
}

impl_checked_add_val!(u8, u16, u32, u64, u128, usize);
impl_checked_add_val!(i8, i16, i32, i64, i128, isize);

/// Adds two or more integers left to right, returning `None` as soon as an
/// intermediate sum overflows.
///
/// # Examples
///
/// ```rust
/// # use cookbook_core::num::ops::checked_add::checked_add_all;
/// assert_eq!(checked_add_all(1_i32, 2, [3, 4, 5]), Some(15));
/// assert_eq!(checked_add_all(i32::MAX, 1, []), None);
/// ```
#[inline]
pub fn checked_add_all<T, I>(first: T, second: T, rest: I) -> Option<T>
where
    T: CheckedAddVal,
    I: IntoIterator<Item = T>,
{
    rest.into_iter()
        .try_fold(first.checked_add_val(second)?, T::checked_add_val)
}

/// Adds two or more integer expressions of the same type with overflow
/// checking, left to right.
///
/// Every operand is evaluated exactly once, even after an overflow has
/// already turned the running sum into `None`.
///
/// # Examples
///
/// ```rust
/// use cookbook_core::checked_add;
///
/// assert_eq!(checked_add!(1_i32, 2, 3), Some(6));
/// assert_eq!(checked_add!(u8::MAX, 1_u8), None);
/// ```
#[macro_export]
macro_rules! checked_add {
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let acc = ::core::option::Option::Some($first);
        $(
            let rhs = $rest;
            let acc = match acc {
                ::core::option::Option::Some(lhs) => {
                    $crate::num::ops::checked_add::CheckedAddVal::checked_add_val(lhs, rhs)
                }
                ::core::option::Option::None => ::core::option::Option::None,
            };
        )+
        acc
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_val_unsigned() {
        assert_eq!(200_u8.checked_add_val(55), Some(255));
        assert_eq!(200_u8.checked_add_val(56), None);
        assert_eq!(u64::MAX.checked_add_val(0), Some(u64::MAX));
        assert_eq!(usize::MAX.checked_add_val(1), None);
    }

    #[test]
    fn test_checked_add_val_signed() {
        assert_eq!((-128_i8).checked_add_val(127), Some(-1));
        assert_eq!(i32::MAX.checked_add_val(1), None);
        assert_eq!(i64::MIN.checked_add_val(-1), None);
        assert_eq!(i128::MIN.checked_add_val(i128::MAX), Some(-1));
    }

    #[test]
    fn test_checked_add_all() {
        assert_eq!(checked_add_all(1_i32, 2, [3, 4, 5]), Some(15));
        assert_eq!(checked_add_all(1_i32, 2, []), Some(3));
    }

    #[test]
    fn test_checked_add_all_overflow_in_first_pair() {
        assert_eq!(checked_add_all(i16::MAX, 1, [0]), None);
    }

    #[test]
    fn test_checked_add_all_overflow_in_rest() {
        assert_eq!(checked_add_all(100_u8, 100, [50, 10]), None);
    }

    #[test]
    fn test_checked_add_all_recovering_later_is_still_none() {
        // Left fold: the intermediate overflow is final even if a later
        // negative operand would bring the total back into range.
        assert_eq!(checked_add_all(i8::MAX, 1, [-1]), None);
    }

    #[test]
    fn test_checked_add_macro() {
        assert_eq!(crate::checked_add!(1_i32, 2), Some(3));
        assert_eq!(crate::checked_add!(1_i32, 2, 3, 4, 5), Some(15));
        assert_eq!(crate::checked_add!(i32::MAX, 1), None);
        assert_eq!(crate::checked_add!(i32::MAX, 1, -5), None);
    }

    #[test]
    fn test_checked_add_macro_evaluates_all_operands() {
        let mut seen = Vec::new();
        let mut op = |v: u8| {
            seen.push(v);
            v
        };
        let sum = crate::checked_add!(op(255), op(1), op(2));
        assert_eq!(sum, None);
        assert_eq!(seen, vec![255, 1, 2]);
    }
}
