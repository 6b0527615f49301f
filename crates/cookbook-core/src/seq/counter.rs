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

//! # Counting Sequence
//!
//! A lazy, finite sequence over the half-open range `[start, end)`.
//!
//! `Counter<T>` holds only the next value to produce and the exclusive end.
//! Each `next()` resumes from that state, yields one value and advances by
//! exactly one step, so nothing is materialized up front and the consumer
//! may stop at any point by dropping the counter.
//!
//! ## Highlights
//!
//! - `start >= end` produces an empty sequence rather than an error.
//! - Never overflows: the last value produced is `end - 1`.
//! - Implements `FusedIterator`; `size_hint` is exact whenever the remaining
//!   count fits in `usize`.
//! - Not `Clone`: a counter is consumed once. Call the factory again for a
//!   fresh, independent sequence.
//!
//! ## Usage
//!
//! ```rust
//! use cookbook_core::seq::counter::counter;
//!
//! let mut out = String::new();
//! for n in counter(1_i32, 6) {
//!     out += &n.to_string();
//! }
//! assert_eq!(out, "12345");
//!
//! assert_eq!(counter(5, 5).count(), 0);
//! assert_eq!(counter(9, 3).count(), 0);
//! ```

use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A lazy iterator over the integers `start, start + 1, ..., end - 1`.
///
/// # Invariants
///
/// `current <= end_exclusive` at all times; the counter is exhausted exactly
/// when they are equal.
///
/// # Examples
///
/// ```rust
/// # use cookbook_core::seq::counter::Counter;
/// let values: Vec<_> = Counter::new(-2, 2).collect();
/// assert_eq!(values, vec![-2, -1, 0, 1]);
/// ```
#[derive(Debug)]
pub struct Counter<T>
where
    T: PrimInt,
{
    current: T,
    end_exclusive: T,
}

/// Creates a counter yielding every integer in `[start, end)`.
///
/// Returns an empty counter if `start >= end`.
///
/// # Examples
///
/// ```rust
/// # use cookbook_core::seq::counter::counter;
/// assert_eq!(counter(0, 3).collect::<Vec<i32>>(), vec![0, 1, 2]);
/// assert_eq!(counter(3, 0).next(), None::<i32>);
/// ```
#[inline]
pub fn counter<T>(start: T, end: T) -> Counter<T>
where
    T: PrimInt,
{
    Counter::new(start, end)
}

impl<T> Counter<T>
where
    T: PrimInt,
{
    /// Creates a new `Counter` over `[start, end)`.
    ///
    /// An inverted range is clamped to the empty counter at `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cookbook_core::seq::counter::Counter;
    /// let c = Counter::new(10, 4);
    /// assert!(c.is_exhausted());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self {
            current: start.min(end),
            end_exclusive: end,
        }
    }

    /// Returns the value the next call to `next()` will produce, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cookbook_core::seq::counter::Counter;
    /// let mut c = Counter::new(7, 9);
    /// assert_eq!(c.peek(), Some(7));
    /// c.next();
    /// assert_eq!(c.peek(), Some(8));
    /// c.next();
    /// assert_eq!(c.peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<T> {
        (!self.is_exhausted()).then_some(self.current)
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns `true` once every value has been produced.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current >= self.end_exclusive
    }

    /// Returns how many values are left to produce, or `None` if that count
    /// does not fit in `usize` (or in `T` itself for very wide signed ranges).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cookbook_core::seq::counter::Counter;
    /// let mut c = Counter::new(0_i64, 10);
    /// assert_eq!(c.remaining(), Some(10));
    /// c.next();
    /// assert_eq!(c.remaining(), Some(9));
    ///
    /// assert_eq!(Counter::new(i64::MIN, i64::MAX).remaining(), None);
    /// ```
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.end_exclusive.checked_sub(&self.current)?.to_usize()
    }
}

impl<T> Iterator for Counter<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let value = self.current;
            // current < end, so this cannot overflow
            self.current = self.current + T::one();
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Counter<T> where T: PrimInt {}

impl<T> std::fmt::Display for Counter<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Counter[{}, {})", self.current, self.end_exclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn collect(start: IntegerType, end: IntegerType) -> Vec<IntegerType> {
        counter(start, end).collect()
    }

    #[test]
    fn test_counter_digits() {
        let mut s = String::new();
        for num in counter(1_i64, 6) {
            s += &num.to_string();
        }
        assert_eq!(s, "12345");
    }

    #[test]
    fn test_counter_values_in_order() {
        assert_eq!(collect(0, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(collect(-3, 1), vec![-3, -2, -1, 0]);
    }

    #[test]
    fn test_counter_empty_when_equal() {
        assert!(collect(4, 4).is_empty());
        assert!(counter(4, 4).is_exhausted());
    }

    #[test]
    fn test_counter_empty_when_inverted() {
        assert!(collect(6, 1).is_empty());
        assert_eq!(counter(6, 1).remaining(), Some(0));
        assert_eq!(counter(6_u32, 1).next(), None);
    }

    #[test]
    fn test_counter_restartable() {
        let first = counter(0, 3);
        let second = counter(0, 3);
        assert_eq!(first.collect::<Vec<IntegerType>>(), vec![0, 1, 2]);
        assert_eq!(second.collect::<Vec<IntegerType>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_counter_instances_are_independent() {
        let mut a = counter(0, 3);
        let mut b = counter(0, 3);
        assert_eq!(a.next(), Some(0));
        assert_eq!(a.next(), Some(1));
        assert_eq!(b.next(), Some(0));
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(1));
        assert_eq!(a.next(), None);
        assert_eq!(b.next(), Some(2));
        assert_eq!(b.next(), None);
    }

    #[test]
    fn test_counter_early_break() {
        let mut seen = Vec::new();
        let mut c = counter(0, 100);
        for n in c.by_ref() {
            if n == 3 {
                break;
            }
            seen.push(n);
        }
        assert_eq!(seen, vec![0, 1, 2]);
        // Resumes right after the value that triggered the break.
        assert_eq!(c.next(), Some(4));
    }

    #[test]
    fn test_counter_advances_one_step_per_next() {
        let mut c = counter(10, 13);
        assert_eq!(c.peek(), Some(10));
        assert_eq!(c.next(), Some(10));
        assert_eq!(c.peek(), Some(11));
        assert_eq!(c.remaining(), Some(2));
    }

    #[test]
    fn test_counter_near_type_max() {
        let values: Vec<i8> = counter(i8::MAX - 2, i8::MAX).collect();
        assert_eq!(values, vec![125, 126]);

        let values: Vec<u8> = counter(u8::MAX - 1, u8::MAX).collect();
        assert_eq!(values, vec![254]);
    }

    #[test]
    fn test_counter_near_type_min() {
        let values: Vec<i16> = counter(i16::MIN, i16::MIN + 2).collect();
        assert_eq!(values, vec![i16::MIN, i16::MIN + 1]);
    }

    #[test]
    fn test_size_hint() {
        let mut c = counter(0, 4);
        assert_eq!(c.size_hint(), (4, Some(4)));
        c.next();
        assert_eq!(c.size_hint(), (3, Some(3)));

        let empty = counter(9, 2);
        assert_eq!(empty.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_wide_range() {
        let c = counter(IntegerType::MIN, IntegerType::MAX);
        assert_eq!(c.size_hint(), (usize::MAX, None));
        assert_eq!(c.remaining(), None);
    }

    #[test]
    fn test_fused_iterator() {
        let mut c = counter(0, 1);
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(c);
    }

    #[test]
    fn test_counter_is_send() {
        fn assert_send<S: Send>(_: S) {}
        assert_send(counter(0_u64, 10));
    }

    #[test]
    fn test_composition() {
        let evens: Vec<IntegerType> = counter(0, 10).filter(|n| n % 2 == 0).collect();
        assert_eq!(evens, vec![0, 2, 4, 6, 8]);

        let total: IntegerType = counter(1, 6).sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn test_end_accessor() {
        assert_eq!(counter(0, 8).end(), 8);
        assert_eq!(counter(12, 8).end(), 8);
    }

    #[test]
    fn test_traits_display_debug() {
        let mut c = counter(1, 6);
        c.next();
        assert_eq!(format!("{}", c), "Counter[2, 6)");
        assert_eq!(
            format!("{:?}", c),
            "Counter { current: 2, end_exclusive: 6 }"
        );
    }
}
