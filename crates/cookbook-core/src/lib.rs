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

//! # Cookbook Core
//!
//! Two small, independent building blocks: addition over any type that
//! implements [`core::ops::Add`], and a lazy counting sequence over a
//! half-open integer range.
//!
//! ## Modules
//!
//! - `num`: The typed adder (`add`, `add_all`, and the variadic [`add!`]
//!   macro), plus overflow-checked addition for primitive integers under
//!   `num::ops` ([`checked_add!`]).
//! - `math`: `Vec3`, a three-component `f32` vector with componentwise
//!   addition, usable anywhere the adder expects an `Add` type.
//! - `seq`: `Counter<T>`, a state machine that yields `start, start + 1, ...,
//!   end - 1` one value per `next()` call.
//!
//! ## Usage
//!
//! ```rust
//! use cookbook_core::add;
//! use cookbook_core::seq::counter::counter;
//!
//! assert_eq!(add!(1, 2, 3, 4, 5), 15);
//!
//! let digits: String = counter(1, 6).map(|n: i32| n.to_string()).collect();
//! assert_eq!(digits, "12345");
//! ```

pub mod math;
pub mod num;
pub mod seq;
