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

//! # Three-Component Vector
//!
//! `Vec3`, an `f32` triple with componentwise `+` and `+=`.

use std::ops::{Add, AddAssign};

/// A three-component `f32` vector.
///
/// Addition is componentwise, which makes `Vec3` a valid operand for the
/// typed adder.
///
/// # Examples
///
/// ```rust
/// use cookbook_core::add;
/// # use cookbook_core::math::vec3::Vec3;
///
/// let v = add!(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 3.0, 4.0));
/// assert_eq!(v, Vec3::new(3.0, 5.0, 7.0));
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    coords: [f32; 3],
}

impl Vec3 {
    /// Creates a new `Vec3` from its coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { coords: [x, y, z] }
    }

    /// Returns the x coordinate.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.coords[0]
    }

    /// Returns the y coordinate.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.coords[1]
    }

    /// Returns the z coordinate.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.coords[2]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(coords: [f32; 3]) -> Self {
        Self { coords }
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.coords
    }
}

impl std::fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
