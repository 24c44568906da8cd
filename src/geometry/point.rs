// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array::from_fn,
    ops::{Add, Div, Index, Mul, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point::zero()
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_f64(vals: [f64; N]) -> Self {
        Point {
            coords: vals.map(T::from_f64_lossy),
        }
    }

    pub fn zero() -> Self {
        Point {
            coords: from_fn(|_| T::zero()),
        }
    }

    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        *other - *self
    }

    /// Linear interpolation: `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + (other.coords[i] - self.coords[i]) * t),
        }
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, T::half())
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        self.vector_to(other).norm_squared()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Arithmetic mean of a set of points, `None` when the set is empty.
    pub fn centroid<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sum = Point::zero();
        let mut count = 0usize;
        for p in points {
            sum = sum + p;
            count += 1;
        }
        (count > 0).then(|| sum / T::from_count(count))
    }

    pub fn min_by_axis(&self, other: &Self) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i].min(other.coords[i])),
        }
    }

    pub fn max_by_axis(&self, other: &Self) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i].max(other.coords[i])),
        }
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

// Componentwise sum, used to accumulate affine combinations.
impl<T: Scalar, const N: usize> Add for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        Vector::new(from_fn(|i| self.coords[i] - rhs.coords[i]))
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn mul(self, rhs: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c * rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn div(self, rhs: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c / rhs),
        }
    }
}
