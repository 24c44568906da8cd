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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// Axis-aligned bounding box.
///
/// `union` and `extend` are commutative and associative, so partial boxes
/// computed over disjoint subsets can be merged in any order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub min: Point<T, N>,
    pub max: Point<T, N>,
}

impl<T: Scalar, const N: usize> Aabb<T, N> {
    pub fn new(min: Point<T, N>, max: Point<T, N>) -> Self {
        Aabb { min, max }
    }

    pub fn from_point(p: &Point<T, N>) -> Self {
        Aabb { min: *p, max: *p }
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Aabb {
            min: a.min_by_axis(b),
            max: a.max_by_axis(b),
        }
    }

    /// Smallest box around every point, `None` for an empty set.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T, N>>,
    {
        let mut it = points.into_iter();
        let mut bb = Aabb::from_point(it.next()?);
        for p in it {
            bb.extend(p);
        }
        Some(bb)
    }

    pub fn extend(&mut self, p: &Point<T, N>) {
        self.min = self.min.min_by_axis(p);
        self.max = self.max.max_by_axis(p);
    }

    pub fn union(&self, other: &Aabb<T, N>) -> Aabb<T, N> {
        Aabb {
            min: self.min.min_by_axis(&other.min),
            max: self.max.max_by_axis(&other.max),
        }
    }

    pub fn contains(&self, p: &Point<T, N>) -> bool {
        (0..N).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }
}
