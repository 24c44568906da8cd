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

use crate::{
    geometry::{aabb::Aabb, point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

/// A triangle by value, as produced by triangulation and STL loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T: Scalar> {
    pub a: Point<T, 3>,
    pub b: Point<T, 3>,
    pub c: Point<T, 3>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Point<T, 3>, b: Point<T, 3>, c: Point<T, 3>) -> Self {
        Triangle { a, b, c }
    }

    pub fn vertices(&self) -> [Point<T, 3>; 3] {
        [self.a, self.b, self.c]
    }

    /// Unnormalized normal, `(b - a) x (c - a)`; its length is twice the area.
    pub fn scaled_normal(&self) -> Vector<T, 3> {
        let e1 = self.b - self.a;
        let e2 = self.c - self.a;
        e1.cross(&e2)
    }

    /// Unit normal following the right-hand rule; zero for degenerate triangles.
    pub fn normal(&self) -> Vector<T, 3> {
        self.scaled_normal().normalized()
    }

    pub fn area(&self) -> T {
        self.scaled_normal().norm() * T::half()
    }

    pub fn bounds(&self) -> Aabb<T, 3> {
        let mut bb = Aabb::from_points(&self.a, &self.b);
        bb.extend(&self.c);
        bb
    }
}
