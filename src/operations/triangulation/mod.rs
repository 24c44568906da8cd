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

//! Face triangulation for rendering and export.
//!
//! Triangles pass through, quads split along the `(v0, v2)` diagonal and
//! larger faces are fanned around their average point. The fan is an
//! approximation for non-planar or non-convex faces.

use crate::{
    geometry::{Point3, triangle::Triangle},
    mesh::subd_mesh::SubDMesh,
    numeric::scalar::Scalar,
    operations::window::window2,
};

pub trait Triangulate<T: Scalar> {
    /// Flat triangle list carrying positions by value.
    fn triangulate(&self) -> Vec<Triangle<T>>;

    /// Indexed triangulation; fan centers are appended to `points`.
    fn triangulate_indexed(&self) -> Triangulation<T>;
}

#[derive(Clone, Debug)]
pub struct Triangulation<T: Scalar> {
    pub points: Vec<Point3<T>>,
    pub triangles: Vec<[usize; 3]>,
}

impl<T: Scalar> Triangulation<T> {
    pub fn to_triangles(&self) -> Vec<Triangle<T>> {
        self.triangles
            .iter()
            .map(|&[a, b, c]| Triangle::new(self.points[a], self.points[b], self.points[c]))
            .collect()
    }
}

pub fn quad_to_triangles<T: Scalar>(
    a: Point3<T>,
    b: Point3<T>,
    c: Point3<T>,
    d: Point3<T>,
) -> (Triangle<T>, Triangle<T>) {
    (Triangle::new(a, b, c), Triangle::new(a, c, d))
}

/// Appends the triangles of one face loop to `out`.
pub fn triangulate_face<T: Scalar>(
    vertices: &[Point3<T>],
    face: &[usize],
    out: &mut Vec<Triangle<T>>,
) {
    match *face {
        [] | [_] | [_, _] => {}
        [a, b, c] => out.push(Triangle::new(vertices[a], vertices[b], vertices[c])),
        [a, b, c, d] => {
            let (t0, t1) = quad_to_triangles(vertices[a], vertices[b], vertices[c], vertices[d]);
            out.push(t0);
            out.push(t1);
        }
        _ => {
            let Some(center) = Point3::centroid(face.iter().map(|&v| vertices[v])) else {
                return;
            };
            for (p, q) in window2(face, true) {
                out.push(Triangle::new(center, vertices[p], vertices[q]));
            }
        }
    }
}

impl<T: Scalar> Triangulate<T> for SubDMesh<T> {
    fn triangulate(&self) -> Vec<Triangle<T>> {
        let mut triangles = Vec::with_capacity(self.corner_count());
        for face in self.face_iter() {
            triangulate_face(self.vertices(), face, &mut triangles);
        }
        triangles
    }

    fn triangulate_indexed(&self) -> Triangulation<T> {
        let mut points = self.vertices().to_vec();
        let mut triangles = Vec::with_capacity(self.corner_count());

        for face in self.face_iter() {
            match *face {
                [] | [_] | [_, _] => {}
                [a, b, c] => triangles.push([a, b, c]),
                [a, b, c, d] => {
                    triangles.push([a, b, c]);
                    triangles.push([a, c, d]);
                }
                _ => {
                    let Some(center) = Point3::centroid(face.iter().map(|&v| points[v])) else {
                        continue;
                    };
                    let ci = points.len();
                    points.push(center);
                    triangles.extend(window2(face, true).map(|(p, q)| [ci, p, q]));
                }
            }
        }

        Triangulation { points, triangles }
    }
}
