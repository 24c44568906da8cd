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

use cgar_subd::geometry::{Point3, Triangle};
use cgar_subd::mesh::{SubDMesh, SubdivisionConfig};
use cgar_subd::operations::Triangulate;

const EPS: f64 = 1e-9;

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::xyz(x, y, z)
}

fn total_area(triangles: &[Triangle<f64>]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}

fn regular_polygon(n: usize) -> Vec<Point3<f64>> {
    (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            p(a.cos(), a.sin(), 0.0)
        })
        .collect()
}

#[test]
fn test_triangle_passes_through() {
    let vertices = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2]];
    let m = SubDMesh::new(vertices.clone(), &faces).unwrap();

    let triangles = m.triangulate();
    assert_eq!(triangles.len(), 1);
    assert_eq!(
        triangles[0],
        Triangle::new(vertices[0], vertices[1], vertices[2])
    );
}

#[test]
fn test_quad_splits_into_two() {
    let vertices = vec![
        p(0.0, 0.0, 0.0),
        p(10.0, 0.0, 0.0),
        p(10.0, 10.0, 0.0),
        p(0.0, 10.0, 0.0),
    ];
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3]];
    let m = SubDMesh::new(vertices.clone(), &faces).unwrap();

    let triangles = m.triangulate();
    assert_eq!(triangles.len(), 2);
    assert_eq!(triangles[0], Triangle::new(vertices[0], vertices[1], vertices[2]));
    assert_eq!(triangles[1], Triangle::new(vertices[0], vertices[2], vertices[3]));
    assert!((total_area(&triangles) - 100.0).abs() < EPS);

    // both halves keep the quad's winding
    for t in &triangles {
        assert!(t.normal()[2] > 0.0);
    }
}

#[test]
fn test_polygon_fans_from_average_point() {
    let vertices = regular_polygon(6);
    let faces: Vec<Vec<usize>> = vec![(0..6).collect()];
    let m = SubDMesh::new(vertices, &faces).unwrap();

    let triangles = m.triangulate();
    assert_eq!(triangles.len(), 6);
    for t in &triangles {
        assert!(t.a.distance_to(&p(0.0, 0.0, 0.0)) < EPS);
    }
    let hexagon_area = 3.0 * 3f64.sqrt() / 2.0;
    assert!((total_area(&triangles) - hexagon_area).abs() < EPS);
}

#[test]
fn test_indexed_triangulation() {
    let vertices = regular_polygon(5);
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3, 4]];
    let m = SubDMesh::new(vertices, &faces).unwrap();

    let indexed = m.triangulate_indexed();
    assert_eq!(indexed.points.len(), 6);
    assert_eq!(
        indexed.triangles,
        vec![[5, 0, 1], [5, 1, 2], [5, 2, 3], [5, 3, 4], [5, 4, 0]]
    );
    assert_eq!(indexed.to_triangles(), m.triangulate());
}

#[test]
fn test_subdivided_mesh_triangulates_to_twice_its_quads() {
    let vertices = vec![
        p(0.0, 0.0, 0.0),
        p(10.0, 0.0, 0.0),
        p(10.0, 10.0, 0.0),
        p(0.0, 10.0, 0.0),
        p(10.0, 0.0, 10.0),
        p(0.0, 0.0, 10.0),
    ];
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3], vec![0, 1, 4, 5]];
    let s = SubDMesh::new(vertices, &faces)
        .unwrap()
        .subdivide_n(3, &SubdivisionConfig::default())
        .unwrap();

    assert_eq!(s.face_count(), 2 * 64);
    assert_eq!(s.triangulate().len(), 2 * s.face_count());
}
