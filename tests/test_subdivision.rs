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

use std::collections::HashSet;

use cgar_subd::MeshError;
use cgar_subd::geometry::{Aabb, CanonicalEdge, Point3};
use cgar_subd::mesh::{AdjacencyPolicy, LowValenceRule, SubDMesh, SubdivisionConfig};
use cgar_subd::operations::window::window2;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

const EPS: f64 = 1e-9;

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::xyz(x, y, z)
}

fn assert_close(a: &Point3<f64>, b: &Point3<f64>) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() < EPS, "{:?} != {:?}", a, b);
    }
}

fn square_vertices() -> Vec<Point3<f64>> {
    vec![
        p(0.0, 0.0, 0.0),
        p(10.0, 0.0, 0.0),
        p(10.0, 10.0, 0.0),
        p(0.0, 10.0, 0.0),
    ]
}

fn cube_vertices() -> Vec<Point3<f64>> {
    vec![
        p(0.0, 0.0, 0.0),
        p(10.0, 0.0, 0.0),
        p(10.0, 10.0, 0.0),
        p(0.0, 10.0, 0.0),
        p(10.0, 0.0, 10.0),
        p(0.0, 0.0, 10.0),
        p(0.0, 10.0, 10.0),
        p(10.0, 10.0, 10.0),
    ]
}

fn cube_faces() -> Vec<Vec<usize>> {
    vec![
        vec![0, 1, 2, 3],
        vec![0, 1, 4, 5],
        vec![2, 3, 6, 7],
        vec![6, 7, 4, 5],
        vec![1, 2, 7, 4],
        vec![0, 3, 6, 5],
    ]
}

fn make_cube() -> SubDMesh<f64> {
    SubDMesh::new(cube_vertices(), &cube_faces()).unwrap()
}

fn unique_edges(mesh: &SubDMesh<f64>) -> Vec<CanonicalEdge> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for face in mesh.face_iter() {
        for (a, b) in window2(face, true) {
            let key = CanonicalEdge::new(a, b);
            if seen.insert(key) {
                order.push(key);
            }
        }
    }
    order
}

#[test]
fn test_single_quad() {
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3]];
    let m = SubDMesh::new(square_vertices(), &faces).unwrap();
    let s = m.subdivide();

    assert_eq!(s.vertex_count(), 9);
    assert_eq!(s.face_count(), 4);
    assert!(s.face_iter().all(|f| f.len() == 4));
    assert_eq!(
        s.faces(),
        vec![
            vec![1, 6, 4, 5],
            vec![2, 7, 4, 6],
            vec![3, 8, 4, 7],
            vec![0, 5, 4, 8],
        ]
    );

    let v = s.vertices();
    assert_eq!(v[4], p(5.0, 5.0, 0.0));
    assert_eq!(v[5], p(5.0, 0.0, 0.0));
    assert_eq!(v[6], p(10.0, 5.0, 0.0));
    assert_eq!(v[7], p(5.0, 10.0, 0.0));
    assert_eq!(v[8], p(0.0, 5.0, 0.0));
    // each corner has two edges: (F + 2M - P) / 2 lands on the face point
    for corner in &v[..4] {
        assert_close(corner, &p(5.0, 5.0, 0.0));
    }
}

#[test]
fn test_single_quad_pinned_corners() {
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3]];
    let m = SubDMesh::new(square_vertices(), &faces).unwrap();
    let config = SubdivisionConfig::new().with_low_valence(LowValenceRule::Pin);
    let s = m.subdivide_with(&config).unwrap();

    assert_eq!(&s.vertices()[..4], square_vertices().as_slice());
    // only the vertex rule differs
    assert_eq!(&s.vertices()[4..], &m.subdivide().vertices()[4..]);
}

#[test]
fn test_two_quads() {
    let vertices = vec![
        p(0.0, 0.0, 0.0),
        p(10.0, 0.0, 0.0),
        p(10.0, 10.0, 0.0),
        p(0.0, 10.0, 0.0),
        p(10.0, 0.0, 10.0),
        p(0.0, 0.0, 10.0),
    ];
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3], vec![0, 1, 4, 5]];
    let m = SubDMesh::new(vertices, &faces).unwrap();
    let s = m.subdivide();

    assert_eq!(unique_edges(&m).len(), 7);
    assert_eq!(s.vertex_count(), 15);
    assert_eq!(s.face_count(), 8);
    assert_eq!(s.corner_count(), 8 * 4);

    let v = s.vertices();
    assert_eq!(v[6], p(5.0, 5.0, 0.0));
    assert_eq!(v[7], p(5.0, 0.0, 5.0));
    // shared edge (0, 1) is smoothed towards both face points
    assert_eq!(v[8], p(5.0, 1.25, 1.25));
    // boundary edge (1, 2) is a plain midpoint
    assert_eq!(v[9], p(10.0, 5.0, 0.0));

    // vertex 0: faces 0 and 1, edges (0,1), (0,3), (0,5)
    assert_close(&v[0], &p(25.0 / 9.0, 35.0 / 18.0, 35.0 / 18.0));
    // vertex 2 only touches two edges and moves onto face 0's point
    assert_close(&v[2], &p(5.0, 5.0, 0.0));

    let pinned = m
        .subdivide_with(&SubdivisionConfig::new().with_low_valence(LowValenceRule::Pin))
        .unwrap();
    assert_eq!(pinned.vertices()[2], p(10.0, 10.0, 0.0));
    assert_close(&pinned.vertices()[0], &v[0]);
}

#[test]
fn test_cube_edge_points_and_corner() {
    let m = make_cube();
    let s = m.subdivide();

    assert_eq!(s.vertex_count(), 8 + 6 + 12);
    assert_eq!(s.face_count(), 24);

    let v = s.vertices();
    assert_eq!(v[14], p(5.0, 1.25, 1.25));
    assert_eq!(v[15], p(8.75, 5.0, 1.25));

    let c = 20.0 / 9.0;
    assert_close(&v[0], &p(c, c, c));
    assert_close(&v[7], &p(10.0 - c, 10.0 - c, 10.0 - c));
}

#[test]
fn test_subdivide_leaves_input_untouched() {
    let m = make_cube();
    let before = m.vertices().to_vec();
    let faces_before = m.faces();
    let _ = m.subdivide();
    let _ = m.subdivide();
    assert_eq!(m.vertices(), before.as_slice());
    assert_eq!(m.faces(), faces_before);
    assert_eq!(m.common_edges().len(), 12);
}

#[test]
fn test_quad_count_matches_corner_count() {
    let vertices = vec![
        p(0.0, 0.0, 0.0),
        p(4.0, 0.0, 0.0),
        p(6.0, 3.0, 0.0),
        p(2.0, 6.0, 0.0),
        p(-2.0, 3.0, 0.0),
        p(2.0, -4.0, 0.0),
    ];
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3, 4], vec![1, 0, 5]];
    let m = SubDMesh::new(vertices, &faces).unwrap();
    let s = m.subdivide();

    assert_eq!(s.face_count(), 5 + 3);
    // 6 original + 2 face points + 7 edges
    assert_eq!(s.vertex_count(), 6 + 2 + 7);
}

#[test]
fn test_discarded_adjacency_falls_back_to_midpoints() {
    let m = make_cube();
    let s1 = m.subdivide();
    assert!(!s1.has_adjacency());
    assert!(s1.common_edges().is_empty());

    let s2 = s1.subdivide();
    let first_edge_point = s1.vertex_count() + s1.face_count();
    let p1 = s1.vertices();
    for (k, edge) in unique_edges(&s1).iter().enumerate() {
        let expected = p1[edge.a].midpoint(&p1[edge.b]);
        assert_eq!(s2.vertices()[first_edge_point + k], expected);
    }
}

#[test]
fn test_rebuilt_adjacency_keeps_smoothing() {
    let m = make_cube();
    let config = SubdivisionConfig::smooth();

    let s1 = m.subdivide_with(&config).unwrap();
    assert_eq!(s1.vertex_count(), 26);
    assert_eq!(s1.face_count(), 24);
    assert_eq!(s1.common_edges().len(), 48);

    let s2 = s1.subdivide_with(&config).unwrap();
    assert_eq!(s2.vertex_count(), 98);
    assert_eq!(s2.face_count(), 96);

    let parity = m.subdivide_n(2, &SubdivisionConfig::default()).unwrap();
    assert_eq!(parity.vertex_count(), 98);
    // vertex rule ignores adjacency, edge points do not
    assert_eq!(parity.vertices()[0], s2.vertices()[0]);
    let first_edge_point = 26 + 24;
    assert_ne!(
        parity.vertices()[first_edge_point],
        s2.vertices()[first_edge_point]
    );

    let chained = m.subdivide_n(2, &config).unwrap();
    assert_eq!(chained.vertices(), s2.vertices());
    assert_eq!(chained.faces(), s2.faces());
}

#[test]
fn test_refined_cube_stays_inside_hull() {
    let m = make_cube();
    let hull = Aabb::enclosing(m.vertices()).unwrap();
    let hull = Aabb::new(
        p(hull.min[0] - EPS, hull.min[1] - EPS, hull.min[2] - EPS),
        p(hull.max[0] + EPS, hull.max[1] + EPS, hull.max[2] + EPS),
    );
    let s = m.subdivide_n(3, &SubdivisionConfig::smooth()).unwrap();
    assert_eq!(s.face_count(), 6 * 4 * 4 * 4);
    for v in s.vertices() {
        assert!(hull.contains(v), "{:?} outside {:?}", v, hull);
    }
}

#[test]
fn test_config_limits() {
    let m = make_cube();
    assert_eq!(
        m.subdivide_n(0, &SubdivisionConfig::default()).unwrap_err(),
        MeshError::InvalidLevels(0)
    );

    let tight = SubdivisionConfig::new()
        .with_adjacency(AdjacencyPolicy::Rebuild)
        .with_max_faces(10);
    assert_eq!(
        m.subdivide_with(&tight).unwrap_err(),
        MeshError::MeshTooLarge {
            current: 6,
            projected: 24,
            max: 10
        }
    );

    let second_pass_too_big = SubdivisionConfig::new().with_max_faces(50);
    assert_eq!(
        m.subdivide_n(2, &second_pass_too_big).unwrap_err(),
        MeshError::MeshTooLarge {
            current: 24,
            projected: 96,
            max: 50
        }
    );
}

#[test]
fn test_vertex_rule_ignores_face_order() {
    let reference = make_cube().subdivide();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..8 {
        let mut faces = cube_faces();
        faces.shuffle(&mut rng);
        for face in faces.iter_mut() {
            let shift = rng.random_range(0..face.len());
            face.rotate_left(shift);
        }

        let shuffled = SubDMesh::new(cube_vertices(), &faces).unwrap().subdivide();
        assert_eq!(shuffled.vertex_count(), reference.vertex_count());
        for v in 0..8 {
            assert_close(&shuffled.vertices()[v], &reference.vertices()[v]);
        }
    }
}
