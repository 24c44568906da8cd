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

//! Catmull-Clark refinement of a [`SubDMesh`], generalized to faces of any
//! degree. One pass turns an n-gon into n quads:
//!
//! ```text
//!   face point  F = mean of the face's vertices
//!   edge point  E = (M + (F0 + F1) / 2) / 2   when the edge has a common-edge record
//!               E = M                         otherwise (M = edge midpoint)
//!   vertex      V' = (mean(F) + 2 mean(M) + (n - 3) V) / n,   n = incident edges
//! ```
//!
//! The vertex rule applies for every `n` unless the config pins vertices
//! with `n < 3` ([`LowValenceRule::Pin`]).
//!
//! Output layout: original vertices keep their indices, face points follow
//! in face order, then edge points in first-encounter order.

use std::collections::HashMap;

use log::debug;

use crate::{
    error::{MeshError, MeshResult},
    geometry::{CanonicalEdge, Point3},
    mesh::{
        params::{AdjacencyPolicy, LowValenceRule, SubdivisionConfig},
        subd_mesh::SubDMesh,
    },
    numeric::scalar::Scalar,
    operations::window::{window2, window3},
};

struct EdgeRecord<T: Scalar> {
    midpoint: Point3<T>,
    index: usize, // index of the edge point in the refined mesh
}

fn push_unique<V: PartialEq>(items: &mut Vec<V>, item: V) {
    if !items.contains(&item) {
        items.push(item);
    }
}

impl<T: Scalar> SubDMesh<T> {
    /// One refinement pass. The result carries no common edges, so a second
    /// call on it uses the unsmoothed edge rule everywhere; use
    /// [`SubDMesh::subdivide_with`] with [`AdjacencyPolicy::Rebuild`] to
    /// keep smoothing across passes.
    pub fn subdivide(&self) -> SubDMesh<T> {
        self.refine(LowValenceRule::default())
    }

    pub fn subdivide_with(&self, config: &SubdivisionConfig) -> MeshResult<SubDMesh<T>> {
        let projected = self.corner_count();
        if projected > config.max_faces {
            return Err(MeshError::MeshTooLarge {
                current: self.face_count(),
                projected,
                max: config.max_faces,
            });
        }

        let refined = self.refine(config.low_valence);
        match config.adjacency {
            AdjacencyPolicy::Discard => Ok(refined),
            AdjacencyPolicy::Rebuild => refined.with_adjacency(),
        }
    }

    /// Applies `levels` passes in a row.
    pub fn subdivide_n(&self, levels: u32, config: &SubdivisionConfig) -> MeshResult<SubDMesh<T>> {
        if levels == 0 {
            return Err(MeshError::InvalidLevels(levels));
        }
        let mut mesh = self.subdivide_with(config)?;
        for _ in 1..levels {
            mesh = mesh.subdivide_with(config)?;
        }
        Ok(mesh)
    }

    fn refine(&self, low_valence: LowValenceRule) -> SubDMesh<T> {
        let original = self.vertices();

        let face_points: Vec<Point3<T>> = (0..self.face_count())
            .map(|f| self.face_point(f).unwrap_or_default())
            .collect();

        let mut vertices =
            Vec::with_capacity(original.len() + face_points.len() + self.corner_count());
        vertices.extend_from_slice(original);
        let face_point_offset = vertices.len();
        vertices.extend_from_slice(&face_points);

        // corner_edges[face_offsets[f] + k] is the edge point of
        // (face[k], face[k + 1]), aligned with the packed face array.
        let mut edges: HashMap<CanonicalEdge, EdgeRecord<T>> =
            HashMap::with_capacity(self.corner_count());
        let mut corner_edges = Vec::with_capacity(self.corner_count());
        for face in self.face_iter() {
            for (a, b) in window2(face, true) {
                let key = CanonicalEdge::new(a, b);
                let record = edges.entry(key).or_insert_with(|| {
                    // min-first so the midpoint does not depend on winding
                    let midpoint = original[key.a].midpoint(&original[key.b]);
                    vertices.push(self.edge_point(key.a, key.b, &midpoint, &face_points));
                    EdgeRecord {
                        midpoint,
                        index: vertices.len() - 1,
                    }
                });
                corner_edges.push(record.index);
            }
        }

        let mut faces = Vec::with_capacity(4 * self.corner_count());
        let mut face_offsets = Vec::with_capacity(self.corner_count());
        for (f, face) in self.face_iter().enumerate() {
            let start = self.face_offsets()[f];
            let n = face.len();
            // triple i is (face[i], face[i + 1], face[i + 2])
            for (i, (_, v, _)) in window3(face, true).enumerate() {
                let prev_edge = corner_edges[start + i];
                let next_edge = corner_edges[start + (i + 1) % n];
                face_offsets.push(faces.len());
                faces.extend_from_slice(&[v, next_edge, face_point_offset + f, prev_edge]);
            }
        }

        let moved = self.reposition_vertices(&mut vertices, &face_points, &edges, low_valence);

        debug!(
            "subdivided: {} -> {} faces, {} -> {} vertices ({} edge points, {} vertices moved)",
            self.face_count(),
            face_offsets.len(),
            original.len(),
            vertices.len(),
            edges.len(),
            moved
        );

        SubDMesh::from_packed(vertices, faces, face_offsets)
    }

    fn edge_point(
        &self,
        a: usize,
        b: usize,
        midpoint: &Point3<T>,
        face_points: &[Point3<T>],
    ) -> Point3<T> {
        match self.find_common_edge(a, b) {
            Some(idx) => {
                let ce = self.common_edges()[idx];
                let faces_mid = face_points[ce.face_a].midpoint(&face_points[ce.face_b]);
                midpoint.midpoint(&faces_mid)
            }
            None => *midpoint,
        }
    }

    /// Writes the refined position of every original vertex into
    /// `vertices`. Incident faces and edges are collected as sets, so the
    /// result does not depend on face order. Vertices on no face keep their
    /// position, as do those with fewer than three incident edges under
    /// [`LowValenceRule::Pin`].
    fn reposition_vertices(
        &self,
        vertices: &mut [Point3<T>],
        face_points: &[Point3<T>],
        edges: &HashMap<CanonicalEdge, EdgeRecord<T>>,
        low_valence: LowValenceRule,
    ) -> usize {
        let original = self.vertices();
        let mut incident_faces: Vec<Vec<usize>> = vec![Vec::new(); original.len()];
        let mut incident_edges: Vec<Vec<CanonicalEdge>> = vec![Vec::new(); original.len()];

        for (f, face) in self.face_iter().enumerate() {
            for (a, b) in window2(face, true) {
                let key = CanonicalEdge::new(a, b);
                push_unique(&mut incident_edges[a], key);
                push_unique(&mut incident_edges[b], key);
            }
            for &v in face {
                push_unique(&mut incident_faces[v], f);
            }
        }

        let two = T::from_count(2);
        let three = T::from_count(3);
        let mut moved = 0;

        for (v, edge_keys) in incident_edges.iter_mut().enumerate() {
            if edge_keys.is_empty()
                || (edge_keys.len() < 3 && low_valence == LowValenceRule::Pin)
            {
                continue;
            }
            edge_keys.sort_unstable();

            let f_mean = Point3::centroid(incident_faces[v].iter().map(|&f| face_points[f]));
            let r_mean = Point3::centroid(
                edge_keys
                    .iter()
                    .filter_map(|key| edges.get(key))
                    .map(|record| record.midpoint),
            );
            let (Some(f_mean), Some(r_mean)) = (f_mean, r_mean) else {
                continue;
            };

            let n = T::from_count(edge_keys.len());
            vertices[v] = (f_mean + r_mean * two + original[v] * (n - three)) / n;
            moved += 1;
        }

        moved
    }
}
