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

use std::collections::{HashMap, HashSet, hash_map::Entry};

use log::{debug, warn};

use crate::{
    error::MeshResult,
    geometry::{CanonicalEdge, Point3},
    mesh::{half_edge::HalfEdge, validate_face_loops},
    numeric::scalar::Scalar,
    operations::window::window2,
};

/// Half-edge structure built once from a vertex array and face loops.
///
/// Half-edges live in one arena and reference each other by index. Face `f`
/// owns the contiguous run starting at `face_half_edge(f)`, in loop order.
#[derive(Debug, Clone)]
pub struct HalfedgeDS<T: Scalar> {
    vertices: Vec<Point3<T>>,
    half_edges: Vec<HalfEdge>,
    face_starts: Vec<usize>,
    non_manifold: Vec<usize>,
}

impl<T: Scalar> HalfedgeDS<T> {
    /// Builds the face loops and pairs twins.
    ///
    /// Twins are matched through a map of still-unpaired half-edges keyed by
    /// undirected edge, in face order. Only the first two half-edges seen on
    /// an edge are linked; any later one on the same edge is left without a
    /// twin and reported by [`HalfedgeDS::non_manifold_half_edges`].
    pub fn new<F: AsRef<[usize]>>(vertices: Vec<Point3<T>>, faces: &[F]) -> MeshResult<Self> {
        validate_face_loops(vertices.len(), faces)?;

        let corner_count = faces.iter().map(|f| f.as_ref().len()).sum();
        let mut half_edges: Vec<HalfEdge> = Vec::with_capacity(corner_count);
        let mut face_starts = Vec::with_capacity(faces.len());
        let mut non_manifold = Vec::new();

        let mut open: HashMap<CanonicalEdge, usize> = HashMap::with_capacity(corner_count);
        let mut paired: HashSet<CanonicalEdge> = HashSet::new();
        let mut unmatched: Vec<(CanonicalEdge, usize)> = Vec::new();

        for (f, face) in faces.iter().enumerate() {
            let face = face.as_ref();
            let start = half_edges.len();
            let n = face.len();
            face_starts.push(start);

            for (k, &v) in face.iter().enumerate() {
                half_edges.push(HalfEdge::new(v, f, start + (k + 1) % n));
            }

            // Match against earlier faces only; this face's own half-edges
            // become candidates once the whole loop has been scanned.
            unmatched.clear();
            for (k, (a, b)) in window2(face, true).enumerate() {
                let he = start + k;
                let key = CanonicalEdge::new(a, b);
                if let Some(other) = open.remove(&key) {
                    half_edges[he].twin = Some(other);
                    half_edges[other].twin = Some(he);
                    paired.insert(key);
                } else if paired.contains(&key) {
                    warn!(
                        "edge ({}, {}) of face {} already has two half-edges; left without twin",
                        key.a, key.b, f
                    );
                    non_manifold.push(he);
                } else {
                    unmatched.push((key, he));
                }
            }

            for &(key, he) in &unmatched {
                match open.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(he);
                    }
                    Entry::Occupied(_) => {
                        warn!(
                            "face {} traverses edge ({}, {}) twice; left without twin",
                            f, key.a, key.b
                        );
                        non_manifold.push(he);
                    }
                }
            }
        }

        debug!(
            "built HalfedgeDS: {} faces, {} half-edges, {} boundary, {} non-manifold",
            face_starts.len(),
            half_edges.len(),
            open.len(),
            non_manifold.len()
        );

        Ok(Self {
            vertices,
            half_edges,
            face_starts,
            non_manifold,
        })
    }

    /// Entry point for traversal: the first half-edge of face 0.
    pub fn entry(&self) -> usize {
        self.face_starts[0]
    }

    pub fn entry_half_edge(&self) -> &HalfEdge {
        &self.half_edges[self.entry()]
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    pub fn half_edge(&self, he: usize) -> Option<&HalfEdge> {
        self.half_edges.get(he)
    }

    pub fn face_count(&self) -> usize {
        self.face_starts.len()
    }

    pub fn face_half_edge(&self, face: usize) -> Option<usize> {
        self.face_starts.get(face).copied()
    }

    pub fn next(&self, he: usize) -> usize {
        self.half_edges[he].next
    }

    pub fn twin(&self, he: usize) -> Option<usize> {
        self.half_edges[he].twin
    }

    pub fn origin(&self, he: usize) -> usize {
        self.half_edges[he].origin
    }

    /// Vertex the half-edge points to.
    pub fn target(&self, he: usize) -> usize {
        self.origin(self.next(he))
    }

    pub fn edge(&self, he: usize) -> CanonicalEdge {
        CanonicalEdge::new(self.origin(he), self.target(he))
    }

    /// Walks the `next` cycle of `face`, starting at its first half-edge.
    pub fn face_loop(&self, face: usize) -> FaceLoop<'_, T> {
        let start = self.face_half_edge(face);
        FaceLoop {
            ds: self,
            start: start.unwrap_or(usize::MAX),
            current: start,
        }
    }

    pub fn face_vertices(&self, face: usize) -> Vec<usize> {
        self.face_loop(face).map(|he| self.origin(he)).collect()
    }

    pub fn boundary_half_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(_, he)| he.is_boundary())
            .map(|(i, _)| i)
    }

    /// Half-edges left unpaired because their edge already had two.
    pub fn non_manifold_half_edges(&self) -> &[usize] {
        &self.non_manifold
    }

    /// True when every half-edge has a twin.
    pub fn is_closed(&self) -> bool {
        self.half_edges.iter().all(|he| he.twin.is_some())
    }
}

pub struct FaceLoop<'a, T: Scalar> {
    ds: &'a HalfedgeDS<T>,
    start: usize,
    current: Option<usize>,
}

impl<T: Scalar> Iterator for FaceLoop<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let he = self.current?;
        let next = self.ds.next(he);
        self.current = (next != self.start).then_some(next);
        Some(he)
    }
}
