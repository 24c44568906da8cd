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

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::{
    error::{MeshError, MeshResult},
    geometry::{CanonicalEdge, Point3},
    mesh::validate_face_loops,
    numeric::scalar::Scalar,
};

/// Two faces sharing exactly two vertices, `face_a < face_b`.
///
/// `v0` and `v1` are the shared vertices in the order they appear in
/// `face_b`'s loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommonEdge {
    pub face_a: usize,
    pub face_b: usize,
    pub v0: usize,
    pub v1: usize,
}

impl CommonEdge {
    pub fn edge(&self) -> CanonicalEdge {
        CanonicalEdge::new(self.v0, self.v1)
    }

    pub fn touches_face(&self, face: usize) -> bool {
        self.face_a == face || self.face_b == face
    }

    pub fn touches_vertex(&self, vertex: usize) -> bool {
        self.v0 == vertex || self.v1 == vertex
    }

    pub fn as_array(&self) -> [usize; 4] {
        [self.face_a, self.face_b, self.v0, self.v1]
    }
}

/// Face-adjacency mesh: packed face loops plus the table of face pairs that
/// share an edge.
///
/// Face `i` occupies `faces[face_offsets[i]..face_offsets[i + 1]]`; the last
/// face runs to the end of `faces`.
#[derive(Debug, Clone)]
pub struct SubDMesh<T: Scalar> {
    vertices: Vec<Point3<T>>,
    faces: Vec<usize>,
    face_offsets: Vec<usize>,
    common_edges: Vec<CommonEdge>,
    // first common-edge record for each vertex pair
    edge_lookup: HashMap<CanonicalEdge, usize>,
}

impl<T: Scalar> SubDMesh<T> {
    /// Packs the face loops and records every face pair sharing exactly two
    /// vertices.
    ///
    /// Fails with [`MeshError::NonManifoldFaces`] as soon as a pair shares
    /// more than two vertices; no partial mesh is returned.
    pub fn new<F: AsRef<[usize]>>(vertices: Vec<Point3<T>>, faces: &[F]) -> MeshResult<Self> {
        validate_face_loops(vertices.len(), faces)?;

        let mut packed = Vec::with_capacity(faces.iter().map(|f| f.as_ref().len()).sum());
        let mut face_offsets = Vec::with_capacity(faces.len());
        for face in faces {
            face_offsets.push(packed.len());
            packed.extend_from_slice(face.as_ref());
        }

        let mesh = Self::from_packed(vertices, packed, face_offsets).with_adjacency()?;
        debug!(
            "built SubDMesh: {} vertices, {} faces, {} common edges",
            mesh.vertices.len(),
            mesh.face_count(),
            mesh.common_edges.len()
        );
        Ok(mesh)
    }

    /// Assembles a mesh from already packed faces, without adjacency.
    pub(crate) fn from_packed(
        vertices: Vec<Point3<T>>,
        faces: Vec<usize>,
        face_offsets: Vec<usize>,
    ) -> Self {
        Self {
            vertices,
            faces,
            face_offsets,
            common_edges: Vec::new(),
            edge_lookup: HashMap::new(),
        }
    }

    /// Replaces the common-edge table with one computed from the faces.
    pub(crate) fn with_adjacency(mut self) -> MeshResult<Self> {
        self.common_edges = self.find_common_edges()?;
        self.edge_lookup.clear();
        for (idx, ce) in self.common_edges.iter().enumerate() {
            self.edge_lookup.entry(ce.edge()).or_insert(idx);
        }
        Ok(self)
    }

    /// Pairs (i, j), i < j, in lexicographic order. Candidates come from a
    /// vertex-to-face incidence table so only faces that touch are compared.
    fn find_common_edges(&self) -> MeshResult<Vec<CommonEdge>> {
        let mut vertex_faces: Vec<Vec<usize>> = vec![Vec::new(); self.vertices.len()];
        for (f, face) in self.face_iter().enumerate() {
            for &v in face {
                if vertex_faces[v].last() != Some(&f) {
                    vertex_faces[v].push(f);
                }
            }
        }

        let mut common_edges = Vec::new();
        let mut members: HashSet<usize> = HashSet::new();
        let mut candidates: BTreeSet<usize> = BTreeSet::new();

        for (i, face) in self.face_iter().enumerate() {
            members.clear();
            members.extend(face.iter().copied());

            candidates.clear();
            for &v in face {
                candidates.extend(vertex_faces[v].iter().copied().filter(|&j| j > i));
            }

            for &j in &candidates {
                let shared: Vec<usize> = self
                    .face(j)
                    .unwrap_or_default()
                    .iter()
                    .copied()
                    .filter(|v| members.contains(v))
                    .collect();

                match shared.len() {
                    2 => common_edges.push(CommonEdge {
                        face_a: i,
                        face_b: j,
                        v0: shared[0],
                        v1: shared[1],
                    }),
                    n if n > 2 => {
                        return Err(MeshError::NonManifoldFaces {
                            face_a: i,
                            face_b: j,
                            shared: n,
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(common_edges)
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.face_offsets.len()
    }

    /// Total number of face corners, i.e. the sum of all face degrees.
    pub fn corner_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face_offsets(&self) -> &[usize] {
        &self.face_offsets
    }

    /// Vertex loop of face `face`, `None` when out of range.
    pub fn face(&self, face: usize) -> Option<&[usize]> {
        let start = *self.face_offsets.get(face)?;
        let end = self
            .face_offsets
            .get(face + 1)
            .copied()
            .unwrap_or(self.faces.len());
        Some(&self.faces[start..end])
    }

    pub fn face_iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.face_count()).filter_map(|f| self.face(f))
    }

    /// Owned copy of every face loop.
    pub fn faces(&self) -> Vec<Vec<usize>> {
        self.face_iter().map(<[usize]>::to_vec).collect()
    }

    /// Average of the face's vertex positions.
    pub fn face_point(&self, face: usize) -> Option<Point3<T>> {
        Point3::centroid(self.face(face)?.iter().map(|&v| self.vertices[v]))
    }

    pub fn common_edges(&self) -> &[CommonEdge] {
        &self.common_edges
    }

    /// Common edges flattened as `face_a, face_b, v0, v1` groups.
    pub fn common_edges_flat(&self) -> Vec<usize> {
        self.common_edges.iter().flat_map(CommonEdge::as_array).collect()
    }

    pub fn has_adjacency(&self) -> bool {
        !self.common_edges.is_empty()
    }

    /// Indices of the common edges touching `face` at `vertex`. Every
    /// record is inspected.
    pub fn common_edges_indices(&self, face: usize, vertex: usize) -> Vec<usize> {
        self.common_edges
            .iter()
            .enumerate()
            .filter(|(_, ce)| ce.touches_face(face) && ce.touches_vertex(vertex))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// First common edge between vertices `a` and `b`, in either order.
    pub fn find_common_edge(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_lookup.get(&CanonicalEdge::new(a, b)).copied()
    }
}
