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

pub mod half_edge;
pub mod halfedge_ds;
pub mod params;
pub mod subd_mesh;
pub mod subdivision;

pub use half_edge::HalfEdge;
pub use halfedge_ds::HalfedgeDS;
pub use params::{AdjacencyPolicy, LowValenceRule, SubdivisionConfig};
pub use subd_mesh::{CommonEdge, SubDMesh};

use crate::error::{MeshError, MeshResult};

/// Checks that every face loop has at least three vertices and only
/// references existing vertices.
pub(crate) fn validate_face_loops<F: AsRef<[usize]>>(
    vertex_count: usize,
    faces: &[F],
) -> MeshResult<()> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    for (face, vs) in faces.iter().enumerate() {
        let vs = vs.as_ref();
        if vs.len() < 3 {
            return Err(MeshError::DegenerateFace {
                face,
                len: vs.len(),
            });
        }
        if let Some(&vertex) = vs.iter().find(|&&v| v >= vertex_count) {
            return Err(MeshError::VertexOutOfRange {
                face,
                vertex,
                vertex_count,
            });
        }
    }
    Ok(())
}
