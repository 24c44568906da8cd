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

use thiserror::Error;

/// Errors raised while building or refining a mesh.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The face list is empty.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face loop has fewer than three vertices.
    #[error("face {face} has {len} vertices (at least 3 required)")]
    DegenerateFace { face: usize, len: usize },

    /// A face loop references a vertex that does not exist.
    #[error("face {face} references vertex {vertex} but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// Two faces overlap on more than a single edge.
    #[error("faces {face_a} and {face_b} share {shared} vertices (at most 2 allowed)")]
    NonManifoldFaces {
        face_a: usize,
        face_b: usize,
        shared: usize,
    },

    /// Chained subdivision asked for zero levels.
    #[error("invalid subdivision level count: {0} (must be >= 1)")]
    InvalidLevels(u32),

    /// The refined mesh would exceed the configured face limit.
    #[error("subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        current: usize,
        projected: usize,
        max: usize,
    },
}

pub type MeshResult<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::NonManifoldFaces {
            face_a: 0,
            face_b: 3,
            shared: 4,
        };
        let display = format!("{err}");
        assert!(display.contains("faces 0 and 3"));
        assert!(display.contains("share 4"));

        let err = MeshError::MeshTooLarge {
            current: 24,
            projected: 96,
            max: 50,
        };
        let display = format!("{err}");
        assert!(display.contains("24"));
        assert!(display.contains("96"));
        assert!(display.contains("50"));
    }
}
