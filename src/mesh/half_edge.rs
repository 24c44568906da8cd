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

/// Directed edge owned by exactly one face loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// Vertex the half-edge starts at.
    pub origin: usize,
    pub face: usize,
    pub next: usize,
    /// `None` on boundary edges and on dropped non-manifold edges.
    pub twin: Option<usize>,
}

impl HalfEdge {
    pub fn new(origin: usize, face: usize, next: usize) -> Self {
        Self {
            origin,
            face,
            next,
            twin: None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }
}
