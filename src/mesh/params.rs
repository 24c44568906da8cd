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

/// What a subdivision pass does with the face-adjacency table of its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjacencyPolicy {
    /// The refined mesh carries no common edges. A further pass then treats
    /// every edge as a boundary edge and places edge points at midpoints.
    #[default]
    Discard,

    /// Recompute common edges on the refined mesh so chained passes keep
    /// smoothing.
    Rebuild,
}

/// How the vertex rule treats vertices with fewer than three incident edges,
/// such as the corners of an open quad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LowValenceRule {
    /// Apply `(F + 2M + (n - 3)P) / n` for every `n`. A lone quad corner
    /// moves onto its face point.
    #[default]
    Formula,

    /// Keep such vertices at their original position.
    Pin,
}

/// Parameters for subdivision passes.
#[derive(Debug, Clone)]
pub struct SubdivisionConfig {
    pub adjacency: AdjacencyPolicy,
    pub low_valence: LowValenceRule,

    /// Maximum faces allowed in a refined mesh.
    pub max_faces: usize,
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        Self {
            adjacency: AdjacencyPolicy::default(),
            low_valence: LowValenceRule::default(),
            max_faces: 10_000_000,
        }
    }
}

impl SubdivisionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that rebuilds adjacency after every pass.
    #[must_use]
    pub fn smooth() -> Self {
        Self {
            adjacency: AdjacencyPolicy::Rebuild,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyPolicy) -> Self {
        self.adjacency = adjacency;
        self
    }

    #[must_use]
    pub fn with_low_valence(mut self, low_valence: LowValenceRule) -> Self {
        self.low_valence = low_valence;
        self
    }

    #[must_use]
    pub fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SubdivisionConfig::default();
        assert_eq!(config.adjacency, AdjacencyPolicy::Discard);
        assert_eq!(config.low_valence, LowValenceRule::Formula);
        assert_eq!(config.max_faces, 10_000_000);

        let config = SubdivisionConfig::smooth().with_max_faces(12);
        assert_eq!(config.adjacency, AdjacencyPolicy::Rebuild);
        assert_eq!(config.max_faces, 12);
    }
}
