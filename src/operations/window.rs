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

//! Consecutive pairs and triples over a vertex loop.
//!
//! Open windows stop at the last element; closed windows wrap around to the
//! front so that every element starts exactly one window. Sequences shorter
//! than the window size yield nothing.

use std::iter::FusedIterator;

/// Iterator returned by [`window2`].
#[derive(Clone, Debug)]
pub struct Window2<'a, V> {
    seq: &'a [V],
    pos: usize,
    count: usize,
}

/// Iterator returned by [`window3`].
#[derive(Clone, Debug)]
pub struct Window3<'a, V> {
    seq: &'a [V],
    pos: usize,
    count: usize,
}

fn window_count(len: usize, size: usize, closed: bool) -> usize {
    if len < size {
        0
    } else if closed {
        len
    } else {
        len - size + 1
    }
}

/// Yields `(seq[i], seq[i + 1])`, plus `(seq[last], seq[0])` when `closed`.
pub fn window2<V: Copy>(seq: &[V], closed: bool) -> Window2<'_, V> {
    Window2 {
        seq,
        pos: 0,
        count: window_count(seq.len(), 2, closed),
    }
}

/// Yields `(seq[i], seq[i + 1], seq[i + 2])`; when `closed` the two triples
/// that wrap past the end are included.
pub fn window3<V: Copy>(seq: &[V], closed: bool) -> Window3<'_, V> {
    Window3 {
        seq,
        pos: 0,
        count: window_count(seq.len(), 3, closed),
    }
}

impl<V: Copy> Iterator for Window2<'_, V> {
    type Item = (V, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.count {
            return None;
        }
        let n = self.seq.len();
        let i = self.pos;
        self.pos += 1;
        Some((self.seq[i], self.seq[(i + 1) % n]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.pos;
        (rest, Some(rest))
    }
}

impl<V: Copy> Iterator for Window3<'_, V> {
    type Item = (V, V, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.count {
            return None;
        }
        let n = self.seq.len();
        let i = self.pos;
        self.pos += 1;
        Some((self.seq[i], self.seq[(i + 1) % n], self.seq[(i + 2) % n]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.pos;
        (rest, Some(rest))
    }
}

impl<V: Copy> ExactSizeIterator for Window2<'_, V> {}
impl<V: Copy> ExactSizeIterator for Window3<'_, V> {}
impl<V: Copy> FusedIterator for Window2<'_, V> {}
impl<V: Copy> FusedIterator for Window3<'_, V> {}
