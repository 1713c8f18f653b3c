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

use smallvec::SmallVec;

use crate::impl_mesh;

impl_mesh! {
    #[inline]
    pub fn source(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].twin].vertex
    }

    #[inline]
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[he].vertex
    }

    #[inline]
    pub fn is_border(&self, he: usize) -> bool {
        self.half_edges[he].is_border()
    }

    /// `true` when either side of the edge has no face.
    pub fn is_border_edge(&self, he: usize) -> bool {
        self.is_border(he) || self.is_border(self.half_edges[he].twin)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn half_edge_between(&self, from: usize, to: usize) -> Option<usize> {
        self.edge_map.get(&(from, to)).copied()
    }

    /// Returns the indices of the half-edges bounding face `f`,
    /// in CCW order.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        SmallVec::from_buf(self.face_cycle(f))
    }

    #[inline]
    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        let [he0, he1, he2] = self.face_cycle(f);
        debug_assert_eq!(self.half_edges[he2].next, he0);

        let a = self.half_edges[he2].vertex; // TAIL of he0
        let b = self.half_edges[he0].vertex; // HEAD of he0
        let c = self.half_edges[he1].vertex; // HEAD of he1
        [a, b, c]
    }

    /// The cycle of half-edges reached from `he` through `next`, either a
    /// face or a boundary loop.
    pub fn half_edges_around_face(&self, he: usize) -> Vec<usize> {
        let mut result = vec![he];
        let mut h = self.half_edges[he].next;
        while h != he {
            result.push(h);
            h = self.half_edges[h].next;
            if result.len() > self.half_edges.len() {
                break;
            }
        }
        result
    }

    /// Returns all half-edges leaving vertex `v`, in CCW order. Works on
    /// meshes with open boundaries once `build_boundary_loops()` ran; an
    /// isolated vertex has none.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        let Some(start) = self.vertices[v].half_edge else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[self.half_edges[h].twin].next;
            if h == start || result.len() > self.half_edges.len() {
                break;
            }
        }
        result
    }

    /// One half-edge per undirected edge.
    pub fn edges(&self) -> Vec<usize> {
        (0..self.half_edges.len())
            .filter(|&h| h < self.half_edges[h].twin)
            .collect()
    }

    pub fn border_half_edges(&self) -> Vec<usize> {
        (0..self.half_edges.len())
            .filter(|&h| self.half_edges[h].is_border())
            .collect()
    }
}
