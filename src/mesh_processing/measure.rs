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

use num_traits::ToPrimitive;

use crate::{error::MeshError, geometry::util::squared_triangle_area, impl_mesh};

impl_mesh! {
    /// Squared length of the edge carried by `he`, exact in `T`.
    pub fn squared_edge_length(&self, he: usize) -> T {
        let p0 = &self.vertices[self.source(he)].position;
        let p1 = &self.vertices[self.target(he)].position;
        p0.squared_distance(p1)
    }

    pub fn edge_length(&self, he: usize) -> f64 {
        self.squared_edge_length(he).to_f64().unwrap_or(0.0).sqrt()
    }

    /// Length of the boundary loop through the border half-edge `he`.
    pub fn border_length(&self, he: usize) -> Result<f64, MeshError> {
        if he >= self.half_edges.len() {
            return Err(MeshError::HalfEdgeOutOfRange(he));
        }
        if !self.is_border(he) {
            return Err(MeshError::NotBorder(he));
        }
        Ok(self
            .half_edges_around_face(he)
            .into_iter()
            .map(|h| self.edge_length(h))
            .sum())
    }

    /// Squared area of face `f`, exact in `T`.
    pub fn squared_face_area(&self, f: usize) -> T {
        let [a, b, c] = self.face_vertices(f);
        squared_triangle_area(
            &self.vertices[a].position,
            &self.vertices[b].position,
            &self.vertices[c].position,
        )
    }

    pub fn face_area(&self, f: usize) -> f64 {
        self.squared_face_area(f).to_f64().unwrap_or(0.0).max(0.0).sqrt()
    }

    pub fn faces_area<I>(&self, faces: I) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        faces.into_iter().map(|f| self.face_area(f)).sum()
    }

    /// Total surface area.
    pub fn area(&self) -> f64 {
        self.faces_area(0..self.faces.len())
    }
}
