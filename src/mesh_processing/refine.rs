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

use std::f64::consts::{PI, SQRT_2};

use ahash::{AHashMap, AHashSet};
use num_traits::ToPrimitive;

use crate::{error::MeshError, geometry::point::Point, geometry::util::corner_angle, impl_mesh};

/// Slack on the opposite-angle test so co-circular quads are left alone.
const DELAUNAY_SLACK: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct RefineOptions {
    /// Larger values produce denser patches.
    pub density_control_factor: f64,
    pub max_iterations: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            density_control_factor: SQRT_2,
            max_iterations: 10,
        }
    }
}

impl RefineOptions {
    pub fn new(density_control_factor: f64) -> Self {
        Self {
            density_control_factor,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RefineResult {
    /// Every face of the refined patch, input faces first.
    pub faces: Vec<usize>,
    /// Vertices inserted by the refinement.
    pub vertices: Vec<usize>,
}

impl_mesh! {
    /// Refines the patch `faces` by centroid insertion until its edge
    /// lengths match the density around it, relaxing with Delaunay flips
    /// after each pass.
    ///
    /// Faces outside the patch are never modified.
    pub fn refine(
        &mut self,
        faces: &[usize],
        options: &RefineOptions,
    ) -> Result<RefineResult, MeshError> {
        let alpha = options.density_control_factor;
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(MeshError::InvalidDensityFactor(alpha));
        }
        if let Some(&f) = faces.iter().find(|&&f| f >= self.faces.len()) {
            return Err(MeshError::FaceOutOfRange(f));
        }

        let mut patch: AHashSet<usize> = AHashSet::with_capacity(faces.len());
        let mut patch_faces = Vec::with_capacity(faces.len());
        for &f in faces {
            if patch.insert(f) {
                patch_faces.push(f);
            }
        }

        let mut scale = self.patch_scale_attributes(&patch_faces, &patch);
        let mut new_vertices = Vec::new();

        for iteration in 0..options.max_iterations {
            let mut splits = 0usize;
            for i in 0..patch_faces.len() {
                let f = patch_faces[i];
                let [a, b, c] = self.face_vertices(f);
                let corners = [a, b, c];
                let centroid = Point::centroid(&[
                    &self.vertices[a].position,
                    &self.vertices[b].position,
                    &self.vertices[c].position,
                ]);
                let sigma = corners.iter().map(|v| scale[v]).sum::<f64>() / 3.0;

                let dense_enough = corners.iter().any(|v| {
                    let d = centroid
                        .squared_distance(&self.vertices[*v].position)
                        .to_f64()
                        .unwrap_or(0.0)
                        .sqrt();
                    alpha * d <= sigma || alpha * d <= scale[v]
                });
                if dense_enough {
                    continue;
                }

                let old_edges = self.face_half_edges(f);
                let split = self.split_face(f, centroid)?;
                scale.insert(split.vertex, sigma);
                new_vertices.push(split.vertex);
                for &nf in &split.faces[1..] {
                    patch.insert(nf);
                    patch_faces.push(nf);
                }
                for h in old_edges {
                    self.relax_edge(h, &patch);
                }
                splits += 1;
            }

            let flips = if splits > 0 { self.relax_patch(&patch_faces, &patch) } else { 0 };
            tracing::debug!(
                iteration,
                splits,
                flips,
                faces = patch_faces.len(),
                "refine pass"
            );
            if splits == 0 {
                break;
            }
        }

        Ok(RefineResult {
            faces: patch_faces,
            vertices: new_vertices,
        })
    }

    /// `true` when both faces of the edge belong to the patch.
    fn is_patch_interior(&self, he: usize, patch: &AHashSet<usize>) -> bool {
        if self.is_border_edge(he) {
            return false;
        }
        let tw = self.half_edges[he].twin;
        [he, tw]
            .iter()
            .filter_map(|&h| self.half_edges[h].face)
            .all(|f| patch.contains(&f))
    }

    /// Mean length of the edges around each patch vertex that are not
    /// interior to the patch; all incident edges when every one is.
    fn patch_scale_attributes(
        &self,
        patch_faces: &[usize],
        patch: &AHashSet<usize>,
    ) -> AHashMap<usize, f64> {
        let mut scale = AHashMap::new();
        for &f in patch_faces {
            for v in self.face_vertices(f) {
                if scale.contains_key(&v) {
                    continue;
                }
                let spokes = self.outgoing_half_edges(v);
                let outer: Vec<f64> = spokes
                    .iter()
                    .filter(|&&h| !self.is_patch_interior(h, patch))
                    .map(|&h| self.edge_length(h))
                    .collect();
                let lengths = if outer.is_empty() {
                    spokes.iter().map(|&h| self.edge_length(h)).collect()
                } else {
                    outer
                };
                let mean = if lengths.is_empty() {
                    0.0
                } else {
                    lengths.iter().sum::<f64>() / lengths.len() as f64
                };
                scale.insert(v, mean);
            }
        }
        scale
    }

    /// Flips `he` when it is interior to the patch and not locally Delaunay.
    fn relax_edge(&mut self, he: usize, patch: &AHashSet<usize>) -> bool {
        if !self.is_patch_interior(he, patch) {
            return false;
        }
        let tw = self.half_edges[he].twin;
        let a = self.source(he);
        let b = self.target(he);
        let c = self.target(self.half_edges[he].next);
        let d = self.target(self.half_edges[tw].next);
        if c == d || self.edge_map.contains_key(&(c, d)) {
            return false;
        }

        let pa = &self.vertices[a].position;
        let pb = &self.vertices[b].position;
        let pc = &self.vertices[c].position;
        let pd = &self.vertices[d].position;
        let opposite = corner_angle(pc, pa, pb) + corner_angle(pd, pb, pa);
        if opposite <= PI + DELAUNAY_SLACK {
            return false;
        }
        self.flip_edge(he).is_ok()
    }

    /// Sweeps the patch-interior edges until no flip applies or the sweep
    /// budget runs out. Returns the number of flips.
    fn relax_patch(&mut self, patch_faces: &[usize], patch: &AHashSet<usize>) -> usize {
        let max_sweeps = 3 * patch_faces.len() + 1;
        let mut total = 0;
        for _ in 0..max_sweeps {
            let mut edges: Vec<usize> = Vec::new();
            for &f in patch_faces {
                for h in self.face_half_edges(f) {
                    if h < self.half_edges[h].twin && self.is_patch_interior(h, patch) {
                        edges.push(h);
                    }
                }
            }
            let flips = edges.into_iter().filter(|&h| self.relax_edge(h, patch)).count();
            total += flips;
            if flips == 0 {
                break;
            }
        }
        total
    }
}
