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

use crate::{
    error::MeshError,
    geometry::point::Point,
    impl_mesh,
    mesh::{basic_types::*, face::Face, half_edge::HalfEdge, vertex::Vertex},
};

impl_mesh! {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, position: Point<T, N>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Builds a mesh from vertex positions and CCW triangles, then closes the
    /// boundary loops.
    pub fn from_triangles(
        positions: Vec<Point<T, N>>,
        triangles: &[[usize; 3]],
    ) -> Result<Self, MeshError> {
        let mut mesh = Self::new();
        for p in positions {
            mesh.add_vertex(p);
        }
        for &[a, b, c] in triangles {
            mesh.add_triangle(a, b, c)?;
        }
        mesh.build_boundary_loops();
        Ok(mesh)
    }

    /// Adds a triangle face given three vertex indices (in CCW order).
    /// Border (outside) half-edges have `face = None`; their `next`/`prev`
    /// are only valid after [`build_boundary_loops`](Self::build_boundary_loops).
    /// Returns the index of the newly created face.
    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> Result<usize, MeshError> {
        for v in [v0, v1, v2] {
            if v >= self.vertices.len() {
                return Err(MeshError::VertexOutOfRange(v));
            }
        }
        if v0 == v1 || v1 == v2 || v2 == v0 {
            return Err(MeshError::DegenerateTriangle(v0, v1, v2));
        }

        let edge_vertices = [(v0, v1), (v1, v2), (v2, v0)];
        // Validate everything before touching the mesh.
        for &(from, to) in &edge_vertices {
            if let Some(&h) = self.edge_map.get(&(from, to)) {
                if self.half_edges[h].face.is_some() {
                    return Err(MeshError::NonManifoldEdge(from, to));
                }
            }
        }

        let face_idx = self.faces.len();
        let mut edge_indices = [usize::MAX; 3];

        for (i, &(from, to)) in edge_vertices.iter().enumerate() {
            if let Some(&he_idx) = self.edge_map.get(&(from, to)) {
                // A border half-edge left by a neighbour: claim it.
                self.half_edges[he_idx].face = Some(face_idx);
                edge_indices[i] = he_idx;
                continue;
            }

            let he_idx = self.half_edges.len();
            self.half_edges.push(HalfEdge::with_face(to, face_idx));
            self.edge_map.insert((from, to), he_idx);
            edge_indices[i] = he_idx;

            // Border twin (to -> from), temporarily a self-loop.
            let border_idx = self.half_edges.len();
            let mut bhe = HalfEdge::new(from);
            bhe.twin = he_idx;
            bhe.next = border_idx;
            bhe.prev = border_idx;
            self.half_edges.push(bhe);
            self.edge_map.insert((to, from), border_idx);
            self.half_edges[he_idx].twin = border_idx;
        }

        self.link_face(edge_indices, face_idx);
        self.faces.push(Face::new(edge_indices[0]));

        self.vertices[v0].half_edge.get_or_insert(edge_indices[0]);
        self.vertices[v1].half_edge.get_or_insert(edge_indices[1]);
        self.vertices[v2].half_edge.get_or_insert(edge_indices[2]);

        Ok(face_idx)
    }

    /// Chains every border half-edge to the next border half-edge leaving its
    /// head vertex.
    ///
    /// For each border `b = u->v` we rotate around `v` through the interior
    /// spokes, starting at `twin(b)`, until a spoke without a face shows up.
    pub fn build_boundary_loops(&mut self) {
        let m = self.half_edges.len();
        let borders: Vec<usize> = (0..m).filter(|&h| self.half_edges[h].is_border()).collect();

        let mut next_of = vec![usize::MAX; m];
        for &b in &borders {
            let mut t = self.half_edges[b].twin;
            let mut steps = 0usize;
            next_of[b] = loop {
                let cand = self.half_edges[self.half_edges[t].prev].twin;
                if self.half_edges[cand].is_border() {
                    break cand;
                }
                t = cand;
                steps += 1;
                if steps > m {
                    break b; // non-manifold vertex, leave a self-loop
                }
            };
        }

        for &b in &borders {
            let nb = next_of[b];
            self.half_edges[b].next = nb;
            self.half_edges[nb].prev = b;
        }

        #[cfg(debug_assertions)]
        for &b in &borders {
            let n = self.half_edges[b].next;
            debug_assert!(self.half_edges[n].is_border(), "b.next must be border at {}", b);
            debug_assert_eq!(self.half_edges[n].prev, b, "boundary next->prev mismatch at {}", b);
        }
    }

    /// Inserts a vertex at `p` inside face `f` and fans the triangle out into
    /// three. The caller is responsible for `p` lying inside the face.
    pub fn split_face(&mut self, f: usize, p: Point<T, N>) -> Result<SplitResult, MeshError> {
        if f >= self.faces.len() {
            return Err(MeshError::FaceOutOfRange(f));
        }

        let [he_ab, he_bc, he_ca] = self.face_cycle(f);
        let a = self.half_edges[he_ca].vertex;
        let b = self.half_edges[he_ab].vertex;
        let c = self.half_edges[he_bc].vertex;

        let w = self.add_vertex(p);
        let f1 = self.faces.len();
        let f2 = f1 + 1;

        // Spokes, created in twin pairs.
        let base = self.half_edges.len();
        let (bw, wb, cw, wc, aw, wa) = (base, base + 1, base + 2, base + 3, base + 4, base + 5);
        self.half_edges.push(HalfEdge::with_face(w, f));
        self.half_edges.push(HalfEdge::with_face(b, f1));
        self.half_edges.push(HalfEdge::with_face(w, f1));
        self.half_edges.push(HalfEdge::with_face(c, f2));
        self.half_edges.push(HalfEdge::with_face(w, f2));
        self.half_edges.push(HalfEdge::with_face(a, f));
        for (x, y) in [(bw, wb), (cw, wc), (aw, wa)] {
            self.half_edges[x].twin = y;
            self.half_edges[y].twin = x;
        }
        for (key, h) in [
            ((b, w), bw),
            ((w, b), wb),
            ((c, w), cw),
            ((w, c), wc),
            ((a, w), aw),
            ((w, a), wa),
        ] {
            self.edge_map.insert(key, h);
        }

        self.half_edges[he_bc].face = Some(f1);
        self.half_edges[he_ca].face = Some(f2);

        self.link_face([he_ab, bw, wa], f);
        self.faces[f].half_edge = he_ab;
        self.link_face([he_bc, cw, wb], f1);
        self.faces.push(Face::new(he_bc));
        self.link_face([he_ca, aw, wc], f2);
        self.faces.push(Face::new(he_ca));

        self.vertices[w].half_edge = Some(wa);

        Ok(SplitResult { vertex: w, faces: [f, f1, f2] })
    }

    /// Replaces the diagonal `a-b` of the two triangles sharing `he` with
    /// the opposite diagonal `c-d`. `he` (and its twin) keep their indices
    /// and become `d->c` (and `c->d`).
    pub fn flip_edge(&mut self, he: usize) -> Result<(), MeshError> {
        if he >= self.half_edges.len() {
            return Err(MeshError::HalfEdgeOutOfRange(he));
        }
        let tw = self.half_edges[he].twin;
        let (Some(f0), Some(f1)) = (self.half_edges[he].face, self.half_edges[tw].face) else {
            return Err(MeshError::BorderEdge(he));
        };

        // f0 = [he a->b, hn b->c, hp c->a], f1 = [tw b->a, tn a->d, tp d->b]
        let hn = self.half_edges[he].next;
        let hp = self.half_edges[he].prev;
        let tn = self.half_edges[tw].next;
        let tp = self.half_edges[tw].prev;

        let a = self.half_edges[tw].vertex;
        let b = self.half_edges[he].vertex;
        let c = self.half_edges[hn].vertex;
        let d = self.half_edges[tn].vertex;

        if c == d || self.edge_map.contains_key(&(c, d)) {
            return Err(MeshError::DuplicateEdge(he));
        }

        self.half_edges[he].vertex = c;
        self.half_edges[tw].vertex = d;
        self.half_edges[tn].face = Some(f0);
        self.half_edges[hn].face = Some(f1);

        // f0 = (a, d, c), f1 = (b, c, d)
        self.link_face([tn, he, hp], f0);
        self.link_face([hn, tw, tp], f1);
        self.faces[f0].half_edge = he;
        self.faces[f1].half_edge = tw;

        if self.vertices[a].half_edge == Some(he) {
            self.vertices[a].half_edge = Some(tn);
        }
        if self.vertices[b].half_edge == Some(tw) {
            self.vertices[b].half_edge = Some(hn);
        }

        self.edge_map.remove(&(a, b));
        self.edge_map.remove(&(b, a));
        self.edge_map.insert((d, c), he);
        self.edge_map.insert((c, d), tw);

        Ok(())
    }

    /// The three half-edges of face `f` starting at its representative.
    pub(crate) fn face_cycle(&self, f: usize) -> [usize; 3] {
        let h0 = self.faces[f].half_edge;
        let h1 = self.half_edges[h0].next;
        let h2 = self.half_edges[h1].next;
        [h0, h1, h2]
    }

    fn link_face(&mut self, cycle: [usize; 3], face: usize) {
        for i in 0..3 {
            let h = cycle[i];
            self.half_edges[h].next = cycle[(i + 1) % 3];
            self.half_edges[h].prev = cycle[(i + 2) % 3];
            self.half_edges[h].face = Some(face);
        }
    }
}
