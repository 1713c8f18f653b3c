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

/// Recoverable failures of mesh construction and editing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("vertex {0} is out of range")]
    VertexOutOfRange(usize),
    #[error("face {0} is out of range")]
    FaceOutOfRange(usize),
    #[error("half-edge {0} is out of range")]
    HalfEdgeOutOfRange(usize),
    #[error("triangle ({0}, {1}, {2}) repeats a vertex")]
    DegenerateTriangle(usize, usize, usize),
    #[error("edge ({0}, {1}) already bounds a face on that side")]
    NonManifoldEdge(usize, usize),
    #[error("half-edge {0} is not a border half-edge")]
    NotBorder(usize),
    #[error("half-edge {0} lies on the border and cannot be flipped")]
    BorderEdge(usize),
    #[error("flipping half-edge {0} would duplicate an existing edge")]
    DuplicateEdge(usize),
    #[error("density control factor {0} must be finite and positive")]
    InvalidDensityFactor(f64),
}
