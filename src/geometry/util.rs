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
    geometry::{point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

use num_traits::ToPrimitive;

pub const EPS: f64 = 1e-10;

/// Squared area of triangle `abc` in any dimension.
///
/// Uses the Lagrange identity `|u x v|^2 = |u|^2 |v|^2 - (u . v)^2`, so the
/// result is exact for exact scalars.
pub fn squared_triangle_area<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
) -> T {
    let u = a.vector_to(b);
    let v = a.vector_to(c);
    let uv = u.dot(&v);
    let cross2 = u.norm2() * v.norm2() - uv.clone() * uv;
    cross2 / T::from(4)
}

/// Unsigned angle between `u` and `v` in radians, evaluated in `f64`.
/// Degenerate (zero-length) inputs give 0.
pub fn angle_between<T: Scalar, const N: usize>(u: &Vector<T, N>, v: &Vector<T, N>) -> f64 {
    let uu = u.norm2().to_f64().unwrap_or(0.0);
    let vv = v.norm2().to_f64().unwrap_or(0.0);
    let den = (uu * vv).sqrt();
    if den == 0.0 {
        return 0.0;
    }
    let cos = (u.dot(v).to_f64().unwrap_or(0.0) / den).clamp(-1.0, 1.0);
    cos.acos()
}

/// Angle at corner `apex` of the triangle (`apex`, `p`, `q`).
pub fn corner_angle<T: Scalar, const N: usize>(
    apex: &Point<T, N>,
    p: &Point<T, N>,
    q: &Point<T, N>,
) -> f64 {
    angle_between(&apex.vector_to(p), &apex.vector_to(q))
}
