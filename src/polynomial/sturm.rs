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
    numeric::scalar::Scalar,
    polynomial::{polynomial::Polynomial, sign::Sign},
};

/// Sturm sequence whose members are normalized by the absolute value of
/// their leading coefficient.
///
/// Normalizing keeps coefficient growth in check for exact scalars without
/// changing any sign the sequence is evaluated for.
#[derive(Debug, Clone)]
pub struct MonicSturmSequence<T: Scalar> {
    seq: Vec<Polynomial<T>>,
}

impl<T: Scalar> MonicSturmSequence<T> {
    /// Sequence starting with `p, q`. The classic Sturm sequence of `p` is
    /// obtained with `q = p'`, see [`MonicSturmSequence::from_polynomial`].
    pub fn new(p: &Polynomial<T>, q: &Polynomial<T>) -> Self {
        let mut seq = Vec::new();

        if !p.is_zero() {
            seq.push(p.normalized());
        }
        if q.is_zero() {
            return Self { seq };
        }
        seq.push(q.normalized());
        if p.is_zero() {
            // No `-p` member and no remainders for a zero first member.
            return Self { seq };
        }

        if p.degree() < q.degree() {
            let r = -&seq[0];
            seq.push(r);
        }

        loop {
            let n = seq.len();
            let r = -seq[n - 2].rem(&seq[n - 1]);
            if r.is_zero() {
                break;
            }
            seq.push(r.normalized());
        }

        Self { seq }
    }

    pub fn from_polynomial(p: &Polynomial<T>) -> Self {
        Self::new(p, &p.derivative())
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Polynomial<T>> {
        self.seq.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polynomial<T>> {
        self.seq.iter()
    }

    /// Number of sign changes of the sequence at `t`, zeros skipped.
    pub fn sign_variations(&self, t: &T) -> usize {
        let mut count = 0;
        let mut last = Sign::Zero;
        for p in &self.seq {
            let s = p.sign_at(t);
            if s.is_zero() {
                continue;
            }
            if !last.is_zero() && s != last {
                count += 1;
            }
            last = s;
        }
        count
    }

    /// Number of distinct real roots of the first member in `(a, b]`.
    pub fn count_roots(&self, a: &T, b: &T) -> usize {
        self.sign_variations(a)
            .saturating_sub(self.sign_variations(b))
    }
}
