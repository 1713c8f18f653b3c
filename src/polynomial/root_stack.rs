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

use std::{cmp::Ordering, fmt};

use num_traits::ToPrimitive;

use crate::{
    numeric::scalar::Scalar,
    polynomial::{polynomial::Polynomial, root::Root, sign::Sign, sturm::MonicSturmSequence},
};

/// An ordered, consumable sequence of roots of one function over an
/// interval: the smallest pending root is on top.
pub trait RootStack {
    type Root;

    /// The smallest pending root.
    ///
    /// # Panics
    /// Implementations may panic when the stack is empty.
    fn top(&self) -> &Self::Root;

    /// Drops the top root. Calling it on an empty stack is a contract
    /// violation.
    fn pop(&mut self);

    fn is_empty(&self) -> bool;

    /// Floating point approximation of the top root.
    fn estimate(&self) -> f64;

    /// Diagnostic dump of the pending state.
    fn write<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;
}

#[derive(Debug, Clone)]
pub struct RootStackOptions<T: Scalar> {
    /// Isolating intervals are refined until they are at most this wide.
    pub tolerance: T,
    /// Cap on bisection steps per interval.
    pub max_refinements: usize,
}

impl<T: Scalar> Default for RootStackOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from_num_den(1, 1 << 20),
            max_refinements: 200,
        }
    }
}

impl<T: Scalar> RootStackOptions<T> {
    pub fn new(tolerance: T) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

/// Root stack over the real roots of a polynomial lying strictly between
/// two bounds, isolated with a Sturm sequence of the square-free part.
///
/// Each distinct root is reported once regardless of its multiplicity.
#[derive(Debug, Clone)]
pub struct SturmRootStack<T: Scalar> {
    function: Polynomial<T>,
    square_free: Polynomial<T>,
    sturm: MonicSturmSequence<T>,
    // Sorted descending so the smallest root sits at the end.
    roots: Vec<Root<T>>,
    options: RootStackOptions<T>,
}

impl<T: Scalar> SturmRootStack<T> {
    pub fn new(f: &Polynomial<T>, lb: &Root<T>, ub: &Root<T>) -> Self {
        Self::with_options(f, lb, ub, RootStackOptions::default())
    }

    pub fn with_options(
        f: &Polynomial<T>,
        lb: &Root<T>,
        ub: &Root<T>,
        options: RootStackOptions<T>,
    ) -> Self {
        let square_free = f.square_free_part();
        let sturm = MonicSturmSequence::from_polynomial(&square_free);
        let mut stack = Self {
            function: f.clone(),
            square_free,
            sturm,
            roots: Vec::new(),
            options,
        };

        let lo = lb.lower().clone();
        let hi = ub.upper().clone();
        if !stack.function.is_constant() && lo < hi {
            let mut found = stack.isolate(lo, hi);
            found.retain(|r| r > lb && r < ub);
            found.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
            stack.roots = found;
        }

        tracing::trace!(
            function = %stack.function,
            roots = stack.roots.len(),
            "isolated roots"
        );
        stack
    }

    pub fn function(&self) -> &Polynomial<T> {
        &self.function
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Distinct roots in the open interval `(a, b)`.
    fn count_open(&self, a: &T, b: &T) -> usize {
        let closed = self.sturm.count_roots(a, b);
        let at_b = usize::from(self.square_free.sign_at(b).is_zero());
        closed.saturating_sub(at_b)
    }

    fn isolate(&self, lo: T, hi: T) -> Vec<Root<T>> {
        let mut found = Vec::new();
        let n = self.count_open(&lo, &hi);
        let mut pending = vec![(lo, hi, n, 0usize)];

        while let Some((a, b, n, depth)) = pending.pop() {
            match n {
                0 => {}
                1 => found.push(self.refine(a, b)),
                _ => {
                    let m = T::midpoint(&a, &b);
                    if depth >= self.options.max_refinements || !(a < m && m < b) {
                        // Cluster below the resolution of the scalar type.
                        for _ in 0..n {
                            found.push(Root::isolated(a.clone(), b.clone()));
                        }
                        continue;
                    }
                    let left = self.count_open(&a, &m);
                    let on_mid = self.square_free.sign_at(&m).is_zero();
                    if on_mid {
                        found.push(Root::exact(m.clone()));
                    }
                    let right = n.saturating_sub(left + usize::from(on_mid));
                    pending.push((m.clone(), b, right, depth + 1));
                    pending.push((a, m, left, depth + 1));
                }
            }
        }
        found
    }

    /// Shrinks `(a, b)`, known to hold exactly one distinct root, until it is
    /// narrow enough and neither end is a root.
    fn refine(&self, mut a: T, mut b: T) -> Root<T> {
        let g = &self.square_free;
        let mut steps = 0;
        loop {
            let sa = g.sign_at(&a);
            let ends_clear = !sa.is_zero() && !g.sign_at(&b).is_zero();
            if ends_clear && b.clone() - a.clone() <= self.options.tolerance {
                break;
            }
            if steps >= self.options.max_refinements {
                break;
            }

            let m = T::midpoint(&a, &b);
            if !(a < m && m < b) {
                break;
            }
            let sm = g.sign_at(&m);
            if sm.is_zero() {
                return Root::exact(m);
            }

            let in_left = if sa.is_zero() {
                self.count_open(&a, &m) == 1
            } else {
                sa != sm
            };
            if in_left {
                b = m;
            } else {
                a = m;
            }
            steps += 1;
        }
        Root::isolated(a, b)
    }
}

impl<T: Scalar> RootStack for SturmRootStack<T> {
    type Root = Root<T>;

    fn top(&self) -> &Root<T> {
        match self.roots.last() {
            Some(r) => r,
            None => panic!("top() called on an empty root stack"),
        }
    }

    fn pop(&mut self) {
        debug_assert!(!self.roots.is_empty(), "pop() called on an empty root stack");
        self.roots.pop();
    }

    fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    fn estimate(&self) -> f64 {
        self.roots
            .last()
            .and_then(|r| r.to_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn write<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}: [", self.function)?;
        for (i, r) in self.roots.iter().rev().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            write!(out, "{}", r)?;
        }
        out.write_str("]")
    }
}

/// Sign of `f` between two consecutive roots `lb < ub`.
///
/// Evaluates at a point strictly between the two isolating intervals when
/// there is room; otherwise falls back to the sign of `f` just after `lb`.
pub fn sign_between_roots<T: Scalar>(f: &Polynomial<T>, lb: &Root<T>, ub: &Root<T>) -> Sign {
    let a = lb.upper();
    let b = ub.lower();
    if a < b {
        let s = f.sign_at(&T::midpoint(a, b));
        if !s.is_zero() {
            return s;
        }
    }
    match lb.value() {
        Some(v) => f.sign_after(v),
        None => f.sign_at(lb.upper()),
    }
}
