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

use std::fmt;

use num_traits::ToPrimitive;

use crate::polynomial::{MultiplicityClassifier, RootStack, Sign};

/// Root stack that corrects the sequence reported by an underlying solver.
///
/// Two corrections are applied on top of `S`:
/// - when `f` is negative between the lower bound and the first reported
///   root, the lower bound itself is reported first as an extra root;
/// - a root classified as even multiplicity survives one `pop` before it is
///   actually removed, since the function touches zero there without
///   changing sign.
///
/// The stack is built for a single `(f, lb, ub)` traversal and consumed with
/// [`top`](RootStack::top)/[`pop`](RootStack::pop) until
/// [`is_empty`](RootStack::is_empty).
#[derive(Debug, Clone)]
pub struct DegeneracyRootStack<S: RootStack, P> {
    solver: S,
    extra_root: Option<S::Root>,
    one_even: bool,
    is_even: P,
}

impl<S, P> DegeneracyRootStack<S, P>
where
    S: RootStack,
    S::Root: Clone + PartialOrd + fmt::Display,
    P: MultiplicityClassifier<S::Root>,
{
    /// Builds the underlying solver for `f` over `[lb, ub)` and checks the
    /// lower bound for a degenerate crossing.
    ///
    /// `root_stack` builds the solver, `sign_between_roots` evaluates the sign
    /// of `f` between two roots and `is_even_multiplicity` builds the
    /// classifier for `f`.
    pub fn new<F, RS, SB, EM>(
        f: &F,
        lb: &S::Root,
        ub: &S::Root,
        root_stack: RS,
        sign_between_roots: SB,
        is_even_multiplicity: EM,
    ) -> Self
    where
        F: fmt::Display + ?Sized,
        RS: FnOnce(&F, &S::Root, &S::Root) -> S,
        SB: FnOnce(&S::Root, &S::Root, &F) -> Sign,
        EM: FnOnce(&F) -> P,
    {
        let solver = root_stack(f, lb, ub);

        #[cfg(feature = "expensive-checks")]
        if !solver.is_empty() {
            assert!(
                solver.top() > lb,
                "root stack top {} is not above the lower bound {}",
                solver.top(),
                lb
            );
        }

        let top = if solver.is_empty() { ub } else { solver.top() };
        let extra_root = if sign_between_roots(lb, top, f) == Sign::Negative {
            tracing::warn!("Degeneracy for {} between {} and {}", f, lb, top);
            Some(lb.clone())
        } else {
            None
        };

        Self {
            solver,
            extra_root,
            one_even: false,
            is_even: is_even_multiplicity(f),
        }
    }

    /// `true` while the synthetic lower-bound root is pending.
    pub fn has_extra_root(&self) -> bool {
        self.extra_root.is_some()
    }

    /// `true` when the current top is an even-multiplicity root that has
    /// already been passed over once.
    pub fn is_even_pending(&self) -> bool {
        self.one_even
    }

    pub fn root_stack(&self) -> &S {
        &self.solver
    }
}

impl<S, P> RootStack for DegeneracyRootStack<S, P>
where
    S: RootStack,
    S::Root: Clone + PartialOrd + fmt::Display + ToPrimitive,
    P: MultiplicityClassifier<S::Root>,
{
    type Root = S::Root;

    fn top(&self) -> &S::Root {
        match &self.extra_root {
            Some(extra) => extra,
            None => self.solver.top(),
        }
    }

    fn pop(&mut self) {
        if self.extra_root.take().is_some() {
            return;
        }
        if !self.one_even && self.is_even.is_even_multiplicity(self.solver.top()) {
            self.one_even = true;
        } else {
            self.solver.pop();
            self.one_even = false;
        }
    }

    fn is_empty(&self) -> bool {
        self.extra_root.is_none() && self.solver.is_empty()
    }

    fn estimate(&self) -> f64 {
        self.extra_root
            .as_ref()
            .and_then(|extra| extra.to_f64())
            .unwrap_or_else(|| self.solver.estimate())
    }

    fn write<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.solver.write(out)
    }
}
