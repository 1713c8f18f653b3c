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

use crate::{
    kinetic::degeneracy::DegeneracyRootStack,
    polynomial::{MultiplicityClassifier, RootStack, Sign},
};

/// Capabilities a kinetic kernel supplies for one family of functions.
pub trait FunctionKernel {
    type Function: fmt::Display;
    type Root: Clone + PartialOrd + fmt::Display + ToPrimitive;
    type RootStack: RootStack<Root = Self::Root>;
    type IsEvenMultiplicity: MultiplicityClassifier<Self::Root>;

    /// Roots of `f` in `[lb, ub)`, smallest first.
    fn root_stack_object(
        &self,
        f: &Self::Function,
        lb: &Self::Root,
        ub: &Self::Root,
    ) -> Self::RootStack;

    /// Sign of `f` between the consecutive roots `lb` and `ub`.
    fn sign_between_roots(&self, lb: &Self::Root, ub: &Self::Root, f: &Self::Function) -> Sign;

    fn is_even_multiplicity_object(&self, f: &Self::Function) -> Self::IsEvenMultiplicity;
}

/// Kernel adapter whose root stacks are [`DegeneracyRootStack`]s over the
/// wrapped kernel's stacks.
#[derive(Debug, Clone, Default)]
pub struct HandleDegeneracyFunctionKernel<K> {
    inner: K,
}

impl<K: FunctionKernel> HandleDegeneracyFunctionKernel<K> {
    pub fn new(inner: K) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }
}

impl<K: FunctionKernel> FunctionKernel for HandleDegeneracyFunctionKernel<K> {
    type Function = K::Function;
    type Root = K::Root;
    type RootStack = DegeneracyRootStack<K::RootStack, K::IsEvenMultiplicity>;
    type IsEvenMultiplicity = K::IsEvenMultiplicity;

    fn root_stack_object(
        &self,
        f: &Self::Function,
        lb: &Self::Root,
        ub: &Self::Root,
    ) -> Self::RootStack {
        let inner = &self.inner;
        DegeneracyRootStack::new(
            f,
            lb,
            ub,
            |f: &K::Function, lb: &K::Root, ub: &K::Root| inner.root_stack_object(f, lb, ub),
            |lb: &K::Root, ub: &K::Root, f: &K::Function| inner.sign_between_roots(lb, ub, f),
            |f: &K::Function| inner.is_even_multiplicity_object(f),
        )
    }

    fn sign_between_roots(&self, lb: &Self::Root, ub: &Self::Root, f: &Self::Function) -> Sign {
        self.inner.sign_between_roots(lb, ub, f)
    }

    fn is_even_multiplicity_object(&self, f: &Self::Function) -> Self::IsEvenMultiplicity {
        self.inner.is_even_multiplicity_object(f)
    }
}
