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
    kinetic::function_kernel::FunctionKernel,
    numeric::scalar::Scalar,
    polynomial::{
        EvenMultiplicity, Polynomial, Root, RootStackOptions, Sign, SturmRootStack,
        sign_between_roots,
    },
};

/// Kernel over univariate polynomials in `T`, solved with Sturm sequences.
#[derive(Debug, Clone)]
pub struct PolynomialKernel<T: Scalar> {
    options: RootStackOptions<T>,
}

impl<T: Scalar> Default for PolynomialKernel<T> {
    fn default() -> Self {
        Self {
            options: RootStackOptions::default(),
        }
    }
}

impl<T: Scalar> PolynomialKernel<T> {
    pub fn new(options: RootStackOptions<T>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RootStackOptions<T> {
        &self.options
    }
}

impl<T: Scalar> FunctionKernel for PolynomialKernel<T> {
    type Function = Polynomial<T>;
    type Root = Root<T>;
    type RootStack = SturmRootStack<T>;
    type IsEvenMultiplicity = EvenMultiplicity<T>;

    fn root_stack_object(
        &self,
        f: &Polynomial<T>,
        lb: &Root<T>,
        ub: &Root<T>,
    ) -> SturmRootStack<T> {
        SturmRootStack::with_options(f, lb, ub, self.options.clone())
    }

    fn sign_between_roots(&self, lb: &Root<T>, ub: &Root<T>, f: &Polynomial<T>) -> Sign {
        sign_between_roots(f, lb, ub)
    }

    fn is_even_multiplicity_object(&self, f: &Polynomial<T>) -> EvenMultiplicity<T> {
        EvenMultiplicity::new(f.clone())
    }
}
