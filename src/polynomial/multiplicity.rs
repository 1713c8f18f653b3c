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
    polynomial::{polynomial::Polynomial, root::Root},
};

/// Decides whether a root of some fixed function has even multiplicity,
/// i.e. whether the function keeps its sign across it.
pub trait MultiplicityClassifier<R> {
    fn is_even_multiplicity(&self, root: &R) -> bool;
}

impl<R, F> MultiplicityClassifier<R> for F
where
    F: Fn(&R) -> bool,
{
    fn is_even_multiplicity(&self, root: &R) -> bool {
        self(root)
    }
}

/// Multiplicity parity of roots of a polynomial.
///
/// Exact roots are classified by counting vanishing derivatives. For an
/// isolating interval the sign at both ends decides: a root the function
/// does not cross leaves the same sign on either side.
#[derive(Debug, Clone)]
pub struct EvenMultiplicity<T: Scalar> {
    function: Polynomial<T>,
}

impl<T: Scalar> EvenMultiplicity<T> {
    pub fn new(function: Polynomial<T>) -> Self {
        Self { function }
    }

    pub fn function(&self) -> &Polynomial<T> {
        &self.function
    }
}

impl<T: Scalar> MultiplicityClassifier<Root<T>> for EvenMultiplicity<T> {
    fn is_even_multiplicity(&self, root: &Root<T>) -> bool {
        match root.value() {
            Some(v) => {
                let m = self.function.multiplicity_at(v);
                m > 0 && m % 2 == 0
            }
            None => {
                let lo = self.function.sign_at(root.lower());
                let hi = self.function.sign_at(root.upper());
                !lo.is_zero() && lo == hi
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::cgar_rational::CgarRational;

    fn r(v: i32) -> CgarRational {
        CgarRational::from(v)
    }

    #[test]
    fn exact_roots_by_derivative_count() {
        // (t - 1)^2 (t - 2)
        let f = Polynomial::from_roots(&[r(1), r(1), r(2)]);
        let even = EvenMultiplicity::new(f);
        assert!(even.is_even_multiplicity(&Root::exact(r(1))));
        assert!(!even.is_even_multiplicity(&Root::exact(r(2))));
        assert!(!even.is_even_multiplicity(&Root::exact(r(5))));
    }

    #[test]
    fn isolated_roots_by_end_signs() {
        let f = Polynomial::from_roots(&[r(1), r(1), r(4)]);
        let even = EvenMultiplicity::new(f);
        assert!(even.is_even_multiplicity(&Root::isolated(r(0), r(2))));
        assert!(!even.is_even_multiplicity(&Root::isolated(r(3), r(5))));
    }

    #[test]
    fn closures_are_classifiers() {
        let always = |_: &f64| true;
        assert!(always.is_even_multiplicity(&0.5));
    }
}
