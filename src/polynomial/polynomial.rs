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

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
    polynomial::sign::Sign,
};

/// Dense univariate polynomial in `t`, lowest degree first.
///
/// Trailing zero coefficients are always trimmed, so the zero polynomial has
/// no coefficients and no degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Scalar> {
    coeffs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// `(t - r0)(t - r1)...`, repeated entries give repeated roots.
    pub fn from_roots(roots: &[T]) -> Self {
        let mut p = Self::constant(T::one());
        for r in roots {
            let factor = Self::new(vec![-r.clone(), T::one()]);
            p = &p * &factor;
        }
        p
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn coefficient(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    pub fn leading_coefficient(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Horner evaluation.
    pub fn eval(&self, t: &T) -> T {
        let mut acc = T::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * t.clone();
            acc += c;
        }
        acc
    }

    pub fn sign_at(&self, t: &T) -> Sign {
        Sign::of(&self.eval(t))
    }

    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.clone() * T::from(i as i32))
            .collect();
        Self::new(coeffs)
    }

    pub fn scale(&self, s: &T) -> Self {
        Self::new(self.coeffs.iter().map(|c| c.clone() * s.clone()).collect())
    }

    /// Divides by the absolute value of the leading coefficient, keeping the
    /// sign of the polynomial at +infinity.
    pub fn normalized(&self) -> Self {
        match self.leading_coefficient() {
            Some(lc) => {
                let lc = lc.abs();
                Self::new(self.coeffs.iter().map(|c| c.clone() / lc.clone()).collect())
            }
            None => Self::zero(),
        }
    }

    fn monic(&self) -> Self {
        match self.leading_coefficient() {
            Some(lc) => {
                let lc = lc.clone();
                Self::new(self.coeffs.iter().map(|c| c.clone() / lc.clone()).collect())
            }
            None => Self::zero(),
        }
    }

    /// Euclidean division: `self = q * divisor + r` with `deg r < deg divisor`.
    ///
    /// # Panics
    /// Panics if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let (dd, lc) = match (divisor.degree(), divisor.leading_coefficient()) {
            (Some(d), Some(lc)) => (d, lc.clone()),
            _ => panic!("polynomial division by zero"),
        };
        let n = match self.degree() {
            Some(n) if n >= dd => n,
            _ => return (Self::zero(), self.clone()),
        };

        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); n - dd + 1];
        for i in (0..=n - dd).rev() {
            let coef = rem[i + dd].clone() / lc.clone();
            for j in 0..=dd {
                rem[i + j] -= &(coef.clone() * divisor.coeffs[j].clone());
            }
            quot[i] = coef;
        }
        rem.truncate(dd);
        (Self::new(quot), Self::new(rem))
    }

    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Monic greatest common divisor; `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.monic();
        let mut b = other.monic();
        while !b.is_zero() {
            let r = a.rem(&b).monic();
            a = b;
            b = r;
        }
        a
    }

    /// The polynomial with the same distinct roots and all multiplicities one.
    pub fn square_free_part(&self) -> Self {
        if self.is_constant() {
            return self.clone();
        }
        let g = self.gcd(&self.derivative());
        if g.is_constant() {
            return self.clone();
        }
        self.div_rem(&g).0
    }

    /// Order of the root at `t`: 0 when `t` is not a root (or for the zero
    /// polynomial).
    pub fn multiplicity_at(&self, t: &T) -> usize {
        if self.is_zero() {
            return 0;
        }
        let mut m = 0;
        let mut d = self.clone();
        while !d.is_zero() && d.eval(t).is_zero() {
            m += 1;
            d = d.derivative();
        }
        m
    }

    /// Sign of the polynomial on `(t, t + eps)` for small `eps`.
    pub fn sign_after(&self, t: &T) -> Sign {
        let mut d = self.clone();
        while !d.is_zero() {
            let s = d.sign_at(t);
            if !s.is_zero() {
                return s;
            }
            d = d.derivative();
        }
        Sign::Zero
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &'b Polynomial<T>) -> Polynomial<T> {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.coefficient(i) + rhs.coefficient(i))
            .collect();
        Polynomial::new(coeffs)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &'b Polynomial<T>) -> Polynomial<T> {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.coefficient(i) - rhs.coefficient(i))
            .collect();
        Polynomial::new(coeffs)
    }
}

impl<'a, 'b, T: Scalar> Mul<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &'b Polynomial<T>) -> Polynomial<T> {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += &(a.clone() * b.clone());
            }
        }
        Polynomial::new(coeffs)
    }
}

impl<'a, T: Scalar> Neg for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }
}

impl<T: Scalar> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

/// Prints from the highest degree down, e.g. `t^2 - 3*t + 2`.
impl<T: Scalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let negative = c.is_negative();
            match (first, negative) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;

            let magnitude = c.abs();
            let unit = magnitude == T::one();
            match i {
                0 => write!(f, "{}", magnitude)?,
                _ if !unit => write!(f, "{}*", magnitude)?,
                _ => {}
            }
            match i {
                0 => {}
                1 => f.write_str("t")?,
                _ => write!(f, "t^{}", i)?,
            }
        }
        Ok(())
    }
}
