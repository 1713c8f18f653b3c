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

use crate::numeric::scalar::Scalar;

/// A real root known either exactly or through an isolating interval.
///
/// Disjoint roots order by position; roots whose intervals overlap order by
/// midpoint, so two exact roots compare as their values do.
#[derive(Debug, Clone)]
pub struct Root<T: Scalar> {
    lower: T,
    upper: T,
}

impl<T: Scalar> Root<T> {
    pub fn exact(value: T) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    /// # Panics
    /// Panics if `lower > upper`.
    pub fn isolated(lower: T, upper: T) -> Self {
        assert!(lower <= upper, "isolating interval is reversed");
        Self { lower, upper }
    }

    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }

    pub fn lower(&self) -> &T {
        &self.lower
    }

    pub fn upper(&self) -> &T {
        &self.upper
    }

    pub fn value(&self) -> Option<&T> {
        self.is_exact().then_some(&self.lower)
    }

    pub fn midpoint(&self) -> T {
        if self.is_exact() {
            return self.lower.clone();
        }
        T::midpoint(&self.lower, &self.upper)
    }

    pub fn width(&self) -> T {
        self.upper.clone() - self.lower.clone()
    }
}

impl<T: Scalar> From<T> for Root<T> {
    fn from(value: T) -> Self {
        Root::exact(value)
    }
}

impl<T: Scalar> PartialEq for Root<T> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<T: Scalar> PartialOrd for Root<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.upper < other.lower {
            return Some(Ordering::Less);
        }
        if self.lower > other.upper {
            return Some(Ordering::Greater);
        }
        self.midpoint().partial_cmp(&other.midpoint())
    }
}

impl<T: Scalar> fmt::Display for Root<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write!(f, "{}", self.lower)
        } else {
            write!(f, "({}, {})", self.lower, self.upper)
        }
    }
}

/// Conversions go through the midpoint.
impl<T: Scalar> ToPrimitive for Root<T> {
    fn to_i64(&self) -> Option<i64> {
        self.midpoint().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.midpoint().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        self.midpoint().to_f64()
    }
}
