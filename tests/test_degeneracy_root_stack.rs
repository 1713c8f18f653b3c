use std::fmt;

use cgar_kds::{
    kinetic::DegeneracyRootStack,
    polynomial::{RootStack, Sign},
};

/// Root stack replaying a fixed, increasing list of roots.
#[derive(Debug, Clone)]
struct ScriptedRootStack {
    roots: Vec<f64>,
    cursor: usize,
}

impl ScriptedRootStack {
    fn new(roots: &[f64]) -> Self {
        Self {
            roots: roots.to_vec(),
            cursor: 0,
        }
    }
}

impl RootStack for ScriptedRootStack {
    type Root = f64;

    fn top(&self) -> &f64 {
        &self.roots[self.cursor]
    }

    fn pop(&mut self) {
        self.cursor += 1;
    }

    fn is_empty(&self) -> bool {
        self.cursor >= self.roots.len()
    }

    fn estimate(&self) -> f64 {
        self.roots.get(self.cursor).copied().unwrap_or(f64::INFINITY)
    }

    fn write<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{:?}", &self.roots[self.cursor..])
    }
}

fn build(
    roots: &[f64],
    lb: f64,
    ub: f64,
    sign: Sign,
    evens: &[f64],
) -> DegeneracyRootStack<ScriptedRootStack, impl Fn(&f64) -> bool> {
    let evens = evens.to_vec();
    DegeneracyRootStack::new(
        "f",
        &lb,
        &ub,
        |_: &str, _: &f64, _: &f64| ScriptedRootStack::new(roots),
        move |_: &f64, _: &f64, _: &str| sign,
        move |_: &str| move |r: &f64| evens.contains(r),
    )
}

/// Reads `top` before every `pop` until the stack runs dry.
fn drain<S: RootStack<Root = f64>>(stack: &mut S) -> (Vec<f64>, usize) {
    let mut seen = Vec::new();
    let mut pops = 0;
    while !stack.is_empty() {
        seen.push(*stack.top());
        stack.pop();
        pops += 1;
        assert!(pops < 100, "root stack never empties");
    }
    (seen, pops)
}

fn dump<S: RootStack>(stack: &S) -> String {
    let mut out = String::new();
    stack.write(&mut out).unwrap();
    out
}

#[test]
fn test_plain_sequence_is_forwarded() {
    let mut stack = build(&[2.0, 5.0], 0.0, 10.0, Sign::Positive, &[]);
    assert!(!stack.has_extra_root());

    let (seen, pops) = drain(&mut stack);
    assert_eq!(seen, vec![2.0, 5.0]);
    assert_eq!(pops, 2);
}

#[test]
fn test_degeneracy_reports_lower_bound_first() {
    let mut stack = build(&[3.0], -1.0, 10.0, Sign::Negative, &[]);
    assert!(stack.has_extra_root());
    assert_eq!(*stack.top(), -1.0);

    stack.pop();
    assert!(!stack.has_extra_root());
    assert_eq!(stack.root_stack().cursor, 0, "extra root pop must not touch the solver");
    assert_eq!(*stack.top(), 3.0);

    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_pop_count_includes_extra_root() {
    let mut stack = build(&[1.0, 2.0, 4.0], 0.0, 5.0, Sign::Negative, &[]);
    let (seen, pops) = drain(&mut stack);
    assert_eq!(seen, vec![0.0, 1.0, 2.0, 4.0]);
    assert_eq!(pops, 4);
}

#[test]
fn test_zero_sign_is_not_a_degeneracy() {
    let stack = build(&[3.0], 0.0, 10.0, Sign::Zero, &[]);
    assert!(!stack.has_extra_root());
}

#[test]
fn test_even_root_survives_one_pop() {
    let mut stack = build(&[4.0, 7.0], 0.0, 10.0, Sign::Positive, &[4.0]);
    assert_eq!(*stack.top(), 4.0);

    stack.pop();
    assert!(stack.is_even_pending());
    assert_eq!(*stack.top(), 4.0);

    stack.pop();
    assert!(!stack.is_even_pending());
    assert_eq!(*stack.top(), 7.0);

    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_even_root_as_last_root() {
    let mut stack = build(&[4.0], 0.0, 10.0, Sign::Positive, &[4.0]);
    let (seen, pops) = drain(&mut stack);
    assert_eq!(seen, vec![4.0, 4.0]);
    assert_eq!(pops, 2);
}

#[test]
fn test_consecutive_even_roots_are_suppressed_one_at_a_time() {
    let mut stack = build(&[1.0, 2.0], 0.0, 10.0, Sign::Positive, &[1.0, 2.0]);

    stack.pop();
    assert_eq!(*stack.top(), 1.0);
    stack.pop();
    // The real pop resets the flag, so the next even root gets its own pass.
    assert!(!stack.is_even_pending());
    assert_eq!(*stack.top(), 2.0);
    stack.pop();
    assert_eq!(*stack.top(), 2.0);
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_extra_root_is_never_classified() {
    // The lower bound is listed as even; it must still go away in one pop.
    let mut stack = build(&[3.0], 0.0, 10.0, Sign::Negative, &[0.0]);
    let (seen, pops) = drain(&mut stack);
    assert_eq!(seen, vec![0.0, 3.0]);
    assert_eq!(pops, 2);
}

#[test]
fn test_write_ignores_bookkeeping() {
    let plain = build(&[3.0, 6.0], 0.0, 10.0, Sign::Positive, &[]);
    let degenerate = build(&[3.0, 6.0], 0.0, 10.0, Sign::Negative, &[]);
    assert_eq!(dump(&plain), dump(&degenerate));
    assert_eq!(dump(&plain), dump(plain.root_stack()));

    let mut even = build(&[3.0, 6.0], 0.0, 10.0, Sign::Positive, &[3.0]);
    let before = dump(&even);
    even.pop();
    assert!(even.is_even_pending());
    assert_eq!(dump(&even), before);
}

#[test]
fn test_estimate_follows_top() {
    let mut stack = build(&[3.0], -1.0, 10.0, Sign::Negative, &[]);
    assert_eq!(stack.estimate(), -1.0);
    stack.pop();
    assert_eq!(stack.estimate(), 3.0);
}

#[test]
fn test_empty_solver_checks_against_upper_bound() {
    let mut stack: DegeneracyRootStack<ScriptedRootStack, _> = DegeneracyRootStack::new(
        "f",
        &-2.0,
        &8.0,
        |_: &str, _: &f64, _: &f64| ScriptedRootStack::new(&[]),
        |lb: &f64, top: &f64, _: &str| {
            assert_eq!((*lb, *top), (-2.0, 8.0));
            Sign::Negative
        },
        |_: &str| |_: &f64| false,
    );
    assert!(!stack.is_empty());
    assert_eq!(*stack.top(), -2.0);
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_empty_solver_without_degeneracy_is_empty() {
    let stack = build(&[], 0.0, 1.0, Sign::Positive, &[]);
    assert!(stack.is_empty());
    assert_eq!(stack.estimate(), f64::INFINITY);
}

#[cfg(feature = "expensive-checks")]
#[test]
#[should_panic(expected = "is not above the lower bound")]
fn test_root_at_lower_bound_panics_with_expensive_checks() {
    let _ = build(&[0.0, 3.0], 0.0, 10.0, Sign::Positive, &[]);
}

#[cfg(feature = "expensive-checks")]
#[test]
#[should_panic(expected = "is not above the lower bound")]
fn test_root_below_lower_bound_panics_with_expensive_checks() {
    let _ = build(&[-1.0], 0.0, 10.0, Sign::Negative, &[]);
}

#[cfg(not(feature = "expensive-checks"))]
#[test]
fn test_root_at_lower_bound_is_forwarded_without_expensive_checks() {
    let mut stack = build(&[0.0, 3.0], 0.0, 10.0, Sign::Positive, &[]);
    assert!(!stack.has_extra_root());

    let (seen, pops) = drain(&mut stack);
    assert_eq!(seen, vec![0.0, 3.0]);
    assert_eq!(pops, 2);
}
