use cgar_kds::{
    numeric::{cgar_rational::CgarRational, scalar::Scalar},
    polynomial::{MonicSturmSequence, Polynomial, Root, RootStack, SturmRootStack},
};
use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

type Q = CgarRational;

fn q(v: i32) -> Q {
    Q::from(v)
}

fn roots_of(stack: &mut SturmRootStack<Q>) -> Vec<Root<Q>> {
    let mut out = Vec::new();
    while !stack.is_empty() {
        out.push(stack.top().clone());
        stack.pop();
    }
    out
}

#[test]
fn test_sequence_members_are_normalized() {
    let p = Polynomial::from_roots(&[q(1), q(2), q(3)]).scale(&q(-6));
    let seq = MonicSturmSequence::from_polynomial(&p);
    assert!(seq.len() >= 2);
    for member in seq.iter() {
        let lc = member.leading_coefficient().unwrap();
        assert!(*lc == q(1) || *lc == q(-1));
    }
}

#[test]
fn test_zero_first_member_keeps_second() {
    let q_poly = Polynomial::new(vec![q(2), q(4)]);
    let seq = MonicSturmSequence::new(&Polynomial::zero(), &q_poly);
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.get(0), Some(&q_poly.normalized()));
}

#[test]
fn test_count_roots_matches_random_root_sets() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let mut roots: Vec<i32> = (0..5).map(|_| rng.random_range(-20..=20)).collect();
        let p = Polynomial::from_roots(&roots.iter().map(|&r| q(r)).collect::<Vec<_>>());
        let seq = MonicSturmSequence::from_polynomial(&p.square_free_part());

        roots.sort();
        roots.dedup();
        let a = rng.random_range(-25..=0);
        let b = rng.random_range(1..=25);
        let expected = roots.iter().filter(|&&r| a < r && r <= b).count();
        assert_eq!(seq.count_roots(&q(a), &q(b)), expected);
    }
}

#[test]
fn test_count_roots_without_real_roots() {
    // t^2 + 1
    let p = Polynomial::new(vec![q(1), q(0), q(1)]);
    let seq = MonicSturmSequence::from_polynomial(&p);
    assert_eq!(seq.count_roots(&q(-100), &q(100)), 0);
}

#[test]
fn test_root_stack_reports_roots_in_increasing_order() {
    let p = Polynomial::from_roots(&[q(5), q(-3), q(1)]);
    let mut stack = SturmRootStack::new(&p, &Root::exact(q(-10)), &Root::exact(q(10)));
    assert_eq!(stack.len(), 3);

    let found = roots_of(&mut stack);
    for (root, expected) in found.iter().zip([-3.0, 1.0, 5.0]) {
        assert!((root.to_f64().unwrap() - expected).abs() < 1e-5);
        assert!(root.lower() <= &q(expected as i32) && &q(expected as i32) <= root.upper());
    }
    assert!(found.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_dyadic_midpoint_roots_are_exact() {
    // Bisecting (-8, 8) hits 0 and 4 exactly.
    let p = Polynomial::from_roots(&[q(0), q(4)]);
    let mut stack = SturmRootStack::new(&p, &Root::exact(q(-8)), &Root::exact(q(8)));
    let found = roots_of(&mut stack);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|r| r.is_exact()));
    assert_eq!(found[0].value(), Some(&q(0)));
    assert_eq!(found[1].value(), Some(&q(4)));
}

#[test]
fn test_irrational_root_is_isolated_within_tolerance() {
    // t^2 - 2
    let p = Polynomial::new(vec![q(-2), q(0), q(1)]);
    let stack = SturmRootStack::new(&p, &Root::exact(q(0)), &Root::exact(q(3)));
    assert_eq!(stack.len(), 1);

    let root = stack.top();
    assert!(!root.is_exact());
    assert!(root.width() <= Q::from_num_den(1, 1 << 20));
    assert!((stack.estimate() - 2f64.sqrt()).abs() < 1e-6);
}

#[test]
fn test_bounds_are_excluded() {
    let p = Polynomial::from_roots(&[q(0), q(2), q(5)]);
    let mut stack = SturmRootStack::new(&p, &Root::exact(q(0)), &Root::exact(q(5)));
    let found = roots_of(&mut stack);
    assert_eq!(found.len(), 1);
    assert!((found[0].to_f64().unwrap() - 2.0).abs() < 1e-5);
}

#[test]
fn test_repeated_roots_are_reported_once() {
    let p = Polynomial::from_roots(&[q(3), q(3), q(3)]);
    let stack = SturmRootStack::new(&p, &Root::exact(q(0)), &Root::exact(q(7)));
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_constant_function_has_no_roots() {
    let p = Polynomial::constant(q(3));
    let stack = SturmRootStack::new(&p, &Root::exact(q(0)), &Root::exact(q(7)));
    assert!(stack.is_empty());
    assert_eq!(stack.estimate(), f64::INFINITY);
}

#[test]
fn test_write_lists_pending_roots() {
    let p = Polynomial::from_roots(&[q(0), q(4)]);
    let mut stack = SturmRootStack::new(&p, &Root::exact(q(-8)), &Root::exact(q(8)));
    let mut out = String::new();
    stack.write(&mut out).unwrap();
    assert_eq!(out, "t^2 - 4*t: [0, 4]");

    stack.pop();
    out.clear();
    stack.write(&mut out).unwrap();
    assert_eq!(out, "t^2 - 4*t: [4]");
}
