use cgar_kds::{
    kinetic::{FunctionKernel, HandleDegeneracyFunctionKernel, PolynomialKernel},
    numeric::cgar_rational::CgarRational,
    polynomial::{
        EvenMultiplicity, MultiplicityClassifier, Polynomial, Root, RootStack, RootStackOptions,
        Sign,
    },
};
use num_traits::ToPrimitive;

type Q = CgarRational;
type Kernel = HandleDegeneracyFunctionKernel<PolynomialKernel<Q>>;

fn q(v: i32) -> Q {
    Q::from(v)
}

fn kernel() -> Kernel {
    HandleDegeneracyFunctionKernel::new(PolynomialKernel::default())
}

#[test]
fn test_increasing_roots_pass_through() {
    // (t - 2)(t - 5), positive right after 0
    let f = Polynomial::from_roots(&[q(2), q(5)]);
    let mut stack = kernel().root_stack_object(&f, &Root::exact(q(0)), &Root::exact(q(10)));
    assert!(!stack.has_extra_root());

    let mut seen = Vec::new();
    while !stack.is_empty() {
        seen.push(stack.estimate());
        stack.pop();
    }
    assert_eq!(seen.len(), 2);
    assert!((seen[0] - 2.0).abs() < 1e-5);
    assert!((seen[1] - 5.0).abs() < 1e-5);
}

#[test]
fn test_negative_start_inserts_lower_bound() {
    // (t + 2)(t - 3) is negative on (-1, 3).
    let f = Polynomial::from_roots(&[q(-2), q(3)]);
    let lb = Root::exact(q(-1));
    let mut stack = kernel().root_stack_object(&f, &lb, &Root::exact(q(10)));

    assert!(stack.has_extra_root());
    assert_eq!(stack.top(), &lb);
    assert_eq!(stack.estimate(), -1.0);

    stack.pop();
    assert!(!stack.has_extra_root());
    assert!((stack.estimate() - 3.0).abs() < 1e-5);
    assert!((stack.top().to_f64().unwrap() - 3.0).abs() < 1e-5);

    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_double_root_is_held_for_one_pop() {
    // (t - 4)^2 (6 - t): touches zero at 4, crosses at 6.
    let f = -Polynomial::from_roots(&[q(4), q(4), q(6)]);
    let mut stack = kernel().root_stack_object(&f, &Root::exact(q(0)), &Root::exact(q(10)));
    assert!(!stack.has_extra_root());

    let first = stack.top().clone();
    assert!((first.to_f64().unwrap() - 4.0).abs() < 1e-5);

    stack.pop();
    assert!(stack.is_even_pending());
    assert_eq!(stack.top(), &first);

    stack.pop();
    assert!((stack.estimate() - 6.0).abs() < 1e-5);

    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_no_roots_in_range() {
    let f = Polynomial::from_roots(&[q(20)]);
    let stack = kernel().root_stack_object(&f, &Root::exact(q(0)), &Root::exact(q(10)));
    // Negative all the way to the upper bound.
    assert!(stack.has_extra_root());

    let f = -Polynomial::from_roots(&[q(20)]);
    let stack = kernel().root_stack_object(&f, &Root::exact(q(0)), &Root::exact(q(10)));
    assert!(stack.is_empty());
}

#[test]
fn test_kernel_delegates_sign_and_multiplicity() {
    let k = kernel();
    let f = Polynomial::from_roots(&[q(1), q(1), q(3)]);

    let sign = k.sign_between_roots(&Root::exact(q(1)), &Root::exact(q(3)), &f);
    assert_eq!(sign, Sign::Negative);

    let even: EvenMultiplicity<Q> = k.is_even_multiplicity_object(&f);
    assert!(even.is_even_multiplicity(&Root::exact(q(1))));
    assert!(!even.is_even_multiplicity(&Root::exact(q(3))));
}

#[test]
fn test_kernel_options_reach_the_solver() {
    let options = RootStackOptions::new(Q::from(1));
    let k = HandleDegeneracyFunctionKernel::new(PolynomialKernel::new(options));
    // t^2 - 2 has an irrational root, isolated only to width 1.
    let f = Polynomial::new(vec![q(-2), q(0), q(1)]);
    let stack = k.root_stack_object(&f, &Root::exact(q(0)), &Root::exact(q(4)));
    let root = stack.top();
    assert!(root.width() <= q(1));
    assert!(root.lower() < &q(2) && root.upper() > &q(1));
}
