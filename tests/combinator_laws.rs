//! Property-based tests for the combinator laws.
//!
//! This module verifies that the combinators satisfy the required laws:
//!
//! ## Composition Laws
//! - **Definition**: `compose(f, g)(x) == g(f(x))` (left-to-right order)
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! ## Pipe Laws
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose(f, g)(x)`
//!
//! ## Flip Laws
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//!
//! ## Curry Laws
//! - **Equivalence**: `curry(f, a)(b) == f(a, b)`
//!
//! ## Partial Laws
//! - **Fill Equivalence**: filling every hole left-to-right invokes the
//!   operation on the fully assembled argument list
//! - **Invocation Independence**: repeated calls are independent of order
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use pointfree::combinator::{Slot, compose, constant, curry, flip, identity, partial};
use pointfree::pipe;
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Definition: compose(f, g)(x) == g(f(x))
    #[test]
    fn prop_compose_definition(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(n);

        let composed = compose(f, g);

        prop_assert_eq!(composed(x), g(f(x)));
    }

    /// Left Identity Law: compose(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose(identity, function);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose(function, identity);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law: compose(compose(f, g), h) == compose(f, compose(g, h))
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);
        let h = |n: i32| n.wrapping_sub(3);

        let left = compose(compose(f, g), h);
        let right = compose(f, compose(g, h));

        prop_assert_eq!(left(x), right(x));
    }

    /// Constant absorbs composition on the right:
    /// compose(f, constant(c))(x) == c
    #[test]
    fn prop_compose_constant_absorption(x in any::<i32>(), c in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let composed = compose(function, constant(c));

        prop_assert_eq!(composed(x), c);
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Consistency: pipe!(x, f, g) == compose(f, g)(x)
    #[test]
    fn prop_pipe_consistent_with_compose(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(10);
        let g = |n: i32| n.wrapping_mul(2);

        let composed = compose(f, g);

        prop_assert_eq!(pipe!(x, f, g), composed(x));
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip Definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);

        let flipped = flip(subtract);

        prop_assert_eq!(flipped(a, b), subtract(b, a));
    }

    /// Double Flip Identity: flip(flip(f))(a, b) == f(a, b)
    #[test]
    fn prop_flip_double_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);

        let flipped_twice = flip(flip(subtract));

        prop_assert_eq!(flipped_twice(a, b), subtract(a, b));
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Equivalence: curry(f, a)(b) == f(a, b)
    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>()) {
        let multiply = |x: i32, y: i32| x.wrapping_mul(y);

        let fixed = curry(multiply, a);

        prop_assert_eq!(fixed(b), multiply(a, b));
    }

    /// Referential transparency: results are independent of call order.
    #[test]
    fn prop_curry_call_order_independence(a in any::<i32>(), b1 in any::<i32>(), b2 in any::<i32>()) {
        let multiply = |x: i32, y: i32| x.wrapping_mul(y);

        let fixed = curry(multiply, a);

        let first_then_second = (fixed(b1), fixed(b2));
        let second_then_first = (fixed(b2), fixed(b1));

        prop_assert_eq!(first_then_second.0, second_then_first.1);
        prop_assert_eq!(first_then_second.1, second_then_first.0);
        prop_assert_eq!(first_then_second.0, multiply(a, b1));
        prop_assert_eq!(first_then_second.1, multiply(a, b2));
    }
}

// =============================================================================
// Partial Laws
// =============================================================================

proptest! {
    /// Fill Equivalence: partial(op, [Hole, Value(b)])(&[a]) == op(&[a, b])
    #[test]
    fn prop_partial_fill_equivalence(a in any::<i32>(), b in any::<i32>()) {
        fn wrapping_sum(arguments: &[i32]) -> i32 {
            arguments.iter().fold(0_i32, |total, value| total.wrapping_add(*value))
        }

        let fixed = partial(wrapping_sum, vec![Slot::Hole, Slot::Value(b)]).unwrap();

        prop_assert_eq!(fixed(&[a]).unwrap(), wrapping_sum(&[a, b]));
    }

    /// Invocation Independence: a second call sees no residue from the first.
    #[test]
    fn prop_partial_invocation_independence(fixed_value in any::<i32>(), a1 in any::<i32>(), a2 in any::<i32>()) {
        fn wrapping_sum(arguments: &[i32]) -> i32 {
            arguments.iter().fold(0_i32, |total, value| total.wrapping_add(*value))
        }

        let fixed = partial(wrapping_sum, vec![Slot::Hole, Slot::Value(fixed_value)]).unwrap();

        let first = fixed(&[a1]).unwrap();
        let second = fixed(&[a2]).unwrap();

        prop_assert_eq!(first, wrapping_sum(&[a1, fixed_value]));
        prop_assert_eq!(second, wrapping_sum(&[a2, fixed_value]));
    }
}
