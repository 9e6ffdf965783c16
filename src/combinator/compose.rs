//! The `compose` function for left-to-right function composition.
//!
//! This module provides [`compose`], which combines two functions so that
//! the first is applied first and its output is fed into the second.

/// Composes two functions left-to-right.
///
/// `compose(step1, step2)(x)` is equivalent to `step2(step1(x))`: the first
/// argument is the first transformation applied. This is the data-flow
/// reading order, not the right-to-left mathematical convention.
///
/// Composition is strictly binary; to thread a value through a longer chain
/// in one expression, use [`pipe!`](crate::pipe).
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h)(x) == compose(f, compose(g, h))(x)`
/// - **Left Identity**: `compose(identity, f)(x) == f(x)`
/// - **Right Identity**: `compose(f, identity)(x) == f(x)`
///
/// # Type Requirements
///
/// Both functions must implement [`Fn`]. The output type of `step1` must
/// match the input type of `step2`; the spec's `T -> T` transformations are
/// the monomorphic case.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use pointfree::combinator::compose;
///
/// fn plus_one(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // plus_one is applied first: square(plus_one(3)) = square(4) = 16
/// let plus_one_and_square = compose(plus_one, square);
/// assert_eq!(plus_one_and_square(3), 16);
/// ```
///
/// ## Composing partially applied functions
///
/// ```
/// use pointfree::combinator::{compose, curry};
///
/// fn add(x: i32, y: i32) -> i32 { x + y }
/// fn multiply(x: i32, y: i32) -> i32 { x * y }
///
/// let add_three = curry(add, 3);
/// let double = curry(multiply, 2);
///
/// // add_three first, then double: (1 + 3) * 2 = 8
/// let add_and_double = compose(add_three, double);
/// assert_eq!(add_and_double(1), 8);
/// ```
///
/// ## Type conversion
///
/// ```
/// use pointfree::combinator::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digit_count = compose(to_string, get_length);
/// assert_eq!(digit_count(12345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(step1: F, step2: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| step2(step1(input))
}
