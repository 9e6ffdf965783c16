//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `compose(identity, f)` and `compose(f, identity)` are both equivalent
/// to `f`.
///
/// # Examples
///
/// ```
/// use pointfree::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator. The value must implement [`Clone`] since
/// the returned function may be called multiple times.
///
/// # Examples
///
/// ```
/// use pointfree::combinator::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) == f(a, b)`. Also known
/// as the C combinator. Useful with [`curry`](crate::combinator::curry)
/// when you want to fix the second argument instead of the first.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use pointfree::combinator::{curry, flip};
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = curry(flip(divide), 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Placeholder marker type for partial application.
///
/// Used internally by the [`partial!`](crate::partial) macro. Users should
/// write `__` (double underscore) directly in the macro invocation as a
/// literal token, without importing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// **Important**: Do NOT import this constant when using
/// [`partial!`](crate::partial). The macro matches `__` as a literal token;
/// importing the constant would cause the macro pattern matching to fail.
///
/// Note: This is named `__` (double underscore) because `macro_rules!`
/// cannot match a single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

#[cfg(test)]
mod tests {
    use super::{constant, flip, identity};

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(flipped_power(3, 2), power(2, 3));
    }
}
