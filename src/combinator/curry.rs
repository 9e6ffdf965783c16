//! The `curry` function for fixing the first argument of a binary operation.

/// Fixes the first argument of a binary operation, producing a unary function.
///
/// `curry(operation, first)(second)` is equivalent to
/// `operation(first, second)`. The returned function is referentially
/// transparent: the only state it carries is the fixed first argument,
/// captured at creation time, so repeated calls with the same second
/// argument always yield the same result regardless of call order.
///
/// To fix the *second* argument instead, combine with
/// [`flip`](crate::combinator::flip): `curry(flip(operation), second)`.
///
/// # Type Requirements
///
/// - The operation must implement [`Fn`]
/// - The fixed argument must implement [`Clone`] (the returned function may
///   be called multiple times)
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use pointfree::combinator::curry;
///
/// fn multiply(x: i32, y: i32) -> i32 { x * y }
///
/// let double = curry(multiply, 2);
/// assert_eq!(double(3), 6);
/// assert_eq!(double(10), 20);
/// ```
///
/// ## Non-`Copy` fixed argument
///
/// ```
/// use pointfree::combinator::curry;
///
/// fn join(separator: String, word: &str) -> String {
///     format!("{separator}{word}")
/// }
///
/// let dashed = curry(join, "-".to_string());
/// assert_eq!(dashed("a"), "-a");
/// assert_eq!(dashed("b"), "-b");
/// ```
#[inline]
pub fn curry<A, B, C, F>(operation: F, first: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    move |second| operation(first.clone(), second)
}
