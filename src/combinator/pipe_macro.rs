//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies functions
//! from left to right, following the data flow style of programming.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" style of function application: the value flows
/// through transformations in the order they are written. While
/// [`compose`](crate::combinator::compose) creates a new function from two
/// steps, `pipe!` immediately applies any number of steps to a value.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once. This allows using functions that consume their
/// captured environment.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use pointfree::pipe;
///
/// fn plus_one(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // square(plus_one(3)) = square(4) = 16
/// let result = pipe!(3, plus_one, square);
/// assert_eq!(result, 16);
/// ```
///
/// ## Collection pipeline
///
/// ```
/// use pointfree::pipe;
///
/// let result = pipe!(
///     vec![3, 1, 2],
///     |mut values: Vec<i32>| { values.sort_unstable(); values },
///     |values: Vec<i32>| values.into_iter().map(|value| value * 10).collect::<Vec<_>>(),
/// );
/// assert_eq!(result, vec![10, 20, 30]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: no transformation
    ($value:expr $(,)?) => {
        $value
    };

    // Single function application
    ($value:expr, $function:expr $(,)?) => {{
        let function = $function;
        function($value)
    }};

    // Two or more functions: apply the first, then recurse
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let function = $function;
        $crate::pipe!(function($value), $($remaining_functions),+)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_pipe_single() {
        let double = |x: i32| x * 2;
        let result = pipe!(5, double);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_pipe_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let plus_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, plus_one(18) = 19
        let result = pipe!(3, square, double, plus_one);
        assert_eq!(result, 19);
    }
}
