//! The `partial!` macro for compile-time partial function application.
//!
//! This module provides the [`partial!`] macro which allows fixing some
//! arguments of a function while leaving others as parameters, with the
//! hole positions checked at compile time. For templates built at runtime,
//! use [`partial`](crate::combinator::partial) instead.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters in the resulting function.
///
/// **Important**: Do NOT import `pointfree::combinator::__`. The `__` is
/// matched as a literal token by the macro.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)` (identity)
///
/// Similar patterns apply for 3-argument functions.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (since the partial function may be called multiple times)
/// - The original function must implement [`Fn`]
///
/// # Supported Argument Counts
///
/// This macro supports functions with 2 or 3 arguments.
///
/// # Examples
///
/// ## Basic partial application
///
/// ```
/// use pointfree::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing the second argument
///
/// ```
/// use pointfree::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## With compose
///
/// ```
/// use pointfree::combinator::compose;
/// use pointfree::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let add_three = partial!(add, __, 3);
/// let quadruple = partial!(multiply, __, 4);
///
/// // add_three first, then quadruple: (1 + 3) * 4 = 16
/// let add_and_multiply = compose(add_three, quadruple);
/// assert_eq!(add_and_multiply(1), 16);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (most specific patterns first)
    // =========================================================================

    // (f, __, __, __) -> |a, b, c| f(a, b, c)
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    // (f, v1, __, __) -> |b, c| f(v1, b, c)
    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    // (f, __, v2, __) -> |a, c| f(a, v2, c)
    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    // (f, __, __, v3) -> |a, b| f(a, b, v3)
    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    // (f, v1, v2, __) -> |c| f(v1, v2, c)
    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    // (f, v1, __, v3) -> |b| f(v1, b, v3)
    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    // (f, __, v2, v3) -> |a| f(a, v2, v3)
    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    // (f, v1, v2, v3) -> || f(v1, v2, v3) (thunk - 3 args)
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions (must be last due to pattern matching order)
    // =========================================================================

    // (f, __, __) -> |a, b| f(a, b)
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    // (f, value, __) -> |b| f(value, b)
    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    // (f, __, value) -> |a| f(a, value)
    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    // (f, v1, v2) -> || f(v1, v2) (thunk - 2 args, must be last)
    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
}
