//! # pointfree
//!
//! Function composition, currying, and partial application combinators
//! for Rust.
//!
//! ## Overview
//!
//! This library provides the small set of generic building blocks needed
//! for point-free programming:
//!
//! - **Composition**: [`compose`](combinator::compose) builds a new function
//!   by feeding the output of one function into another, and the [`pipe!`]
//!   macro threads a value through a chain of transformations.
//! - **Currying**: [`curry`](combinator::curry) fixes the first argument of
//!   a binary operation; [`curry2!`] and [`curry3!`] convert whole functions
//!   into curried form.
//! - **Partial application**: [`partial`](combinator::partial) fills an
//!   explicit argument template with holes at runtime, and the [`partial!`]
//!   macro does the same at compile time with the `__` placeholder.
//! - **Helpers**: [`identity`](combinator::identity),
//!   [`constant`](combinator::constant), and [`flip`](combinator::flip),
//!   the I, K, and C combinators.
//!
//! ## Example
//!
//! ```rust
//! use pointfree::combinator::{compose, curry};
//!
//! let plus_one = |x: i32| x + 1;
//! let square = |x: i32| x * x;
//!
//! // Left-to-right: plus_one first, then square.
//! let plus_one_and_square = compose(plus_one, square);
//! assert_eq!(plus_one_and_square(3), 16);
//!
//! let multiply = |x: i32, y: i32| x * y;
//! let double = curry(multiply, 2);
//! assert_eq!(double(3), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and types.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
}

pub mod combinator;
