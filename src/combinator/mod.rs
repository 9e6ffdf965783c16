//! Function combinators.
//!
//! This module provides the core combinators for composing, currying, and
//! partially applying functions.
//!
//! # Overview
//!
//! - [`compose`]: Compose two functions left-to-right (data flow order)
//! - [`curry`]: Fix the first argument of a binary operation
//! - [`partial`]: Partial application over an explicit argument template
//! - [`pipe!`]: Thread a value through a chain of functions left-to-right
//! - [`partial!`]: Partial application with the `__` placeholder
//! - [`curry2!`] / [`curry3!`]: Convert multi-argument functions to curried form
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Composition (left-to-right)
//!
//! ```
//! use pointfree::combinator::compose;
//!
//! fn plus_one(x: i32) -> i32 { x + 1 }
//! fn square(x: i32) -> i32 { x * x }
//!
//! // compose(f, g)(x) = g(f(x)): the first argument is applied first.
//! let composed = compose(plus_one, square);
//! assert_eq!(composed(3), 16); // square(plus_one(3)) = square(4) = 16
//! ```
//!
//! ## Currying
//!
//! ```
//! use pointfree::combinator::curry;
//!
//! fn multiply(first: i32, second: i32) -> i32 { first * second }
//!
//! let double = curry(multiply, 2);
//! assert_eq!(double(3), 6);
//! ```
//!
//! ## Partial application over a template
//!
//! ```
//! use pointfree::combinator::{partial, Slot};
//!
//! fn sum(arguments: &[i32]) -> i32 { arguments.iter().sum() }
//!
//! let add_three = partial(sum, vec![Slot::Hole, Slot::Value(3)])?;
//! assert_eq!(add_three(&[1])?, 4);
//! # Ok::<(), pointfree::combinator::PartialError>(())
//! ```
//!
//! ## Partial application with the placeholder macro
//!
//! ```
//! use pointfree::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // Use __ as a placeholder for arguments that should remain as parameters.
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let add_five = partial!(add, 5, __);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Curry Equivalence**: `curry(f, a)(b) == f(a, b)`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod compose;
mod curry;
mod curry_macro;
mod partial;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use compose::compose;
pub use curry::curry;
pub use partial::{PartialError, Slot, partial};
pub use utils::{__, Placeholder, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;
pub use crate::pipe;
