//! Runtime partial application over an explicit argument template.
//!
//! This module provides [`partial`], which fixes a subset of an n-ary
//! operation's arguments ahead of time. Unfilled argument slots are marked
//! with [`Slot::Hole`] and supplied later, in left-to-right order.

use smallvec::SmallVec;

/// An argument slot in a partial-application template.
///
/// A template is a sequence of slots, one per argument of the underlying
/// operation. Each slot either carries a concrete value or is a hole to be
/// filled when the partially applied function is invoked.
///
/// # Examples
///
/// ```
/// use pointfree::combinator::Slot;
///
/// let template = vec![Slot::Hole, Slot::Value(3)];
/// assert!(template[0].is_hole());
/// assert!(!template[1].is_hole());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    /// An argument slot intentionally left unfilled, to be supplied later.
    Hole,
    /// An argument slot fixed to a concrete value at creation time.
    Value(T),
}

impl<T> Slot<T> {
    /// Returns `true` if this slot is a hole.
    #[inline]
    pub const fn is_hole(&self) -> bool {
        matches!(self, Self::Hole)
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Errors raised by [`partial`] and the functions it returns.
///
/// All errors are local and synchronous; none are recoverable internally
/// since there is no ambient state to roll back.
///
/// # Examples
///
/// ```
/// use pointfree::combinator::PartialError;
///
/// let error = PartialError::ArityMismatch { holes: 2, supplied: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "arity mismatch: template has 2 holes but 1 argument was supplied"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialError {
    /// Fewer arguments were supplied than the template has holes.
    ///
    /// Proceeding would invoke the operation with unfilled slots, so the
    /// call fails fast instead.
    ArityMismatch {
        /// The number of holes in the template.
        holes: usize,
        /// The number of arguments actually supplied.
        supplied: usize,
    },
    /// The template is empty or contains no holes at all.
    ///
    /// A template with nothing to fill is a caller contract violation and
    /// is reported at creation time rather than silently accepted.
    InvalidTemplate,
}

impl std::fmt::Display for PartialError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { holes, supplied } => {
                let plural = if *supplied == 1 { "argument was" } else { "arguments were" };
                write!(
                    formatter,
                    "arity mismatch: template has {holes} holes but {supplied} {plural} supplied"
                )
            }
            Self::InvalidTemplate => {
                write!(formatter, "invalid template: no holes to fill")
            }
        }
    }
}

impl std::error::Error for PartialError {}

/// Partially applies an n-ary operation using an argument template.
///
/// The template is a sequence of [`Slot`]s, one per argument of
/// `operation`. Slots carrying [`Slot::Value`] are fixed at creation time;
/// [`Slot::Hole`] slots are filled by the returned function's arguments, in
/// the order the holes appear.
///
/// Each invocation of the returned function assembles a *fresh* argument
/// list from the template. The template itself is never mutated, so
/// repeated invocations see no residue from earlier calls.
///
/// # Arguments supplied to the returned function
///
/// - Exactly as many as there are holes: every hole is filled and the
///   operation is invoked.
/// - Fewer than there are holes: [`PartialError::ArityMismatch`] - the
///   operation is never invoked with unfilled slots.
/// - More than there are holes: the extras are ignored.
///
/// # Errors
///
/// Returns [`PartialError::InvalidTemplate`] if the template is empty or
/// contains no holes.
///
/// # Examples
///
/// ## Fixing the second argument
///
/// ```
/// use pointfree::combinator::{partial, Slot};
///
/// fn sum(arguments: &[i32]) -> i32 { arguments.iter().sum() }
///
/// let add_three = partial(sum, vec![Slot::Hole, Slot::Value(3)])?;
/// assert_eq!(add_three(&[1])?, 4);
/// assert_eq!(add_three(&[10])?, 13);
/// # Ok::<(), pointfree::combinator::PartialError>(())
/// ```
///
/// ## Multiple holes fill left-to-right
///
/// ```
/// use pointfree::combinator::{partial, Slot};
///
/// fn weighted(arguments: &[i32]) -> i32 {
///     arguments[0] * 100 + arguments[1] * 10 + arguments[2]
/// }
///
/// let fixed_middle = partial(weighted, vec![Slot::Hole, Slot::Value(5), Slot::Hole])?;
/// assert_eq!(fixed_middle(&[1, 2])?, 152);
/// # Ok::<(), pointfree::combinator::PartialError>(())
/// ```
///
/// ## Under-supplying fails fast
///
/// ```
/// use pointfree::combinator::{partial, PartialError, Slot};
///
/// fn sum(arguments: &[i32]) -> i32 { arguments.iter().sum() }
///
/// let add = partial(sum, vec![Slot::Hole, Slot::Hole])?;
/// assert_eq!(
///     add(&[1]),
///     Err(PartialError::ArityMismatch { holes: 2, supplied: 1 })
/// );
/// # Ok::<(), pointfree::combinator::PartialError>(())
/// ```
pub fn partial<T, F>(
    operation: F,
    template: Vec<Slot<T>>,
) -> Result<impl Fn(&[T]) -> Result<T, PartialError>, PartialError>
where
    T: Clone,
    F: Fn(&[T]) -> T,
{
    let holes = template.iter().filter(|slot| slot.is_hole()).count();
    if template.is_empty() || holes == 0 {
        return Err(PartialError::InvalidTemplate);
    }

    Ok(move |rest: &[T]| {
        if rest.len() < holes {
            return Err(PartialError::ArityMismatch {
                holes,
                supplied: rest.len(),
            });
        }

        // Fresh argument list per call; the template is never written to.
        let mut filler = rest.iter();
        let assembled: SmallVec<[T; 4]> = template
            .iter()
            .map(|slot| match slot {
                Slot::Hole => filler
                    .next()
                    .cloned()
                    .unwrap_or_else(|| unreachable!("arity checked above")),
                Slot::Value(value) => value.clone(),
            })
            .collect();

        Ok(operation(&assembled))
    })
}
