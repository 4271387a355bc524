//! The assertion helpers.
//!
//! Each helper returns `Ok` when its check holds and an [`AllegeError`] of a
//! fixed kind otherwise. Nothing is retried or recovered; the caller decides
//! what a failure means, usually by propagating it with `?`.

use crate::emptiness::{Capability, Emptiness};
use crate::error::{AllegeError, EmptyReason, Result};

/// Parameter name reported when the condition itself is absent.
const CONDITION_PARAM: &str = "condition";

#[inline]
fn reject<T>(error: AllegeError) -> Result<T> {
    #[cfg(feature = "tracing")]
    tracing::debug!(kind = ?error.kind(), name = error.name(), "assertion failed: {}", error);
    Err(error)
}

/// Ensures that a condition is known and true.
///
/// # Errors
///
/// - [`AllegeError::NullArgument`] when `condition` is `None`.
/// - [`AllegeError::InvalidState`] when `condition` is `Some(false)`, carrying
///   `message` or `"condition failed"`.
///
/// # Example
///
/// ```rust
/// use allege::{assert_condition, ErrorKind};
///
/// assert!(assert_condition(Some(true), None).is_ok());
///
/// let err = assert_condition(Some(false), Some("queue drained")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidState);
/// assert_eq!(err.to_string(), "queue drained");
/// ```
pub fn assert_condition(condition: Option<bool>, message: Option<&str>) -> Result<()> {
    match condition {
        None => reject(AllegeError::null_argument(Some(CONDITION_PARAM))),
        Some(false) => reject(AllegeError::invalid_state(message)),
        Some(true) => Ok(()),
    }
}

/// Ensures that a value is present, handing it back on success.
///
/// # Errors
///
/// [`AllegeError::NullArgument`] carrying `name` when `value` is `None`.
pub fn assert_not_null<T>(value: Option<T>, name: Option<&str>) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => reject(AllegeError::null_argument(name)),
    }
}

/// Ensures that a value is present and not empty.
///
/// Absence is checked first, then the value's [`Capability`]:
///
/// | Capability | Empty when | Reason |
/// |---|---|---|
/// | `Text` | length is zero | `String is empty` |
/// | `Counted` | count is zero | `Collection is empty` |
/// | `Sequence` | no first element | `Enumerable is empty` |
/// | `Opaque` | always rejected | |
///
/// A sequence is checked by pulling one element. For a single-pass sequence
/// that element is gone afterwards; the cursor is released before this
/// function returns, including when the pull panics.
///
/// # Errors
///
/// - [`AllegeError::NullArgument`] when `value` is `None`.
/// - [`AllegeError::OutOfRange`] when the value is empty.
/// - [`AllegeError::NotSupported`] when the value has no emptiness capability.
///
/// # Example
///
/// ```rust
/// use allege::{assert_not_empty, sequence, ErrorKind};
///
/// assert!(assert_not_empty(Some("abc"), Some("label")).is_ok());
/// assert!(assert_not_empty(Some(vec![1]), None).is_ok());
///
/// let err = assert_not_empty(Some(sequence(Vec::<u8>::new())), Some("bytes")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// assert_eq!(err.to_string(), "Enumerable is empty (parameter 'bytes')");
/// ```
pub fn assert_not_empty<T: Emptiness>(value: Option<T>, name: Option<&str>) -> Result<()> {
    let Some(mut value) = value else {
        return reject(AllegeError::null_argument(name));
    };

    let empty = match value.capability() {
        Capability::Text(text) => text.is_empty().then_some(EmptyReason::String),
        Capability::Counted(count) => (count == 0).then_some(EmptyReason::Collection),
        Capability::Sequence(traversal) => (!traversal.pull_first()).then_some(EmptyReason::Enumerable),
        Capability::Opaque => return reject(AllegeError::not_supported(name)),
    };

    match empty {
        Some(reason) => reject(AllegeError::out_of_range(name, reason)),
        None => Ok(()),
    }
}
