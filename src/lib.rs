//! # `allege` - Runtime Assertion Helpers
//!
//! Three small checks for validating arguments and state at runtime:
//!
//! - [`assert_condition`]: a condition is known and true.
//! - [`assert_not_null`]: an optional value is present.
//! - [`assert_not_empty`]: an optional value is present and not empty.
//!
//! Each returns a [`Result`] whose error, [`AllegeError`], has one of four
//! kinds (see [`ErrorKind`]) and a stable reason string suitable for showing
//! to an end user or writing to a log.
//!
//! ## Emptiness
//!
//! Emptiness is checked through the [`Emptiness`] trait, which tags a value with
//! one [`Capability`]: text, a sized container, a traversal-only sequence, or
//! opaque. Text and containers are inspected without being touched. Sequences
//! are checked by pulling a single element, so wrapping a one-shot iterator in
//! [`Sequence`] consumes its first element. Use [`Iterable`] over a borrowed
//! source when the check must be repeatable.
//!
//! ## Parameter names
//!
//! The functions take the parameter name explicitly. The [`not_null!`] and
//! [`not_empty!`] macros fill it in from the call-site expression, and
//! [`condition!`] accepts a formatted message.
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event for every failed assertion.
//!
//! ## Example
//!
//! ```rust
//! use allege::{not_empty, not_null, condition, AllegeError};
//!
//! fn schedule(name: Option<&str>, jobs: Option<&Vec<u32>>, workers: usize) -> Result<(), AllegeError> {
//!     not_empty!(name)?;
//!     not_null!(jobs)?;
//!     not_empty!(jobs)?;
//!     condition!(workers > 0, "need at least one worker")?;
//!     Ok(())
//! }
//!
//! assert!(schedule(Some("nightly"), Some(&vec![1]), 2).is_ok());
//!
//! let err = schedule(Some(""), Some(&vec![1]), 2).unwrap_err();
//! assert_eq!(err.to_string(), "String is empty (parameter 'name')");
//!
//! let err = schedule(Some("nightly"), Some(&vec![1]), 0).unwrap_err();
//! assert_eq!(err.to_string(), "need at least one worker");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod assertions;
pub mod emptiness;
pub mod error;

pub use assertions::{assert_condition, assert_not_empty, assert_not_null};
pub use emptiness::{iterable, sequence, Capability, Emptiness, Iterable, Sequence, Traversal};
pub use error::{AllegeError, EmptyReason, ErrorKind, Result, DEFAULT_CONDITION_MESSAGE};

// Errors cross thread boundaries and are usable with `anyhow`/`Box<dyn Error>`.
const _: () = {
    const fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<AllegeError>();
};
