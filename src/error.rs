//! Error types reported by the assertion helpers.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AllegeError>;

/// Default message for a condition that evaluated to `false`.
pub const DEFAULT_CONDITION_MESSAGE: &str = "condition failed";

/// The kind of a failed assertion, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required value was absent.
    NullArgument,
    /// A condition was present but false.
    InvalidState,
    /// A value was present but empty.
    OutOfRange,
    /// A value exposes no emptiness capability.
    NotSupported,
}

/// Which emptiness rule rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmptyReason {
    /// Text of zero length.
    String,
    /// Sized container with a count of zero.
    Collection,
    /// Sequence that yielded no first element.
    Enumerable,
}

impl EmptyReason {
    /// Stable reason text for this rule.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String is empty",
            Self::Collection => "Collection is empty",
            Self::Enumerable => "Enumerable is empty",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when an assertion does not hold.
///
/// Parameter names are `None` when the caller did not supply one. An empty
/// name is normalized to `None` on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllegeError {
    /// The condition or value was absent.
    NullArgument {
        /// Name of the absent parameter.
        name: Option<String>,
    },
    /// The condition was present but evaluated to `false`.
    InvalidState {
        /// Caller-supplied message, or [`DEFAULT_CONDITION_MESSAGE`].
        message: String,
    },
    /// The value was present but empty.
    OutOfRange {
        /// Name of the empty parameter.
        name: Option<String>,
        /// Rule that found the value empty.
        reason: EmptyReason,
    },
    /// The value exposes none of the recognized emptiness capabilities.
    NotSupported {
        /// Name of the unsupported parameter.
        name: Option<String>,
    },
}

fn normalize(name: Option<&str>) -> Option<String> {
    name.filter(|n| !n.is_empty()).map(str::to_owned)
}

impl AllegeError {
    /// Creates a [`AllegeError::NullArgument`].
    pub fn null_argument(name: Option<&str>) -> Self {
        Self::NullArgument { name: normalize(name) }
    }

    /// Creates a [`AllegeError::InvalidState`], falling back to the default message.
    pub fn invalid_state(message: Option<&str>) -> Self {
        Self::InvalidState {
            message: message.unwrap_or(DEFAULT_CONDITION_MESSAGE).to_owned(),
        }
    }

    /// Creates a [`AllegeError::OutOfRange`].
    pub fn out_of_range(name: Option<&str>, reason: EmptyReason) -> Self {
        Self::OutOfRange { name: normalize(name), reason }
    }

    /// Creates a [`AllegeError::NotSupported`].
    pub fn not_supported(name: Option<&str>) -> Self {
        Self::NotSupported { name: normalize(name) }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NotSupported { .. } => ErrorKind::NotSupported,
        }
    }

    /// Returns the parameter name, if one was recorded.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NullArgument { name } | Self::OutOfRange { name, .. } | Self::NotSupported { name } => {
                name.as_deref()
            }
            Self::InvalidState { .. } => None,
        }
    }

    /// Returns the reason text without the parameter suffix.
    pub fn message(&self) -> &str {
        match self {
            Self::NullArgument { .. } => "value cannot be null",
            Self::InvalidState { message } => message,
            Self::OutOfRange { reason, .. } => reason.as_str(),
            Self::NotSupported { .. } => "emptiness check is not supported",
        }
    }
}

impl fmt::Display for AllegeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let Some(name) = self.name() {
            write!(f, " (parameter '{name}')")?;
        }
        Ok(())
    }
}

impl std::error::Error for AllegeError {}
