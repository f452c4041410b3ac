//! Conversion failures.
//!
//! A conversion can fail in exactly two ways. Both variants carry the
//! source value and the names of the source and target types so that the
//! message is useful on its own; callers should branch on the variant (or
//! on [`ConversionError::kind`]), not on the message.

use std::fmt::{Display, Formatter, Result};

use thiserror::Error;

/// Result of a checked conversion.
pub type ConversionResult<T> = core::result::Result<T, ConversionError>;

/// Errors returned by [`convert`](crate::convert::convert).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value is greater than the maximum of the target type.
    #[error("Overflow casting from {from} (value: {value}) to {to}.")]
    Overflow {
        /// Source value, exactly.
        value: i128,
        /// Name of the source type.
        from: &'static str,
        /// Name of the target type.
        to: &'static str,
    },

    /// The value is less than the minimum of the target type.
    ///
    /// Any negative value converted into an unsigned type ends up here.
    #[error("Underflow casting from {from} (value: {value}) to {to}.")]
    Underflow {
        /// Source value, exactly.
        value: i128,
        /// Name of the source type.
        from: &'static str,
        /// Name of the target type.
        to: &'static str,
    },
}

/// The kind of a [`ConversionError`], without its context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConversionErrorKind {
    Overflow,
    Underflow,
}

impl ConversionError {
    pub fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::Overflow { .. } => ConversionErrorKind::Overflow,
            Self::Underflow { .. } => ConversionErrorKind::Underflow,
        }
    }

    /// The value that failed to convert.
    pub fn value(&self) -> i128 {
        match *self {
            Self::Overflow { value, .. } | Self::Underflow { value, .. } => value,
        }
    }

    pub fn from_type(&self) -> &'static str {
        match *self {
            Self::Overflow { from, .. } | Self::Underflow { from, .. } => from,
        }
    }

    pub fn to_type(&self) -> &'static str {
        match *self {
            Self::Overflow { to, .. } | Self::Underflow { to, .. } => to,
        }
    }
}

impl Display for ConversionErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Overflow => f.write_str("Overflow"),
            Self::Underflow => f.write_str("Underflow"),
        }
    }
}
