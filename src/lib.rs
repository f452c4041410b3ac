//! Checked conversions between fixed-width integers
//!
//! This crate provides a single primitive: converting an integer of one
//! fixed width and signedness into another, failing loudly instead of
//! silently truncating or wrapping when the value does not fit.
//!
//! # Module overview
//!
//! - `integer`
//!   The `Integer` trait describing the numeric domain of each supported
//!   type (`i8`..`i64`, `u8`..`u64`): signedness, width, bounds and a
//!   printable name. The trait is sealed.
//!
//! - `convert`
//!   The conversion itself, `convert::<To, _>(value)`, and the `SafeCast`
//!   extension trait offering the same operation in method form.
//!
//! - `error`
//!   `ConversionError`, with exactly two kinds: `Overflow` (value above the
//!   target maximum) and `Underflow` (value below the target minimum,
//!   including any negative value for an unsigned target).
//!
//! # Example
//!
//! ```
//! use safecast::{ConversionError, convert};
//!
//! assert_eq!(convert::<i8, _>(127i64), Ok(127i8));
//! assert!(matches!(convert::<i8, _>(128i64), Err(ConversionError::Overflow { .. })));
//! assert!(matches!(convert::<u8, _>(-1i32), Err(ConversionError::Underflow { .. })));
//! ```
//!
//! # Design goals
//!
//! - No heap allocations, no panics, no `unsafe`
//! - Every comparison happens in a domain wide enough for both operands
//! - Failures are values the caller can branch on, never a side channel

pub mod convert;
pub mod error;
pub mod integer;

pub use convert::{SafeCast, convert};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use integer::Integer;
