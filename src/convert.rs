//! Checked integer conversion.
//!
//! The decision depends only on the signedness and width of both types:
//!
//! | From     | To       | Checks                                              |
//! |----------|----------|-----------------------------------------------------|
//! | signed   | signed   | overflow above `To::MAX`, underflow below `To::MIN` |
//! | unsigned | unsigned | same as above                                       |
//! | unsigned | signed   | overflow above `To::MAX` only                       |
//! | signed   | unsigned | underflow below zero, then overflow above `To::MAX` |
//! |          |          | only when `From` is wider than `To`                 |
//!
//! A non-negative signed value never exceeds the maximum of an unsigned type
//! of equal or greater width, so the last overflow check is skipped on width
//! alone. Converting a type into itself always succeeds.

use crate::error::{ConversionError, ConversionResult};
use crate::integer::{Integer, Wide};

/// Converts `value` into `To`, failing if it is not exactly representable.
///
/// The target type is chosen by the caller; the source type is usually
/// inferred. On success the result is numerically equal to `value`.
///
/// # Errors
///
/// - [`ConversionError::Overflow`] if `value` is greater than `To::MAX`
/// - [`ConversionError::Underflow`] if `value` is less than `To::MIN`
///   (for unsigned targets, if `value` is negative)
///
/// # Examples
///
/// ```
/// use safecast::{ConversionErrorKind, convert};
///
/// assert_eq!(convert::<u16, _>(255u8), Ok(255u16));
///
/// let err = convert::<i32, _>(u32::MAX).unwrap_err();
/// assert_eq!(err.kind(), ConversionErrorKind::Overflow);
/// assert_eq!(err.to_string(), "Overflow casting from u32 (value: 4294967295) to i32.");
///
/// let err = convert::<u64, _>(-1i8).unwrap_err();
/// assert_eq!(err.kind(), ConversionErrorKind::Underflow);
/// ```
#[inline]
pub fn convert<To: Integer, From: Integer>(value: From) -> ConversionResult<To> {
    let wide = value.widen();

    match (From::SIGNED, To::SIGNED) {
        (true, true) | (false, false) => {
            if wide > To::MAX.widen() {
                return Err(overflow::<To, From>(wide));
            }

            if wide < To::MIN.widen() {
                return Err(underflow::<To, From>(wide));
            }
        }
        (false, true) => {
            if wide > To::MAX.widen() {
                return Err(overflow::<To, From>(wide));
            }
        }
        (true, false) => {
            if wide < 0 {
                return Err(underflow::<To, From>(wide));
            }

            if From::BITS > To::BITS && wide > To::MAX.widen() {
                return Err(overflow::<To, From>(wide));
            }
        }
    }

    Ok(To::narrow(wide))
}

fn overflow<To: Integer, From: Integer>(value: Wide) -> ConversionError {
    ConversionError::Overflow {
        value,
        from: From::NAME,
        to: To::NAME,
    }
}

fn underflow<To: Integer, From: Integer>(value: Wide) -> ConversionError {
    ConversionError::Underflow {
        value,
        from: From::NAME,
        to: To::NAME,
    }
}

/// Method form of [`convert`].
///
/// ```
/// use safecast::SafeCast;
///
/// assert_eq!(127i64.safe_cast::<i8>(), Ok(127));
/// assert!((-129i64).safe_cast::<i8>().is_err());
/// ```
pub trait SafeCast: Integer {
    /// Converts `self` into `To`, see [`convert`].
    ///
    /// # Errors
    ///
    /// Same as [`convert`].
    fn safe_cast<To: Integer>(self) -> ConversionResult<To>;
}

impl<T: Integer> SafeCast for T {
    #[inline]
    fn safe_cast<To: Integer>(self) -> ConversionResult<To> {
        convert::<To, T>(self)
    }
}
