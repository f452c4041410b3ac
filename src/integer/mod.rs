//! Numeric domains of the supported integer types
//!
//! [`Integer`] describes, at the type level, everything the conversion
//! needs to know about a fixed-width integer: whether it is signed, how
//! many bits it has, its bounds and a printable name.
//!
//! Values are compared in a common scratch domain, `i128`, which holds
//! every value of every supported type exactly. Comparing a signed and an
//! unsigned value of the same width directly would reinterpret one of
//! them; widening both sides first sidesteps that.
//!
//! Implementations are split by signedness and generated for the eight
//! standard widths only. The trait is sealed so no wider type can be
//! plugged in.

mod signed;
mod unsigned;

/// Scratch domain used for every comparison.
pub(crate) type Wide = i128;

pub(crate) mod sealed {
    use super::Wide;

    pub trait Sealed: Copy {
        /// Lossless embedding into the scratch domain.
        fn widen(self) -> Wide;

        /// Narrows a widened value back.
        ///
        /// Only called once the value is known to be in range, where the
        /// `as` cast is exact.
        fn narrow(wide: Wide) -> Self;
    }
}

/// A fixed-width integer that can take part in a checked conversion.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32` and `u64`.
///
/// ```
/// use safecast::Integer;
///
/// assert!(<i16 as Integer>::SIGNED);
/// assert_eq!(<u32 as Integer>::BITS, 32);
/// assert_eq!(<u8 as Integer>::NAME, "u8");
/// ```
pub trait Integer: sealed::Sealed + core::fmt::Debug + core::fmt::Display + PartialEq {
    /// Whether the type can represent negative values.
    const SIGNED: bool;
    /// Width in bits.
    const BITS: u32;
    const MIN: Self;
    const MAX: Self;
    /// Type name used in diagnostics.
    const NAME: &'static str;
}

macro_rules! impl_integer {
    ($signed:literal: $($ty:ident),*) => { $(
        impl crate::integer::sealed::Sealed for $ty {
            #[inline]
            fn widen(self) -> crate::integer::Wide {
                crate::integer::Wide::from(self)
            }

            #[inline]
            fn narrow(wide: crate::integer::Wide) -> Self {
                wide as $ty
            }
        }

        impl crate::integer::Integer for $ty {
            const SIGNED: bool = $signed;
            const BITS: u32 = $ty::BITS;
            const MIN: Self = $ty::MIN;
            const MAX: Self = $ty::MAX;
            const NAME: &'static str = stringify!($ty);
        }
    )* };
}

use impl_integer;
