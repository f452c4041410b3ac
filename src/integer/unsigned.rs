//! Unsigned types: `u8`, `u16`, `u32`, `u64`.

super::impl_integer!(false: u8, u16, u32, u64);
