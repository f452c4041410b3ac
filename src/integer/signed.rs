//! Two's-complement types: `i8`, `i16`, `i32`, `i64`.

super::impl_integer!(true: i8, i16, i32, i64);
