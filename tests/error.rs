use safecast::{ConversionError, ConversionErrorKind, convert};

#[test]
fn overflow_carries_context() {
    let err = convert::<i32, _>(u32::MAX).unwrap_err();

    assert_eq!(
        err,
        ConversionError::Overflow {
            value: 4_294_967_295,
            from: "u32",
            to: "i32",
        }
    );
    assert_eq!(err.kind(), ConversionErrorKind::Overflow);
    assert_eq!(err.value(), 4_294_967_295);
    assert_eq!(err.from_type(), "u32");
    assert_eq!(err.to_type(), "i32");
}

#[test]
fn underflow_carries_context() {
    let err = convert::<u64, _>(-1i8).unwrap_err();

    assert_eq!(err.kind(), ConversionErrorKind::Underflow);
    assert_eq!(err.value(), -1);
    assert_eq!(err.from_type(), "i8");
    assert_eq!(err.to_type(), "u64");
}

#[test]
fn value_is_kept_exactly_for_extreme_sources() {
    let err = convert::<i64, _>(u64::MAX).unwrap_err();
    assert_eq!(err.value(), i128::from(u64::MAX));

    let err = convert::<u64, _>(i64::MIN).unwrap_err();
    assert_eq!(err.value(), i128::from(i64::MIN));
}

#[test]
fn display_messages() {
    assert_eq!(
        convert::<i8, _>(128i64).unwrap_err().to_string(),
        "Overflow casting from i64 (value: 128) to i8."
    );
    assert_eq!(
        convert::<i8, _>(-129i64).unwrap_err().to_string(),
        "Underflow casting from i64 (value: -129) to i8."
    );
    assert_eq!(
        convert::<i64, _>(u64::MAX).unwrap_err().to_string(),
        "Overflow casting from u64 (value: 18446744073709551615) to i64."
    );
}

#[test]
fn kind_display() {
    assert_eq!(ConversionErrorKind::Overflow.to_string(), "Overflow");
    assert_eq!(ConversionErrorKind::Underflow.to_string(), "Underflow");
}

#[test]
fn usable_as_boxed_error() {
    fn narrow(v: i64) -> Result<u8, Box<dyn std::error::Error>> {
        Ok(convert::<u8, _>(v)?)
    }

    assert_eq!(narrow(200).unwrap(), 200);

    let err = narrow(-5).unwrap_err();
    let err = err.downcast_ref::<ConversionError>().unwrap();
    assert_eq!(err.kind(), ConversionErrorKind::Underflow);
}
