use kernel_convert::convert::checked::{try_convert, try_convert_int, try_convert_long};
use kernel_convert::{ConversionError, IntWidth, RoundingMode};

#[test]
fn in_range_values_convert() {
    assert_eq!(try_convert_int(2.5f32, RoundingMode::NearestEven), Ok(2));
    assert_eq!(try_convert_int(2147483647.4f64, RoundingMode::TowardZero), Ok(i32::MAX));
    assert_eq!(try_convert_int(-2147483648.9f64, RoundingMode::TowardZero), Ok(i32::MIN));
    assert_eq!(try_convert_int(2147483520.0f32, RoundingMode::TowardPositive), Ok(2147483520));
    assert_eq!(try_convert_long(-3e9f64, RoundingMode::TowardNegative), Ok(-3_000_000_000));
}

#[test]
fn nan_is_rejected() {
    assert_eq!(
        try_convert_int(f32::NAN, RoundingMode::TowardZero),
        Err(ConversionError::NotANumber)
    );
    assert_eq!(
        try_convert::<i64, f64>(f64::NAN, RoundingMode::NearestEven),
        Err(ConversionError::NotANumber)
    );
}

#[test]
fn range_is_checked_after_rounding() {
    assert_eq!(
        try_convert_int(2147483647.4f64, RoundingMode::TowardPositive),
        Err(ConversionError::OutOfRange {
            value: 2147483647.4,
            width: IntWidth::Int32,
        })
    );
    assert!(try_convert_int(-2147483648.9f64, RoundingMode::TowardNegative).is_err());
    assert!(try_convert_int(2147483648.0f32, RoundingMode::TowardZero).is_err());
    assert!(try_convert_long(9223372036854775808.0f64, RoundingMode::TowardZero).is_err());
    assert_eq!(
        try_convert_long(-9223372036854775808.0f64, RoundingMode::TowardZero),
        Ok(i64::MIN)
    );
}

#[test]
fn infinities_are_rejected() {
    for mode in RoundingMode::ALL {
        assert!(try_convert_int(f64::INFINITY, mode).is_err());
        assert!(try_convert_long(f32::NEG_INFINITY, mode).is_err());
    }
}

#[test]
fn error_messages() {
    assert_eq!(ConversionError::NotANumber.to_string(), "NaN has no integer value");

    let err = try_convert_int(1e10f64, RoundingMode::TowardZero).unwrap_err();
    assert_eq!(
        err.to_string(),
        "10000000000 is outside the range of a 32-bit signed integer"
    );
}
