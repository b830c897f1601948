use kernel_convert::convert::{IntWidth, clamp_to_int_range, saturate, saturate_int, saturate_long};

#[test]
fn saturate_nan_is_zero() {
    assert_eq!(saturate_int(f32::NAN), 0.0);
    assert_eq!(saturate_int(f64::NAN), 0.0);
    assert_eq!(saturate_long(f32::NAN), 0.0);
    assert_eq!(saturate_long(f64::NAN), 0.0);
}

#[test]
fn saturate_int_above_max() {
    // i32::MAX rounds up to 2^31 in f32.
    assert_eq!(saturate_int(1e10f32), 2147483648.0f32);
    assert_eq!(saturate_int(f32::INFINITY), 2147483648.0f32);

    assert_eq!(saturate_int(3e9f64), 2147483647.0);
    assert_eq!(saturate_int(2147483647.5f64), 2147483647.0);
    assert_eq!(saturate_int(f64::INFINITY), 2147483647.0);
}

#[test]
fn saturate_int_below_min() {
    assert_eq!(saturate_int(-1e10f32), -2147483648.0f32);
    assert_eq!(saturate_int(f64::NEG_INFINITY), -2147483648.0);
    assert_eq!(saturate_int(-2147483648.5f64), -2147483648.0);
}

#[test]
fn saturate_long_bounds() {
    assert_eq!(saturate_long(1e30f32), 9223372036854775808.0f32);
    assert_eq!(saturate_long(f64::INFINITY), 9223372036854775808.0);
    assert_eq!(saturate_long(-1e300f64), -9223372036854775808.0);
    assert_eq!(saturate_long(f32::NEG_INFINITY), -9223372036854775808.0f32);
}

#[test]
fn saturate_in_range_is_identity() {
    assert_eq!(saturate_int(5.5f64), 5.5);
    assert_eq!(saturate_int(-0.25f32), -0.25);
    assert_eq!(saturate_long(3e9f64), 3e9);
    assert_eq!(saturate::<i32, f64>(2147483647.0), 2147483647.0);
    assert_eq!(saturate::<i32, f64>(-2147483648.0), -2147483648.0);
}

#[test]
fn clamp_to_int_range_selects_width() {
    assert_eq!(clamp_to_int_range(3e9f64, IntWidth::Int32), 2147483647.0);
    assert_eq!(clamp_to_int_range(3e9f64, IntWidth::Int64), 3e9);
    assert_eq!(clamp_to_int_range(f32::NAN, IntWidth::Int64), 0.0);
}
