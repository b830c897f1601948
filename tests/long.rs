use kernel_convert::convert::long::*;

#[test]
fn rte_ties_go_to_even() {
    assert_eq!(convert_long_rte(2.5f64), 2);
    assert_eq!(convert_long_rte(3.5f64), 4);
    assert_eq!(convert_long_rte(-2.5f32), -2);
    assert_eq!(convert_long_rte(-3.5f32), -4);
}

#[test]
fn rte_parity_uses_full_width() {
    // 2^51 + 0.5 and 2^51 + 1.5 are exact in f64 and beyond the i32 range.
    assert_eq!(convert_long_rte(2251799813685248.5f64), 2251799813685248);
    assert_eq!(convert_long_rte(2251799813685249.5f64), 2251799813685250);
    assert_eq!(convert_long_rte(-2251799813685249.5f64), -2251799813685250);
}

#[test]
fn directed_modes() {
    assert_eq!(convert_long_rtp(2.1f64), 3);
    assert_eq!(convert_long_rtn(2.9f64), 2);
    assert_eq!(convert_long_rtp(-2.9f32), -2);
    assert_eq!(convert_long_rtn(-2.1f32), -3);
    assert_eq!(convert_long_rtz(-2.7f64), -2);
    assert_eq!(convert_long(2.7f32), 2);
}

#[test]
fn beyond_i32_range() {
    assert_eq!(convert_long_rtz(3e9f64), 3_000_000_000);
    assert_eq!(convert_long_rtp(-3e9f32), -3_000_000_000);
    assert_eq!(convert_long_sat_rtn(1e12f64 + 0.25), 1_000_000_000_000);
}

#[test]
fn sat_infinity_and_nan() {
    assert_eq!(convert_long_sat_rtz(f64::INFINITY), i64::MAX);
    assert_eq!(convert_long_sat_rtz(f64::NEG_INFINITY), i64::MIN);
    assert_eq!(convert_long_sat_rtp(f32::INFINITY), i64::MAX);
    assert_eq!(convert_long_sat_rtn(f32::NEG_INFINITY), i64::MIN);
    assert_eq!(convert_long_sat_rte(1e300f64), i64::MAX);
    assert_eq!(convert_long_sat(-1e30f32), i64::MIN);

    assert_eq!(convert_long_sat_rte(f64::NAN), 0);
    assert_eq!(convert_long_sat_rtp(f32::NAN), 0);
    assert_eq!(convert_long_sat_rtn(f32::NAN), 0);
    assert_eq!(convert_long_sat_rtz(f64::NAN), 0);
}
