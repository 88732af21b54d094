use hdc1080_rs::registers::{raw_to_celsius, raw_to_relative_humidity};

#[test]
fn temperature_spans_datasheet_range() {
    assert_eq!(raw_to_celsius(0), -40.0);
    assert!((raw_to_celsius(u16::MAX) - 124.997).abs() < 1e-3);
}

#[test]
fn temperature_half_scale_is_exact() {
    // 0x8000 / 65536 * 165 - 40 = 42.5, exact in f32
    assert_eq!(raw_to_celsius(0x8000), 42.5);
}

#[test]
fn humidity_spans_full_scale() {
    assert_eq!(raw_to_relative_humidity(0), 0.0);
    assert!((raw_to_relative_humidity(u16::MAX) - 99.998).abs() < 1e-3);
}

#[test]
fn humidity_half_scale_is_exact() {
    assert_eq!(raw_to_relative_humidity(0x8000), 50.0);
}

#[test]
fn conversions_are_monotonic() {
    let samples = [0u16, 0x1000, 0x4000, 0x8000, 0xC000, 0xFFFF];
    for pair in samples.windows(2) {
        assert!(raw_to_celsius(pair[0]) < raw_to_celsius(pair[1]));
        assert!(raw_to_relative_humidity(pair[0]) < raw_to_relative_humidity(pair[1]));
    }
}
