use hdc1080_rs::registers::{ConfigBits, decode_humidity_resolution};

#[test]
fn config_bit_positions_match_datasheet() {
    assert_eq!(ConfigBits::RESET.bits(), 0x8000);
    assert_eq!(ConfigBits::HEATER.bits(), 0x2000);
    assert_eq!(ConfigBits::ACQUISITION_MODE.bits(), 0x1000);
    assert_eq!(ConfigBits::BATTERY_STATUS.bits(), 0x0800);
    assert_eq!(ConfigBits::TEMPERATURE_RESOLUTION.bits(), 0x0400);
    assert_eq!(
        (ConfigBits::HUMIDITY_RESOLUTION_MSB | ConfigBits::HUMIDITY_RESOLUTION_LSB).bits(),
        0x0300
    );
}

#[test]
fn reserved_bits_survive_retain_and_updates() {
    // Bits 7-0 are reserved; they must ride along through flag edits.
    let mut bits = ConfigBits::from_bits_retain(0x10FF);
    assert_eq!(bits.bits(), 0x10FF);

    bits.insert(ConfigBits::HEATER);
    assert_eq!(bits.bits(), 0x30FF);

    bits.remove(ConfigBits::HEATER);
    assert_eq!(bits.bits(), 0x10FF);
}

#[test]
fn humidity_resolution_field_decodes() {
    let r14 = ConfigBits::from_bits_retain(0x0000);
    assert_eq!(decode_humidity_resolution(&r14), 0b00);

    let r11 = ConfigBits::HUMIDITY_RESOLUTION_LSB;
    assert_eq!(decode_humidity_resolution(&r11), 0b01);

    let r8 = ConfigBits::HUMIDITY_RESOLUTION_MSB;
    assert_eq!(decode_humidity_resolution(&r8), 0b10);
}

#[test]
fn resolution_field_ignores_neighbouring_bits() {
    let word = ConfigBits::from_bits_retain(0x3D00);
    // Heater, acquisition mode, battery and temperature bits set; humidity
    // field itself is 0b01.
    assert_eq!(decode_humidity_resolution(&word), 0b01);
}
