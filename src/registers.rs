//! Register map and constants for the HDC1080.
//! Pointer values, bit masks and conversion factors are copied from the datasheet.

/// Factory-programmed I2C address. The HDC1080 has no address pins, so every
/// part responds at 0x40; the driver still accepts an override for bridges
/// that remap addresses.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x40;

/// Manufacturer ID register content ("TI" in ASCII).
pub const MANUFACTURER_ID: u16 = 0x5449;
/// Device ID register content.
pub const DEVICE_ID: u16 = 0x1050;

/// Settling time after power-up before the configuration register is writable.
/// During this window only the serial-number and ID registers respond.
pub const STARTUP_DELAY_MS: u32 = 15;
/// Worst-case conversion time for a single channel. The 14-bit conversion
/// needs up to ~6.5 ms per channel, so one fixed 15 ms wait covers every
/// resolution setting.
pub const MEASUREMENT_DELAY_MS: u32 = 15;

/// Register pointer values. The datasheet documents exactly these eight
/// addresses; writing any other pointer value is undefined.
pub mod ptr {
    /// Temperature result (read).
    pub const TEMPERATURE: u8 = 0x00;
    /// Humidity result (read).
    pub const HUMIDITY: u8 = 0x01;
    /// Configuration (read/write).
    pub const CONFIGURATION: u8 = 0x02;
    /// Serial ID, high 16 bits.
    pub const SERIAL_ID_HIGH: u8 = 0xFB;
    /// Serial ID, middle 16 bits.
    pub const SERIAL_ID_MID: u8 = 0xFC;
    /// Serial ID, low 16 bits.
    pub const SERIAL_ID_LOW: u8 = 0xFD;
    /// Manufacturer ID (0x5449).
    pub const MANUFACTURER_ID: u8 = 0xFE;
    /// Device ID (0x1050).
    pub const DEVICE_ID: u8 = 0xFF;
}

bitflags::bitflags! {
    /// Configuration register bits (0x02). Bits 7-0 are reserved and must be
    /// written back exactly as read.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ConfigBits: u16 {
        /// Bit 15: Software reset (self-clearing).
        const RESET = 1 << 15;
        /// Bit 13: On-chip heater enable.
        const HEATER = 1 << 13;
        /// Bit 12: Acquisition mode (0 = temperature or humidity measured
        /// separately, 1 = both in sequence).
        const ACQUISITION_MODE = 1 << 12;
        /// Bit 11: Battery status (read-only, 1 = supply below 2.8 V).
        const BATTERY_STATUS = 1 << 11;
        /// Bit 10: Temperature resolution (0 = 14-bit, 1 = 11-bit).
        const TEMPERATURE_RESOLUTION = 1 << 10;
        /// Bits 9-8: Humidity resolution (00 = 14-bit, 01 = 11-bit, 10 = 8-bit).
        const HUMIDITY_RESOLUTION_MSB = 1 << 9;
        const HUMIDITY_RESOLUTION_LSB = 1 << 8;
    }
}

/// Convert a raw 16-bit temperature reading to degrees Celsius.
pub fn raw_to_celsius(raw: u16) -> f32 {
    (raw as f32) * 165.0 / 65536.0 - 40.0
}

/// Convert a raw 16-bit humidity reading to percent relative humidity.
pub fn raw_to_relative_humidity(raw: u16) -> f32 {
    (raw as f32) / 65536.0 * 100.0
}

/// Extract the two-bit humidity resolution field (bits 9-8).
pub fn decode_humidity_resolution(bits: &ConfigBits) -> u8 {
    ((bits.bits() >> 8) & 0b11) as u8
}
