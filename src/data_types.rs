//! Data types for HDC1080 driver, based on the configuration register fields.

/// Temperature conversion resolution (configuration bit 10).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TemperatureResolution {
    /// 14-bit conversion (power-on default).
    Bits14,
    /// 11-bit conversion.
    Bits11,
}

/// Humidity conversion resolution (configuration bits 9-8).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HumidityResolution {
    /// 14-bit conversion (power-on default).
    Bits14,
    /// 11-bit conversion.
    Bits11,
    /// 8-bit conversion.
    Bits8,
}

/// Acquisition mode (configuration bit 12).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AcquisitionMode {
    /// Temperature and humidity are measured by separate trigger/read cycles.
    Separate,
    /// One trigger measures both channels in sequence.
    Combined,
}

/// Battery status reported in configuration bit 11 (read-only).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BatteryStatus {
    /// Supply voltage above 2.8 V.
    Ok,
    /// Supply voltage below 2.8 V.
    Low,
}

/// Configuration register decoded into named fields.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SensorConfig {
    pub heater_enabled: bool,
    pub acquisition_mode: AcquisitionMode,
    pub battery_status: BatteryStatus,
    pub temperature_resolution: TemperatureResolution,
    pub humidity_resolution: HumidityResolution,
}
