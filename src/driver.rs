//! Blocking driver for the HDC1080; the async version mirrors this API behind
//! the `async` feature.
//!
//! Every data register read follows the sequence the device requires: a
//! pointer-only write, a fixed conversion wait, then a separate two-byte read.
//! The pointer write and the matching read must not be interleaved with any
//! other transaction on the same address, so the driver assumes exclusive use
//! of the bus handle for the duration of each call.

use crate::data_types::{
    AcquisitionMode, BatteryStatus, HumidityResolution, SensorConfig, TemperatureResolution,
};
use crate::error::Error;
use crate::registers::{
    ConfigBits, DEFAULT_I2C_ADDRESS, MEASUREMENT_DELAY_MS, STARTUP_DELAY_MS,
    decode_humidity_resolution, ptr, raw_to_celsius, raw_to_relative_humidity,
};

use embedded_hal::i2c::{Error as _, ErrorKind};

/// HDC1080 driver.
pub struct Hdc1080<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Hdc1080<I2C, D> {
    /// Create a new driver instance with the factory I2C address (0x40).
    ///
    /// No bus traffic happens until [`init`](Self::init) is called. Callers
    /// that keep ownership of the bus can pass `&mut i2c` / `&mut delay`
    /// thanks to the embedded-hal blanket impls.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus and delay handles.
    pub fn free(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

fn decode_configuration(bits: ConfigBits) -> SensorConfig {
    SensorConfig {
        heater_enabled: bits.contains(ConfigBits::HEATER),
        acquisition_mode: if bits.contains(ConfigBits::ACQUISITION_MODE) {
            AcquisitionMode::Combined
        } else {
            AcquisitionMode::Separate
        },
        battery_status: if bits.contains(ConfigBits::BATTERY_STATUS) {
            BatteryStatus::Low
        } else {
            BatteryStatus::Ok
        },
        temperature_resolution: if bits.contains(ConfigBits::TEMPERATURE_RESOLUTION) {
            TemperatureResolution::Bits11
        } else {
            TemperatureResolution::Bits14
        },
        humidity_resolution: match decode_humidity_resolution(&bits) {
            0b00 => HumidityResolution::Bits14,
            0b01 => HumidityResolution::Bits11,
            // 0b11 is reserved; the device treats it as 8-bit.
            _ => HumidityResolution::Bits8,
        },
    }
}

impl<I2C, D> Hdc1080<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    /// Probe the bus for the device, wait out the power-up window, then select
    /// separate acquisition mode with both channels at 14-bit resolution.
    ///
    /// Every other writable bit of the word written here equals its power-on
    /// default. Fails with [`Error::DeviceNotFound`] if nothing acknowledges
    /// the configured address.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.probe()?;
        // Only the serial-number and ID registers respond until the internal
        // oscillator and ADC have settled.
        self.delay.delay_ms(STARTUP_DELAY_MS);
        self.write_register(ptr::CONFIGURATION, ConfigBits::empty().bits())
    }

    /// Address-only presence check: an empty write that the device either
    /// acknowledges or NACKs.
    fn probe(&mut self) -> Result<(), Error<I2C::Error>> {
        match self.i2c.write(self.address, &[]) {
            Ok(()) => Ok(()),
            Err(e) => match e.kind() {
                ErrorKind::NoAcknowledge(_) => Err(Error::DeviceNotFound),
                _ => Err(Error::I2c(e)),
            },
        }
    }

    /// Read the temperature in degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_register(ptr::TEMPERATURE)?;
        Ok(raw_to_celsius(raw))
    }

    /// Read the relative humidity in percent.
    pub fn read_humidity(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_register(ptr::HUMIDITY)?;
        Ok(raw_to_relative_humidity(raw))
    }

    /// Read the configuration register raw bits. Reserved bits are retained.
    pub fn read_configuration_raw(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        let raw = self.read_register(ptr::CONFIGURATION)?;
        Ok(ConfigBits::from_bits_retain(raw))
    }

    /// Read the configuration register decoded into named fields.
    pub fn read_configuration(&mut self) -> Result<SensorConfig, Error<I2C::Error>> {
        let bits = self.read_configuration_raw()?;
        Ok(decode_configuration(bits))
    }

    /// Read the battery status bit from the configuration register.
    pub fn read_battery_status(&mut self) -> Result<BatteryStatus, Error<I2C::Error>> {
        let bits = self.read_configuration_raw()?;
        Ok(if bits.contains(ConfigBits::BATTERY_STATUS) {
            BatteryStatus::Low
        } else {
            BatteryStatus::Ok
        })
    }

    /// Enable or disable the on-chip heater, leaving all other bits unchanged.
    pub fn set_heater(&mut self, enabled: bool) -> Result<(), Error<I2C::Error>> {
        let value = if enabled { ConfigBits::HEATER.bits() } else { 0 };
        self.update_configuration(ConfigBits::HEATER.bits(), value)
    }

    /// Select the temperature conversion resolution (configuration bit 10).
    pub fn set_temperature_resolution(
        &mut self,
        resolution: TemperatureResolution,
    ) -> Result<(), Error<I2C::Error>> {
        let value = match resolution {
            TemperatureResolution::Bits14 => ConfigBits::empty(),
            TemperatureResolution::Bits11 => ConfigBits::TEMPERATURE_RESOLUTION,
        };
        self.update_configuration(ConfigBits::TEMPERATURE_RESOLUTION.bits(), value.bits())
    }

    /// Select the humidity conversion resolution (configuration bits 9-8).
    pub fn set_humidity_resolution(
        &mut self,
        resolution: HumidityResolution,
    ) -> Result<(), Error<I2C::Error>> {
        let value = match resolution {
            HumidityResolution::Bits14 => ConfigBits::empty(),
            HumidityResolution::Bits11 => ConfigBits::HUMIDITY_RESOLUTION_LSB,
            HumidityResolution::Bits8 => ConfigBits::HUMIDITY_RESOLUTION_MSB,
        };
        let mask = ConfigBits::HUMIDITY_RESOLUTION_MSB | ConfigBits::HUMIDITY_RESOLUTION_LSB;
        self.update_configuration(mask.bits(), value.bits())
    }

    /// Read the manufacturer ID register (0x5449 on genuine parts). The value
    /// is returned for caller-side validation, never enforced here.
    pub fn read_manufacturer_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register(ptr::MANUFACTURER_ID)
    }

    /// Read the device ID register (0x1050 on the HDC1080).
    pub fn read_device_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register(ptr::DEVICE_ID)
    }

    /// Read the factory-programmed serial number: three 16-bit segments
    /// concatenated big-endian.
    pub fn read_serial_number(&mut self) -> Result<u64, Error<I2C::Error>> {
        let high = self.read_register(ptr::SERIAL_ID_HIGH)? as u64;
        let mid = self.read_register(ptr::SERIAL_ID_MID)? as u64;
        let low = self.read_register(ptr::SERIAL_ID_LOW)? as u64;
        Ok((high << 32) | (mid << 16) | low)
    }

    /// Software reset: the one sanctioned blind configuration write. Waits out
    /// the settling window, then re-applies the [`init`](Self::init)
    /// configuration since the reset returns every writable bit to its
    /// power-on value.
    pub fn soft_reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(ptr::CONFIGURATION, ConfigBits::RESET.bits())?;
        self.delay.delay_ms(STARTUP_DELAY_MS);
        self.write_register(ptr::CONFIGURATION, ConfigBits::empty().bits())
    }

    /// Pointer write, conversion wait, two-byte big-endian read.
    fn read_register(&mut self, pointer: u8) -> Result<u16, Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[pointer])
            .map_err(Error::I2c)?;
        self.delay.delay_ms(MEASUREMENT_DELAY_MS);
        let mut buf = [0u8; 2];
        self.i2c.read(self.address, &mut buf).map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Three-byte register write: pointer, high byte, low byte.
    fn write_register(&mut self, pointer: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        let bytes = value.to_be_bytes();
        self.i2c
            .write(self.address, &[pointer, bytes[0], bytes[1]])
            .map_err(Error::I2c)
    }

    /// Update masked bits of the configuration word (read-modify-write).
    fn update_configuration(&mut self, mask: u16, value: u16) -> Result<(), Error<I2C::Error>> {
        let cur = self.read_register(ptr::CONFIGURATION)?;
        let new = (cur & !mask) | (value & mask);
        self.write_register(ptr::CONFIGURATION, new)
    }
}

#[cfg(feature = "async")]
impl<I2C, D> Hdc1080<I2C, D>
where
    I2C: embedded_hal_async::i2c::I2c,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Async version of [`init`](Self::init).
    pub async fn init_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.probe_async().await?;
        self.delay.delay_ms(STARTUP_DELAY_MS).await;
        self.write_register_async(ptr::CONFIGURATION, ConfigBits::empty().bits())
            .await
    }

    async fn probe_async(&mut self) -> Result<(), Error<I2C::Error>> {
        match self.i2c.write(self.address, &[]).await {
            Ok(()) => Ok(()),
            Err(e) => match e.kind() {
                ErrorKind::NoAcknowledge(_) => Err(Error::DeviceNotFound),
                _ => Err(Error::I2c(e)),
            },
        }
    }

    pub async fn read_temperature_async(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_register_async(ptr::TEMPERATURE).await?;
        Ok(raw_to_celsius(raw))
    }

    pub async fn read_humidity_async(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_register_async(ptr::HUMIDITY).await?;
        Ok(raw_to_relative_humidity(raw))
    }

    pub async fn read_configuration_raw_async(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        let raw = self.read_register_async(ptr::CONFIGURATION).await?;
        Ok(ConfigBits::from_bits_retain(raw))
    }

    pub async fn read_configuration_async(&mut self) -> Result<SensorConfig, Error<I2C::Error>> {
        let bits = self.read_configuration_raw_async().await?;
        Ok(decode_configuration(bits))
    }

    pub async fn read_battery_status_async(&mut self) -> Result<BatteryStatus, Error<I2C::Error>> {
        let bits = self.read_configuration_raw_async().await?;
        Ok(if bits.contains(ConfigBits::BATTERY_STATUS) {
            BatteryStatus::Low
        } else {
            BatteryStatus::Ok
        })
    }

    pub async fn set_heater_async(&mut self, enabled: bool) -> Result<(), Error<I2C::Error>> {
        let value = if enabled { ConfigBits::HEATER.bits() } else { 0 };
        self.update_configuration_async(ConfigBits::HEATER.bits(), value)
            .await
    }

    pub async fn set_temperature_resolution_async(
        &mut self,
        resolution: TemperatureResolution,
    ) -> Result<(), Error<I2C::Error>> {
        let value = match resolution {
            TemperatureResolution::Bits14 => ConfigBits::empty(),
            TemperatureResolution::Bits11 => ConfigBits::TEMPERATURE_RESOLUTION,
        };
        self.update_configuration_async(ConfigBits::TEMPERATURE_RESOLUTION.bits(), value.bits())
            .await
    }

    pub async fn set_humidity_resolution_async(
        &mut self,
        resolution: HumidityResolution,
    ) -> Result<(), Error<I2C::Error>> {
        let value = match resolution {
            HumidityResolution::Bits14 => ConfigBits::empty(),
            HumidityResolution::Bits11 => ConfigBits::HUMIDITY_RESOLUTION_LSB,
            HumidityResolution::Bits8 => ConfigBits::HUMIDITY_RESOLUTION_MSB,
        };
        let mask = ConfigBits::HUMIDITY_RESOLUTION_MSB | ConfigBits::HUMIDITY_RESOLUTION_LSB;
        self.update_configuration_async(mask.bits(), value.bits())
            .await
    }

    pub async fn read_manufacturer_id_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register_async(ptr::MANUFACTURER_ID).await
    }

    pub async fn read_device_id_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register_async(ptr::DEVICE_ID).await
    }

    pub async fn read_serial_number_async(&mut self) -> Result<u64, Error<I2C::Error>> {
        let high = self.read_register_async(ptr::SERIAL_ID_HIGH).await? as u64;
        let mid = self.read_register_async(ptr::SERIAL_ID_MID).await? as u64;
        let low = self.read_register_async(ptr::SERIAL_ID_LOW).await? as u64;
        Ok((high << 32) | (mid << 16) | low)
    }

    pub async fn soft_reset_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register_async(ptr::CONFIGURATION, ConfigBits::RESET.bits())
            .await?;
        self.delay.delay_ms(STARTUP_DELAY_MS).await;
        self.write_register_async(ptr::CONFIGURATION, ConfigBits::empty().bits())
            .await
    }

    async fn read_register_async(&mut self, pointer: u8) -> Result<u16, Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[pointer])
            .await
            .map_err(Error::I2c)?;
        self.delay.delay_ms(MEASUREMENT_DELAY_MS).await;
        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }

    async fn write_register_async(&mut self, pointer: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        let bytes = value.to_be_bytes();
        self.i2c
            .write(self.address, &[pointer, bytes[0], bytes[1]])
            .await
            .map_err(Error::I2c)
    }

    async fn update_configuration_async(&mut self, mask: u16, value: u16) -> Result<(), Error<I2C::Error>> {
        let cur = self.read_register_async(ptr::CONFIGURATION).await?;
        let new = (cur & !mask) | (value & mask);
        self.write_register_async(ptr::CONFIGURATION, new).await
    }
}
