//! HDC1080 Rust Driver
//!
//! Driver for the TI HDC1080 temperature and humidity sensor, with no-std,
//! optional async, defmt support, and type-safe access to the configuration
//! register.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use driver::Hdc1080;
pub use error::Error;
pub use registers::DEFAULT_I2C_ADDRESS;
