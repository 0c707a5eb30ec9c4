#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Test bench for the ttspi register peripheral.
//!
//! A [`Bench`] drives a [`PeripheralEmulator`](ttspi_emulator::PeripheralEmulator)
//! with the pin waveforms an [`SpiController`](controller::SpiController) generates,
//! and can record the output lines to measure the PWM frequency and duty cycle.

/// Bench combining the peripheral and a controller.
pub mod bench;
/// SPI controller waveform generator.
pub mod controller;
/// Errors of this crate.
pub mod error;
/// Commonly used types.
pub mod prelude;
/// Output recording and measurements.
pub mod recording;

pub use ttspi_emulator as emulator;

pub use bench::Bench;
