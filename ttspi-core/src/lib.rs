#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types of the ttspi register peripheral.
//!
//! The peripheral receives fixed 16-bit frames over a write-only SPI-like link
//! and stores the payload byte in one of five output registers.
//! This crate holds the types shared by the cycle model and the test-bench side:
//! the wire [`Frame`](frame::Frame), the register map, and the pin bundles.

/// Common constants and units.
pub mod common;
/// The 16-bit wire frame.
pub mod frame;
/// Constants of the peripheral.
pub mod params;
/// Pin-level inputs and outputs.
pub mod pins;
/// The register map.
pub mod register;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        common::{Freq, Hz, MHz, kHz},
        frame::{Frame, FrameError},
        pins::{Inputs, Outputs, Pins},
        register::{RegisterAddress, RegisterFile},
    };
}
