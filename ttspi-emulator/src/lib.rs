#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Cycle-accurate model of the ttspi register peripheral.
//!
//! [`PeripheralEmulator`] advances one peripheral clock edge per [`tick`]. Serial lines
//! are brought into the peripheral clock domain by the [`sync`] module, frames are
//! assembled by [`capture`] and classified by [`evaluation`], and the output lines are
//! computed from the register file and the [`pwm`] generator.
//!
//! [`tick`]: PeripheralEmulator::tick

/// Frame capture state machine.
pub mod capture;
mod emulator;
/// Errors of the emulator.
pub mod error;
/// Frame outcomes.
pub mod evaluation;
/// Options of the emulator.
pub mod option;
/// PWM generator.
pub mod pwm;
/// Input synchronizer.
pub mod sync;

pub use emulator::PeripheralEmulator;
pub use error::EmulatorError;
pub use evaluation::Evaluation;
pub use option::EmulatorOption;
