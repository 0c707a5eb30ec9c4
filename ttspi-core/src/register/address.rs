use derive_more::Display;

use crate::{frame::FrameError, params::NUM_REGISTERS};

/// The address of an output register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[repr(u8)]
pub enum RegisterAddress {
    /// Enables the low byte of the outputs.
    #[display("OUT_LOW")]
    OutLow = 0x00,
    /// Enables the high byte of the outputs.
    #[display("OUT_HIGH")]
    OutHigh = 0x01,
    /// Routes the PWM signal to the low byte of the outputs.
    #[display("PWM_ENABLE_LOW")]
    PwmEnableLow = 0x02,
    /// Routes the PWM signal to the high byte of the outputs.
    #[display("PWM_ENABLE_HIGH")]
    PwmEnableHigh = 0x03,
    /// The duty cycle of the PWM signal.
    #[display("PWM_DUTY_CYCLE")]
    PwmDutyCycle = 0x04,
}

impl RegisterAddress {
    /// All registers in address order.
    pub const ALL: [RegisterAddress; NUM_REGISTERS] = [
        Self::OutLow,
        Self::OutHigh,
        Self::PwmEnableLow,
        Self::PwmEnableHigh,
        Self::PwmDutyCycle,
    ];

    /// Returns the register index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for RegisterAddress {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(FrameError::AddressOutOfRange(value))
    }
}

impl From<RegisterAddress> for u8 {
    fn from(value: RegisterAddress) -> Self {
        value as u8
    }
}
