use crate::params::NUM_REGISTERS;

use super::RegisterAddress;

/// The five 8-bit output registers.
///
/// All registers are zero after reset and change only when a valid frame is committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all registers cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Creates a register file from raw values in address order.
    #[must_use]
    pub const fn from_values(regs: [u8; NUM_REGISTERS]) -> Self {
        Self { regs }
    }

    /// Returns the value of `addr`.
    #[must_use]
    pub const fn get(&self, addr: RegisterAddress) -> u8 {
        self.regs[addr.index()]
    }

    /// Writes `value` to `addr`, leaving the other registers untouched.
    pub const fn set(&mut self, addr: RegisterAddress, value: u8) {
        self.regs[addr.index()] = value;
    }

    /// Clears all registers.
    pub const fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Returns all values in address order.
    #[must_use]
    pub const fn values(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// `OUT_LOW`
    #[must_use]
    pub const fn out_low(&self) -> u8 {
        self.get(RegisterAddress::OutLow)
    }

    /// `OUT_HIGH`
    #[must_use]
    pub const fn out_high(&self) -> u8 {
        self.get(RegisterAddress::OutHigh)
    }

    /// `PWM_ENABLE_LOW`
    #[must_use]
    pub const fn pwm_enable_low(&self) -> u8 {
        self.get(RegisterAddress::PwmEnableLow)
    }

    /// `PWM_ENABLE_HIGH`
    #[must_use]
    pub const fn pwm_enable_high(&self) -> u8 {
        self.get(RegisterAddress::PwmEnableHigh)
    }

    /// `PWM_DUTY_CYCLE`
    #[must_use]
    pub const fn pwm_duty_cycle(&self) -> u8 {
        self.get(RegisterAddress::PwmDutyCycle)
    }

    /// Returns the 16-bit output enable mask, `OUT_HIGH:OUT_LOW`.
    #[must_use]
    pub const fn output_enable(&self) -> u16 {
        u16::from_le_bytes([self.out_low(), self.out_high()])
    }

    /// Returns the 16-bit PWM routing mask, `PWM_ENABLE_HIGH:PWM_ENABLE_LOW`.
    #[must_use]
    pub const fn pwm_enable(&self) -> u16 {
        u16::from_le_bytes([self.pwm_enable_low(), self.pwm_enable_high()])
    }
}
