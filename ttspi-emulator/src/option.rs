use ttspi_core::{
    common::{DEFAULT_CLK_FREQ, Freq},
    params::PWM_PRESCALER_DEFAULT,
};

use crate::error::EmulatorError;

/// A option for [`PeripheralEmulator`].
///
/// [`PeripheralEmulator`]: crate::PeripheralEmulator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmulatorOption {
    /// The frequency of the peripheral clock. Each tick is one period of this clock. The default is 10 MHz.
    pub clk_freq: Freq<u32>,
    /// The number of peripheral clock ticks per step of the PWM counter. The default is 13, which gives a PWM frequency of about 3 kHz at 10 MHz.
    pub pwm_prescaler: u16,
}

impl Default for EmulatorOption {
    fn default() -> Self {
        Self {
            clk_freq: DEFAULT_CLK_FREQ,
            pwm_prescaler: PWM_PRESCALER_DEFAULT,
        }
    }
}

impl EmulatorOption {
    pub(crate) fn validate(&self) -> Result<(), EmulatorError> {
        if self.clk_freq.hz() == 0 {
            return Err(EmulatorError::ZeroClockFrequency);
        }
        if self.pwm_prescaler == 0 {
            return Err(EmulatorError::ZeroPwmPrescaler);
        }
        Ok(())
    }
}
