use ttspi_core::pins::Outputs;

use super::PeripheralEmulator;

impl PeripheralEmulator {
    /// Returns the PWM level for the current duty cycle register.
    #[must_use]
    pub const fn pwm_signal(&self) -> bool {
        self.pwm.signal(self.regs.pwm_duty_cycle())
    }

    /// Returns the 16 output lines.
    ///
    /// A line is low unless its output enable bit is set. An enabled line follows
    /// the PWM signal if its PWM enable bit is set and is high otherwise.
    #[must_use]
    pub const fn outputs(&self) -> Outputs {
        let pwm = if self.pwm_signal() { 0xFFFF } else { 0x0000 };
        let enable = self.regs.output_enable();
        let pwm_enable = self.regs.pwm_enable();
        Outputs::from_bits(enable & (!pwm_enable | pwm))
    }
}
