use getset::CopyGetters;
use ttspi_core::{
    common::Freq,
    params::{PWM_DUTY_ALWAYS_ON, PWM_STEPS},
};

/// Free-running 8-bit PWM counter behind a prescaler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
pub struct PwmGenerator {
    #[getset(get_copy = "pub")]
    /// The number of ticks per counter step.
    prescaler: u16,
    #[getset(get_copy = "pub")]
    /// Ticks elapsed in the current counter step.
    prescale_count: u16,
    #[getset(get_copy = "pub")]
    /// The PWM counter.
    counter: u8,
}

impl PwmGenerator {
    /// Creates a generator. `prescaler` must not be zero.
    #[must_use]
    pub(crate) const fn new(prescaler: u16) -> Self {
        Self {
            prescaler,
            prescale_count: 0,
            counter: 0,
        }
    }

    /// Advances one tick.
    pub fn tick(&mut self) {
        self.prescale_count += 1;
        if self.prescale_count == self.prescaler {
            self.prescale_count = 0;
            self.counter = self.counter.wrapping_add(1);
        }
    }

    /// Returns the PWM level for `duty`.
    ///
    /// `0x00` keeps the signal low and `0xFF` keeps it high for the whole period.
    #[must_use]
    pub const fn signal(&self, duty: u8) -> bool {
        duty == PWM_DUTY_ALWAYS_ON || self.counter < duty
    }

    /// Returns the number of ticks in one PWM period.
    #[must_use]
    pub const fn period_ticks(&self) -> u32 {
        PWM_STEPS * self.prescaler as u32
    }

    /// Returns the PWM frequency for a peripheral clock of `clk_freq`.
    #[must_use]
    pub fn freq(&self, clk_freq: Freq<u32>) -> f32 {
        clk_freq.hz() as f32 / self.period_ticks() as f32
    }

    /// Clears both counters.
    pub fn reset(&mut self) {
        self.prescale_count = 0;
        self.counter = 0;
    }
}
