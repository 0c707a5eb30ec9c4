mod output;

use ttspi_core::{common::Freq, pins::Inputs, register::RegisterFile};

use crate::{
    capture::{CaptureState, FrameCapture},
    error::EmulatorError,
    evaluation::Evaluation,
    option::EmulatorOption,
    pwm::PwmGenerator,
    sync::{SyncOutput, Synchronizer},
};

/// Cycle-accurate model of the peripheral.
///
/// Every call to [`tick`] is one rising edge of the peripheral clock. On each tick the
/// serial lines pass through the [`Synchronizer`], the [`FrameCapture`] consumes the
/// synchronized edge and levels, and a finished frame is applied to the register file.
///
/// [`tick`]: PeripheralEmulator::tick
#[derive(Clone, Debug)]
pub struct PeripheralEmulator {
    sync: Synchronizer,
    last_sync: SyncOutput,
    capture: FrameCapture,
    regs: RegisterFile,
    pwm: PwmGenerator,
    clk_freq: Freq<u32>,
    ticks: u64,
}

impl PeripheralEmulator {
    /// Creates an emulator in the reset state.
    pub fn new(option: EmulatorOption) -> Result<Self, EmulatorError> {
        option.validate()?;
        Ok(Self {
            sync: Synchronizer::new(),
            last_sync: SyncOutput::default(),
            capture: FrameCapture::new(),
            regs: RegisterFile::new(),
            pwm: PwmGenerator::new(option.pwm_prescaler),
            clk_freq: option.clk_freq,
            ticks: 0,
        })
    }

    /// Advances one peripheral clock tick.
    ///
    /// Returns the outcome of the frame that ended on this tick, if any. A reset tick
    /// clears all state and returns `None`.
    pub fn tick(&mut self, inputs: impl Into<Inputs>) -> Option<Evaluation> {
        let inputs = inputs.into();
        self.ticks += 1;

        if inputs.reset {
            self.reset();
            return None;
        }

        self.last_sync = self.sync.tick(inputs.pins);
        let evaluation = self.capture.tick(&self.last_sync);
        if let Some(evaluation) = &evaluation {
            evaluation.apply(&mut self.regs);
        }
        self.pwm.tick();
        evaluation
    }

    /// Applies `inputs` for `n` ticks and returns every frame outcome in order.
    pub fn tick_n(&mut self, inputs: impl Into<Inputs>, n: usize) -> Vec<Evaluation> {
        let inputs = inputs.into();
        (0..n).filter_map(|_| self.tick(inputs)).collect()
    }

    fn reset(&mut self) {
        if self.capture.state().count() > 0 {
            tracing::trace!(
                "reset while capturing ({} bits discarded)",
                self.capture.state().count()
            );
        } else {
            tracing::trace!("reset");
        }
        self.sync.reset();
        self.last_sync = SyncOutput::default();
        self.capture.reset();
        self.regs.clear();
        self.pwm.reset();
    }

    /// Returns the register file.
    #[must_use]
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns the synchronized signals the capture logic consumed on the last tick.
    #[must_use]
    pub const fn sync_output(&self) -> SyncOutput {
        self.last_sync
    }

    /// Returns the input synchronizer.
    #[must_use]
    pub const fn synchronizer(&self) -> &Synchronizer {
        &self.sync
    }

    /// Returns the state of the frame capture logic.
    #[must_use]
    pub const fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// Returns the PWM generator.
    #[must_use]
    pub const fn pwm(&self) -> &PwmGenerator {
        &self.pwm
    }

    /// Returns the PWM frequency in Hz.
    #[must_use]
    pub fn pwm_freq(&self) -> f32 {
        self.pwm.freq(self.clk_freq)
    }

    /// Returns the peripheral clock frequency.
    #[must_use]
    pub const fn clk_freq(&self) -> Freq<u32> {
        self.clk_freq
    }

    /// Returns the number of ticks since the emulator was created. Reset does not clear it.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}
