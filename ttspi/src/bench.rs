use derive_more::Deref;
use ttspi_core::{
    frame::Frame,
    pins::{Inputs, Pins},
    register::RegisterAddress,
};
use ttspi_emulator::{EmulatorOption, Evaluation, PeripheralEmulator};

use crate::{
    controller::{ControllerOption, SpiController, Waveform},
    error::{RecordingError, TtspiError},
    recording::{RawRecord, Record},
};

/// A peripheral driven by an SPI controller.
///
/// Dereferences to the [`PeripheralEmulator`] so the registers and outputs can be
/// inspected directly. All ticks go through the bench so that they can be recorded.
#[derive(Deref)]
pub struct Bench {
    #[deref]
    emulator: PeripheralEmulator,
    controller: SpiController,
    record: Option<RawRecord>,
}

impl Bench {
    /// Creates a bench with a freshly reset peripheral.
    pub fn new(
        emulator_option: EmulatorOption,
        controller_option: ControllerOption,
    ) -> Result<Self, TtspiError> {
        let emulator = PeripheralEmulator::new(emulator_option)?;
        let controller = SpiController::new(emulator.clk_freq(), controller_option)?;
        Ok(Self {
            emulator,
            controller,
            record: None,
        })
    }

    /// Returns the controller generating the waveforms.
    #[must_use]
    pub const fn controller(&self) -> &SpiController {
        &self.controller
    }

    /// Advances one tick.
    pub fn step(&mut self, inputs: impl Into<Inputs>) -> Option<Evaluation> {
        let evaluation = self.emulator.tick(inputs);
        if let Some(record) = &mut self.record {
            record.outputs.push(self.emulator.outputs());
        }
        evaluation
    }

    /// Holds reset asserted with an idle bus for `ticks` ticks.
    pub fn reset(&mut self, ticks: usize) {
        tracing::debug!("reset for {} ticks", ticks);
        (0..ticks).for_each(|_| {
            self.step(Inputs::reset());
        });
    }

    /// Holds the bus idle for `ticks` ticks.
    pub fn idle(&mut self, ticks: usize) -> Vec<Evaluation> {
        (0..ticks).filter_map(|_| self.step(Pins::IDLE)).collect()
    }

    /// Plays `waveform` and returns the outcomes of the frames that ended during it.
    pub fn run(&mut self, waveform: &Waveform) -> Vec<Evaluation> {
        waveform.iter().filter_map(|&pins| self.step(pins)).collect()
    }

    /// Sends one frame.
    pub fn send_frame(&mut self, frame: Frame) -> Vec<Evaluation> {
        tracing::debug!("send frame {:#06X}", frame.into_bits());
        let waveform = self.controller.frame(frame);
        self.run(&waveform)
    }

    /// Writes `data` to `address`.
    pub fn write(&mut self, address: RegisterAddress, data: u8) -> Vec<Evaluation> {
        self.send_frame(Frame::write_to(address, data))
    }

    /// Sends a frame built from raw fields. `address` must be at most 127.
    pub fn transaction(
        &mut self,
        write: bool,
        address: u8,
        data: u8,
    ) -> Result<Vec<Evaluation>, TtspiError> {
        tracing::debug!(
            "send transaction (write: {}, address: {:#04X}, data: {:#04X})",
            write,
            address,
            data
        );
        let waveform = self.controller.transaction(write, address, data)?;
        Ok(self.run(&waveform))
    }

    /// Sends the first `bits` bits of `frame` and then deasserts select.
    pub fn send_truncated(
        &mut self,
        frame: Frame,
        bits: u8,
    ) -> Result<Vec<Evaluation>, TtspiError> {
        tracing::debug!("send {} bits of frame {:#06X}", bits, frame.into_bits());
        let waveform = self.controller.truncated(frame, bits)?;
        Ok(self.run(&waveform))
    }

    /// Sends `frames` under one select assertion.
    pub fn send_burst(&mut self, frames: &[Frame]) -> Vec<Evaluation> {
        tracing::debug!("send burst of {} frames", frames.len());
        let waveform = self.controller.burst(frames);
        self.run(&waveform)
    }

    /// Starts recording the output lines after every tick.
    pub fn start_recording(&mut self) -> Result<(), RecordingError> {
        if self.record.is_some() {
            return Err(RecordingError::AlreadyStarted);
        }
        self.record = Some(RawRecord {
            outputs: Vec::new(),
            start: self.emulator.ticks(),
        });
        Ok(())
    }

    /// Stops recording and returns what was recorded.
    pub fn finish_recording(&mut self) -> Result<Record, RecordingError> {
        let raw = self.record.take().ok_or(RecordingError::NotStarted)?;
        Ok(Record::new(raw, self.emulator.clk_freq()))
    }
}
