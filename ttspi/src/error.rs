use thiserror::Error;
use ttspi_core::{common::Freq, frame::FrameError, params::FRAME_BITS};
use ttspi_emulator::EmulatorError;

/// An error produced when generating a controller waveform.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ControllerError {
    /// Half a serial clock period is shorter than one peripheral clock tick.
    #[error("Serial clock ({sclk_freq:?}) is too fast for peripheral clock ({clk_freq:?})")]
    SerialClockTooFast {
        /// The requested serial clock frequency.
        sclk_freq: Freq<u32>,
        /// The peripheral clock frequency.
        clk_freq: Freq<u32>,
    },
    /// The address does not fit in the 7-bit address field.
    #[error("Address ({0}) must be in range [0, 127]")]
    AddressOutOfRange(u8),
    /// A truncated frame must be shorter than a full frame.
    #[error("Truncated frame must have less than {max} bits, but {0} bits are requested", max = FRAME_BITS)]
    InvalidTruncation(u8),
}

/// An error produced by recording.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RecordingError {
    /// [`Bench::start_recording`] was called twice.
    ///
    /// [`Bench::start_recording`]: crate::Bench::start_recording
    #[error("Recording is already started")]
    AlreadyStarted,
    /// [`Bench::finish_recording`] was called without a recording.
    ///
    /// [`Bench::finish_recording`]: crate::Bench::finish_recording
    #[error("Recording is not started")]
    NotStarted,
}

/// An error of this crate.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TtspiError {
    /// See [`EmulatorError`].
    #[error(transparent)]
    Emulator(#[from] EmulatorError),
    /// See [`ControllerError`].
    #[error(transparent)]
    Controller(#[from] ControllerError),
    /// See [`RecordingError`].
    #[error(transparent)]
    Recording(#[from] RecordingError),
    /// See [`FrameError`].
    #[error(transparent)]
    Frame(#[from] FrameError),
}
