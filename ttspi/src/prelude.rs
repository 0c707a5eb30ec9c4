pub use crate::{
    bench::Bench,
    controller::{ControllerOption, SpiController, Waveform},
    error::{ControllerError, RecordingError, TtspiError},
    recording::Record,
};

pub use ttspi_core::{
    common::{Freq, Hz, MHz, kHz},
    frame::{Frame, FrameError},
    pins::{Inputs, Outputs, Pins},
    register::{RegisterAddress, RegisterFile},
};

pub use ttspi_emulator::{
    EmulatorError, EmulatorOption, Evaluation, PeripheralEmulator,
    capture::CaptureState,
    sync::SyncOutput,
};
