use ttspi_core::{frame::Frame, params::FRAME_BITS};

use crate::{evaluation::Evaluation, sync::SyncOutput};

/// State of the frame capture logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    /// Select is not asserted.
    #[default]
    Idle,
    /// Select is asserted and `count` bits have been shifted in, most significant first.
    Capturing {
        /// Bits captured so far, aligned to the top of the frame.
        buffer: u16,
        /// Number of bits captured, always less than 16.
        count: u8,
    },
    /// A full frame has been captured and is checked on the next tick.
    Evaluate {
        /// The captured frame.
        buffer: u16,
    },
}

impl CaptureState {
    /// Returns the number of bits captured in the current frame.
    #[must_use]
    pub const fn count(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Capturing { count, .. } => *count,
            Self::Evaluate { .. } => FRAME_BITS,
        }
    }

    /// Returns the partially or fully captured frame.
    #[must_use]
    pub const fn buffer(&self) -> u16 {
        match self {
            Self::Idle => 0,
            Self::Capturing { buffer, .. } | Self::Evaluate { buffer } => *buffer,
        }
    }
}

/// Assembles 16-bit frames from synchronized serial clock edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCapture {
    state: CaptureState,
}

impl FrameCapture {
    /// Creates an idle capture.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CaptureState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Advances one tick.
    ///
    /// Returns the outcome of a frame when one ends on this tick, either because it
    /// is complete or because select was deasserted with bits already captured.
    /// An edge arriving on the tick a complete frame is evaluated is ignored.
    pub fn tick(&mut self, sync: &SyncOutput) -> Option<Evaluation> {
        let (next, evaluation) = match self.state {
            CaptureState::Evaluate { buffer } => (
                if sync.selected() {
                    CaptureState::Capturing {
                        buffer: 0,
                        count: 0,
                    }
                } else {
                    CaptureState::Idle
                },
                Some(Evaluation::from_frame(Frame::from_bits(buffer))),
            ),
            CaptureState::Capturing { count, .. } if !sync.selected() => (
                CaptureState::Idle,
                (count > 0).then_some(Evaluation::Abort { bits: count }),
            ),
            CaptureState::Idle if !sync.selected() => (CaptureState::Idle, None),
            state => (Self::shift(state.buffer(), state.count(), sync), None),
        };
        self.state = next;
        evaluation
    }

    fn shift(buffer: u16, count: u8, sync: &SyncOutput) -> CaptureState {
        if !sync.edge() {
            return CaptureState::Capturing { buffer, count };
        }
        let buffer = buffer | ((sync.copi() as u16) << (FRAME_BITS - 1 - count));
        let count = count + 1;
        if count == FRAME_BITS {
            CaptureState::Evaluate { buffer }
        } else {
            CaptureState::Capturing { buffer, count }
        }
    }

    /// Discards any partial frame.
    pub fn reset(&mut self) {
        self.state = CaptureState::Idle;
    }
}
