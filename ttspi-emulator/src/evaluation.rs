use derive_more::Display;
use ttspi_core::{
    frame::{Frame, FrameError},
    register::{RegisterAddress, RegisterFile},
};

/// The outcome of a captured frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Evaluation {
    /// A valid frame. `data` is written to `address`.
    #[display("commit {data:#04X} to {address}")]
    Commit {
        /// The target register.
        address: RegisterAddress,
        /// The payload byte.
        data: u8,
    },
    /// A complete frame that is discarded.
    #[display("reject {:#06X}: {reason}", frame.into_bits())]
    Reject {
        /// The discarded frame.
        frame: Frame,
        /// Why the frame is discarded.
        reason: FrameError,
    },
    /// Select was deasserted before the frame was complete.
    #[display("abort after {bits} bits")]
    Abort {
        /// The number of bits captured before the abort.
        bits: u8,
    },
}

impl Evaluation {
    /// Classifies a complete frame.
    #[must_use]
    pub fn from_frame(frame: Frame) -> Self {
        match frame.target() {
            Ok((address, data)) => Self::Commit { address, data },
            Err(reason) => Self::Reject { frame, reason },
        }
    }

    /// Returns `true` for [`Evaluation::Commit`].
    #[must_use]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::Commit { .. })
    }

    /// Applies the outcome to `regs`. Only a commit writes, and it writes one register.
    pub fn apply(&self, regs: &mut RegisterFile) {
        match *self {
            Self::Commit { address, data } => {
                tracing::debug!("{}", self);
                regs.set(address, data);
            }
            Self::Reject { .. } | Self::Abort { .. } => {
                tracing::trace!("{}", self);
            }
        }
    }
}
