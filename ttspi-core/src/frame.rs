use thiserror::Error;

use crate::{
    params::{ADDRESS_BITS, ADDRESS_FIELD_MAX, FRAME_BITS, MAX_REGISTER_ADDRESS},
    register::RegisterAddress,
};

/// One 16-bit frame as it appears on the data line, most significant bit first.
///
/// ```text
/// bit15       bits14..8            bits7..0
/// [write]     [address]            [data]
/// ```
#[bitfield_struct::bitfield(u16)]
#[derive(PartialEq, Eq, Hash)]
pub struct Frame {
    /// The payload byte.
    pub data: u8,
    /// The 7-bit register address.
    #[bits(7)]
    pub address: u8,
    /// The write-enable flag.
    pub write: bool,
}

/// Reasons a frame is not committed to the register file.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FrameError {
    /// The write-enable flag (bit 15) is cleared.
    #[error("Write flag is not set")]
    WriteFlagCleared,
    /// The address field names no register.
    #[error("Register address {0} is out of range [0, {max}]", max = MAX_REGISTER_ADDRESS)]
    AddressOutOfRange(u8),
    /// The value does not fit in the address field.
    #[error("Address {0} does not fit in {width} bits", width = ADDRESS_BITS)]
    AddressFieldOverflow(u8),
}

impl Frame {
    /// Creates a frame that writes `data` to `address`.
    #[must_use]
    pub const fn write_to(address: RegisterAddress, data: u8) -> Self {
        Self::new()
            .with_write(true)
            .with_address(address as u8)
            .with_data(data)
    }

    /// Creates a frame from raw field values.
    ///
    /// The address is only checked against the field width, so frames with an
    /// unmapped address or a cleared write flag can be built.
    pub const fn from_fields(write: bool, address: u8, data: u8) -> Result<Self, FrameError> {
        if address > ADDRESS_FIELD_MAX {
            return Err(FrameError::AddressFieldOverflow(address));
        }
        Ok(Self::new()
            .with_write(write)
            .with_address(address)
            .with_data(data))
    }

    /// Returns the bit at `idx`, where 0 is the least significant bit.
    #[must_use]
    pub const fn bit(&self, idx: u8) -> bool {
        (self.into_bits() >> idx) & 1 == 1
    }

    /// Returns the bits in the order they are sent on the wire.
    pub fn bits(&self) -> impl Iterator<Item = bool> + use<> {
        let frame = *self;
        (0..FRAME_BITS).rev().map(move |idx| frame.bit(idx))
    }

    /// Returns the register and payload this frame writes, or why it does not.
    pub fn target(&self) -> Result<(RegisterAddress, u8), FrameError> {
        if !self.write() {
            return Err(FrameError::WriteFlagCleared);
        }
        Ok((RegisterAddress::try_from(self.address())?, self.data()))
    }
}
