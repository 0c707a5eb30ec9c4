use crate::params::{UI_IN_COPI_BIT, UI_IN_NCS_BIT, UI_IN_SCLK_BIT, UIO_OE};

/// Raw levels of the three serial lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pins {
    /// Serial clock.
    pub sclk: bool,
    /// Chip select, active low.
    pub ncs: bool,
    /// Controller-out peripheral-in data.
    pub copi: bool,
}

impl Pins {
    /// Lines of an idle bus: clock low, select deasserted, data low.
    pub const IDLE: Pins = Pins {
        sclk: false,
        ncs: true,
        copi: false,
    };

    /// Extracts the serial lines from the dedicated input bus.
    #[must_use]
    pub const fn from_ui_in(ui_in: u8) -> Self {
        Self {
            sclk: (ui_in >> UI_IN_SCLK_BIT) & 1 == 1,
            ncs: (ui_in >> UI_IN_NCS_BIT) & 1 == 1,
            copi: (ui_in >> UI_IN_COPI_BIT) & 1 == 1,
        }
    }

    /// Packs the serial lines into the dedicated input bus. Unused bits are zero.
    #[must_use]
    pub const fn ui_in(&self) -> u8 {
        ((self.sclk as u8) << UI_IN_SCLK_BIT)
            | ((self.copi as u8) << UI_IN_COPI_BIT)
            | ((self.ncs as u8) << UI_IN_NCS_BIT)
    }

    /// Returns `true` if chip select is asserted.
    #[must_use]
    pub const fn selected(&self) -> bool {
        !self.ncs
    }
}

impl Default for Pins {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Everything the peripheral samples on one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inputs {
    /// The serial lines.
    pub pins: Pins,
    /// Synchronous reset, active high.
    pub reset: bool,
}

impl Inputs {
    /// Inputs with the reset deasserted.
    #[must_use]
    pub const fn new(pins: Pins) -> Self {
        Self { pins, reset: false }
    }

    /// Inputs with the reset asserted and an idle bus.
    #[must_use]
    pub const fn reset() -> Self {
        Self {
            pins: Pins::IDLE,
            reset: true,
        }
    }

    /// Builds inputs from the dedicated input bus and the active-low reset pin.
    #[must_use]
    pub const fn from_rst_n(ui_in: u8, rst_n: bool) -> Self {
        Self {
            pins: Pins::from_ui_in(ui_in),
            reset: !rst_n,
        }
    }
}

impl From<Pins> for Inputs {
    fn from(pins: Pins) -> Self {
        Self::new(pins)
    }
}

/// The 16 output lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outputs {
    /// Lines 0 to 7.
    pub uo_out: u8,
    /// Lines 8 to 15.
    pub uio_out: u8,
}

impl Outputs {
    /// Creates outputs from the 16-bit line vector.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        let [uo_out, uio_out] = bits.to_le_bytes();
        Self { uo_out, uio_out }
    }

    /// Returns all lines as one 16-bit value, line 0 in the least significant bit.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        u16::from_le_bytes([self.uo_out, self.uio_out])
    }

    /// Returns the level of line `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 16 or more.
    #[must_use]
    pub const fn bit(&self, idx: usize) -> bool {
        assert!(idx < 16);
        (self.bits() >> idx) & 1 == 1
    }

    /// The output-enable bus of the bidirectional pins, which are always driven.
    #[must_use]
    pub const fn uio_oe(&self) -> u8 {
        UIO_OE
    }
}
