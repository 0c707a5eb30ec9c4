use derive_more::Deref;
use getset::CopyGetters;
use ttspi_core::{
    common::{DEFAULT_SCLK_FREQ, Freq, Hz},
    frame::Frame,
    params::FRAME_BITS,
    pins::Pins,
};

use crate::error::ControllerError;

/// A option for [`SpiController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerOption {
    /// The serial clock frequency. The default is 100 kHz.
    pub sclk_freq: Freq<u32>,
    /// The number of ticks select is held low before the first bit. The default is 1.
    pub select_setup_ticks: usize,
    /// The number of ticks the bus is held idle after the last bit. The default is 600.
    pub select_hold_ticks: usize,
}

impl Default for ControllerOption {
    fn default() -> Self {
        Self {
            sclk_freq: DEFAULT_SCLK_FREQ,
            select_setup_ticks: 1,
            select_hold_ticks: 600,
        }
    }
}

/// Pin levels for consecutive ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct Waveform(Vec<Pins>);

impl Waveform {
    fn hold(&mut self, pins: Pins, ticks: usize) {
        self.0.extend(std::iter::repeat_n(pins, ticks));
    }

    /// Returns the levels as a sequence of `ui_in` values.
    #[must_use]
    pub fn ui_in(&self) -> Vec<u8> {
        self.0.iter().map(Pins::ui_in).collect()
    }
}

impl FromIterator<Pins> for Waveform {
    fn from_iter<T: IntoIterator<Item = Pins>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Generates the pin waveforms of an SPI controller writing frames to the peripheral.
///
/// Data changes while the serial clock is low and is held while it is high, so the
/// peripheral samples it on the rising edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
pub struct SpiController {
    #[getset(get_copy = "pub")]
    /// Half a serial clock period in peripheral clock ticks.
    half_period: usize,
    #[getset(get_copy = "pub")]
    /// The option this controller was created with.
    option: ControllerOption,
}

impl SpiController {
    /// Creates a controller for a peripheral clocked at `clk_freq`.
    pub fn new(clk_freq: Freq<u32>, option: ControllerOption) -> Result<Self, ControllerError> {
        let half_period = option
            .sclk_freq
            .hz()
            .checked_mul(2)
            .and_then(|f| clk_freq.ticks_per_period(f * Hz))
            .filter(|&t| t > 0)
            .ok_or(ControllerError::SerialClockTooFast {
                sclk_freq: option.sclk_freq,
                clk_freq,
            })?;
        Ok(Self {
            half_period: half_period as usize,
            option,
        })
    }

    /// Returns the number of ticks a single frame occupies, including setup and hold.
    #[must_use]
    pub const fn frame_ticks(&self) -> usize {
        self.option.select_setup_ticks
            + FRAME_BITS as usize * 2 * self.half_period
            + self.option.select_hold_ticks
    }

    fn begin(&self) -> Waveform {
        let mut waveform = Waveform::default();
        waveform.hold(
            Pins {
                sclk: false,
                ncs: false,
                copi: false,
            },
            self.option.select_setup_ticks,
        );
        waveform
    }

    fn bit(&self, waveform: &mut Waveform, copi: bool) {
        waveform.hold(
            Pins {
                sclk: false,
                ncs: false,
                copi,
            },
            self.half_period,
        );
        waveform.hold(
            Pins {
                sclk: true,
                ncs: false,
                copi,
            },
            self.half_period,
        );
    }

    fn end(&self, waveform: &mut Waveform) {
        waveform.hold(Pins::IDLE, self.option.select_hold_ticks);
    }

    /// Returns the waveform of one select assertion carrying `frame`.
    #[must_use]
    pub fn frame(&self, frame: Frame) -> Waveform {
        self.burst(&[frame])
    }

    /// Returns the waveform of a frame built from raw fields.
    ///
    /// `address` must fit in the 7-bit address field; values above the register
    /// map are allowed and are discarded by the peripheral.
    pub fn transaction(
        &self,
        write: bool,
        address: u8,
        data: u8,
    ) -> Result<Waveform, ControllerError> {
        let frame = Frame::from_fields(write, address, data)
            .map_err(|_| ControllerError::AddressOutOfRange(address))?;
        Ok(self.frame(frame))
    }

    /// Returns the waveform of the first `bits` bits of `frame` followed by select deassertion.
    pub fn truncated(&self, frame: Frame, bits: u8) -> Result<Waveform, ControllerError> {
        if bits >= FRAME_BITS {
            return Err(ControllerError::InvalidTruncation(bits));
        }
        let mut waveform = self.begin();
        frame
            .bits()
            .take(bits as usize)
            .for_each(|copi| self.bit(&mut waveform, copi));
        self.end(&mut waveform);
        Ok(waveform)
    }

    /// Returns the waveform of several frames sent under one select assertion.
    #[must_use]
    pub fn burst(&self, frames: &[Frame]) -> Waveform {
        let mut waveform = self.begin();
        frames
            .iter()
            .flat_map(Frame::bits)
            .for_each(|copi| self.bit(&mut waveform, copi));
        self.end(&mut waveform);
        waveform
    }
}
