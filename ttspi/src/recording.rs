use getset::{CopyGetters, Getters};
use ttspi_core::{common::Freq, pins::Outputs};

pub(crate) struct RawRecord {
    pub outputs: Vec<Outputs>,
    pub start: u64,
}

/// The output lines sampled after every tick of a recording.
#[derive(Clone, Debug, PartialEq, Eq, Getters, CopyGetters)]
pub struct Record {
    #[getset(get = "pub")]
    /// One sample per tick.
    pub(crate) outputs: Vec<Outputs>,
    #[getset(get_copy = "pub")]
    /// The tick count of the emulator when the recording started.
    pub(crate) start: u64,
    #[getset(get_copy = "pub")]
    /// The peripheral clock frequency.
    pub(crate) clk_freq: Freq<u32>,
}

impl Record {
    pub(crate) fn new(raw: RawRecord, clk_freq: Freq<u32>) -> Self {
        Self {
            outputs: raw.outputs,
            start: raw.start,
            clk_freq,
        }
    }

    /// Returns the level of line `idx` for each recorded tick.
    pub fn line(&self, idx: usize) -> impl Iterator<Item = bool> + '_ {
        self.outputs.iter().map(move |o| o.bit(idx))
    }

    /// Returns the sample indices at which line `idx` goes from low to high.
    #[must_use]
    pub fn rising_edges(&self, idx: usize) -> Vec<usize> {
        self.edges(idx, false)
    }

    /// Returns the sample indices at which line `idx` goes from high to low.
    #[must_use]
    pub fn falling_edges(&self, idx: usize) -> Vec<usize> {
        self.edges(idx, true)
    }

    fn edges(&self, idx: usize, from: bool) -> Vec<usize> {
        self.outputs
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[0].bit(idx) == from && w[1].bit(idx) != from)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Returns the frequency of line `idx` in Hz, measured between its first two rising edges.
    ///
    /// Returns `None` if the line rises less than twice.
    #[must_use]
    pub fn frequency(&self, idx: usize) -> Option<f32> {
        match self.rising_edges(idx)[..] {
            [first, second, ..] => Some(self.clk_freq.hz() as f32 / (second - first) as f32),
            _ => None,
        }
    }

    /// Returns the fraction of time line `idx` is high.
    ///
    /// The fraction is taken over the last complete period between two rising edges.
    /// A line that never changes is high for all or none of the record. Returns `None`
    /// if the record is empty or the line changes without completing a period.
    #[must_use]
    pub fn duty_cycle(&self, idx: usize) -> Option<f32> {
        let first = self.outputs.first()?.bit(idx);
        if self.line(idx).all(|b| b == first) {
            return Some(if first { 1.0 } else { 0.0 });
        }
        match self.rising_edges(idx)[..] {
            [.., start, end] => {
                let high = self.outputs[start..end]
                    .iter()
                    .filter(|o| o.bit(idx))
                    .count();
                Some(high as f32 / (end - start) as f32)
            }
            _ => None,
        }
    }
}
