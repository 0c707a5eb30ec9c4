use getset::CopyGetters;
use ttspi_core::{
    params::{SCLK_SYNC_STAGES, SYNC_STAGES},
    pins::Pins,
};

/// A chain of `N` flip-flops sampling one asynchronous line.
///
/// Stage 0 holds the most recent sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncPipeline<const N: usize> {
    stages: [bool; N],
    reset_level: bool,
}

impl<const N: usize> SyncPipeline<N> {
    /// Creates a pipeline with every stage at `reset_level`.
    #[must_use]
    pub const fn new(reset_level: bool) -> Self {
        Self {
            stages: [reset_level; N],
            reset_level,
        }
    }

    /// Shifts `sample` into stage 0 and drops the oldest stage.
    pub fn shift(&mut self, sample: bool) {
        self.stages.copy_within(0..N - 1, 1);
        self.stages[0] = sample;
    }

    /// Returns stage `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= N`.
    #[must_use]
    pub const fn stage(&self, idx: usize) -> bool {
        self.stages[idx]
    }

    /// Returns all stages, most recent first.
    #[must_use]
    pub const fn stages(&self) -> &[bool; N] {
        &self.stages
    }

    /// Returns every stage to the reset level.
    pub fn reset(&mut self) {
        self.stages = [self.reset_level; N];
    }
}

/// What the capture logic sees of the serial lines on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SyncOutput {
    /// `true` for exactly one tick per rising transition of the serial clock.
    edge: bool,
    /// Synchronized serial clock level.
    sclk: bool,
    /// Synchronized chip select, `true` while asserted.
    selected: bool,
    /// Synchronized data level.
    copi: bool,
}

impl SyncOutput {
    #[doc(hidden)]
    #[must_use]
    pub const fn new(edge: bool, sclk: bool, selected: bool, copi: bool) -> Self {
        Self {
            edge,
            sclk,
            selected,
            copi,
        }
    }
}

/// Brings the three serial lines into the peripheral clock domain.
///
/// Select and data levels reach the capture logic exactly [`SYNC_STAGES`] ticks after
/// they change on the pins. The serial clock runs through one extra stage so that a
/// rising edge is seen as `stage[SYNC_STAGES - 1] && !stage[SYNC_STAGES]`, which
/// also fires [`SYNC_STAGES`] ticks after the pin rises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Synchronizer {
    sclk: SyncPipeline<SCLK_SYNC_STAGES>,
    ncs: SyncPipeline<SYNC_STAGES>,
    copi: SyncPipeline<SYNC_STAGES>,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synchronizer {
    /// Creates a synchronizer holding the idle bus levels.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sclk: SyncPipeline::new(Pins::IDLE.sclk),
            ncs: SyncPipeline::new(Pins::IDLE.ncs),
            copi: SyncPipeline::new(Pins::IDLE.copi),
        }
    }

    /// Returns the outputs for the current tick, before the new samples are taken.
    #[must_use]
    pub const fn output(&self) -> SyncOutput {
        let sclk = self.sclk.stage(SYNC_STAGES - 1);
        SyncOutput {
            edge: sclk && !self.sclk.stage(SYNC_STAGES),
            sclk,
            selected: !self.ncs.stage(SYNC_STAGES - 1),
            copi: self.copi.stage(SYNC_STAGES - 1),
        }
    }

    /// Advances one tick, sampling `pins`, and returns the outputs valid on this tick.
    pub fn tick(&mut self, pins: Pins) -> SyncOutput {
        let output = self.output();
        self.sclk.shift(pins.sclk);
        self.ncs.shift(pins.ncs);
        self.copi.shift(pins.copi);
        output
    }

    /// Returns every pipeline to the idle bus levels.
    pub fn reset(&mut self) {
        self.sclk.reset();
        self.ncs.reset();
        self.copi.reset();
    }
}
