mod freq;

pub use freq::*;

/// The peripheral clock frequency the design is built for.
pub const DEFAULT_CLK_FREQ: Freq<u32> = Freq { freq: 10_000_000 };

/// The serial clock frequency used by the reference test bench.
pub const DEFAULT_SCLK_FREQ: Freq<u32> = Freq { freq: 100_000 };
