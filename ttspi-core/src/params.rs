/// The number of bits in one frame.
pub const FRAME_BITS: u8 = 16;
/// The width of the register address field.
pub const ADDRESS_BITS: u8 = 7;
/// The largest value the address field can carry.
pub const ADDRESS_FIELD_MAX: u8 = (1 << ADDRESS_BITS) - 1;

/// The number of output registers.
pub const NUM_REGISTERS: usize = 5;
/// The highest valid register address.
pub const MAX_REGISTER_ADDRESS: u8 = NUM_REGISTERS as u8 - 1;

/// The number of stages a level has to pass before it is used by the decoder.
pub const SYNC_STAGES: usize = 2;
/// The number of stages of the serial clock pipeline, including the edge detector stage.
pub const SCLK_SYNC_STAGES: usize = SYNC_STAGES + 1;

/// The number of peripheral clock ticks per step of the PWM counter.
pub const PWM_PRESCALER_DEFAULT: u16 = 13;
/// The number of steps in one PWM period.
pub const PWM_STEPS: u32 = 256;
/// The duty value that keeps the PWM output high for the whole period.
pub const PWM_DUTY_ALWAYS_ON: u8 = 0xFF;

#[doc(hidden)]
pub const UI_IN_SCLK_BIT: u8 = 0;
#[doc(hidden)]
pub const UI_IN_COPI_BIT: u8 = 1;
#[doc(hidden)]
pub const UI_IN_NCS_BIT: u8 = 2;

/// The value of the output-enable bus of the bidirectional pins.
pub const UIO_OE: u8 = 0xFF;
