use thiserror::Error;

/// An error produced when building a [`PeripheralEmulator`].
///
/// [`PeripheralEmulator`]: crate::PeripheralEmulator
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum EmulatorError {
    /// The PWM prescaler is zero.
    #[error("PWM prescaler must not be zero")]
    ZeroPwmPrescaler,
    /// The peripheral clock frequency is zero.
    #[error("Peripheral clock frequency must not be zero")]
    ZeroClockFrequency,
}
