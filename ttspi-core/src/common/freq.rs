/// \[Hz\]
pub struct Hz;

/// \[kHz\]
#[allow(non_camel_case_types)]
pub struct kHz;

/// \[MHz\]
pub struct MHz;

/// Frequency
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd)]
pub struct Freq<T: Copy> {
    pub(crate) freq: T,
}

impl<T: Copy> core::fmt::Debug for Freq<T>
where
    T: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.freq)
    }
}

impl<T: Copy> Freq<T> {
    #[inline]
    /// Returns the frequency in Hz.
    pub const fn hz(&self) -> T {
        self.freq
    }
}

impl Freq<u32> {
    /// Returns the number of ticks of this clock in one period of `other`.
    ///
    /// Returns `None` if `other` is zero.
    #[must_use]
    pub const fn ticks_per_period(&self, other: Freq<u32>) -> Option<u32> {
        match other.freq {
            0 => None,
            f => Some(self.freq / f),
        }
    }
}

impl<T> core::ops::Mul<T> for Freq<T>
where
    T: core::ops::Mul<Output = T> + Copy,
{
    type Output = Freq<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Freq {
            freq: self.freq * rhs,
        }
    }
}

impl<T> core::ops::Div<T> for Freq<T>
where
    T: core::ops::Div<Output = T> + Copy,
{
    type Output = Freq<T>;

    fn div(self, rhs: T) -> Self::Output {
        Freq {
            freq: self.freq / rhs,
        }
    }
}

impl core::ops::Mul<Hz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<kHz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Self::Output { freq: self * 1000 }
    }
}

impl core::ops::Mul<MHz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: MHz) -> Self::Output {
        Self::Output {
            freq: self * 1_000_000,
        }
    }
}
