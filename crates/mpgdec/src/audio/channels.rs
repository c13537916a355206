//! Channel layouts of decoded output.
use mpgdec_sys::ffi as sys;

use crate::{EngineCode, Error};

/// Output channel count. MPEG audio decodes to mono or stereo only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    Mono,
    Stereo,
}

impl Channels {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }
}

impl From<Channels> for sys::mpg123_channelcount {
    fn from(value: Channels) -> Self {
        match value {
            Channels::Mono => sys::mpg123_channelcount_MPG123_MONO,
            Channels::Stereo => sys::mpg123_channelcount_MPG123_STEREO,
        }
    }
}

impl TryFrom<i32> for Channels {
    type Error = Error;

    /// Accepts the channel count reported by the engine.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Channels::Mono),
            2 => Ok(Channels::Stereo),
            _ => Err(Error::ParameterError(EngineCode::BAD_CHANNEL)),
        }
    }
}

/// Channel configurations an output `(rate, encoding)` pair supports.
///
/// Returned by format probes. An empty set means the pair is not supported at all.
#[repr(transparent)]
#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq)]
pub struct ChannelSupport(u32);

impl ChannelSupport {
    pub const NONE: Self = Self(0);
    pub const MONO: Self = Self(sys::mpg123_channelcount_MPG123_MONO);
    pub const STEREO: Self = Self(sys::mpg123_channelcount_MPG123_STEREO);

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Check if all the bits in other are set
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn supports(self, channels: Channels) -> bool {
        match channels {
            Channels::Mono => self.contains(Self::MONO),
            Channels::Stereo => self.contains(Self::STEREO),
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for ChannelSupport {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
