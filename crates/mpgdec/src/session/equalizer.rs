//! The engine's 32-band equalizer.
//!
//! Gains are linear factors; 1.0 leaves a band untouched.
use mpgdec_sys::ffi as sys;

use crate::{
    params::{has_feature, Feature},
    session::DecodingSession,
    EngineCode, Error, Result,
};

/// Number of equalizer bands.
pub const EQ_BANDS: usize = 32;
/// Gain of a band that has not been changed.
pub const FLAT_GAIN: f64 = 1.0;

/// Channel selector for equalizer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqChannel {
    Left,
    Right,
    Both,
}

impl TryFrom<u8> for EqChannel {
    type Error = Error;

    /// Accepts the selector values 0 (left), 1 (right) and 3 (both).
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(EqChannel::Left),
            1 => Ok(EqChannel::Right),
            3 => Ok(EqChannel::Both),
            _ => Err(Error::ParameterError(EngineCode::BAD_CHANNEL)),
        }
    }
}

impl From<EqChannel> for sys::mpg123_channels {
    fn from(value: EqChannel) -> Self {
        match value {
            EqChannel::Left => sys::mpg123_channels_MPG123_LEFT,
            EqChannel::Right => sys::mpg123_channels_MPG123_RIGHT,
            EqChannel::Both => sys::mpg123_channels_MPG123_LR,
        }
    }
}

impl DecodingSession {
    /// Sets the gain of one band on the selected channel(s).
    pub fn set_eq(&mut self, channel: EqChannel, band: usize, gain: f64) -> Result<()> {
        self.require_open()?;
        let band = i32::try_from(band).map_err(|_| Error::ParameterError(EngineCode::BAD_BAND))?;
        eq_ffi::mpg123_eq2(self, channel, band, gain).map_err(Error::ParameterError)
    }

    /// Gain of one band.
    ///
    /// Reading [`EqChannel::Both`] or a band outside `0..EQ_BANDS` returns
    /// [`FLAT_GAIN`], as does any read when the engine was built without the
    /// equalizer.
    pub fn eq(&self, channel: EqChannel, band: usize) -> f64 {
        if channel == EqChannel::Both || band >= EQ_BANDS || !has_feature(Feature::Equalizer) {
            return FLAT_GAIN;
        }
        eq_ffi::mpg123_geteq2(self, channel, band as i32)
    }

    /// All bands of one channel.
    pub fn eq_bands(&self, channel: EqChannel) -> [f64; EQ_BANDS] {
        std::array::from_fn(|band| self.eq(channel, band))
    }

    /// Resets every band on both channels to [`FLAT_GAIN`].
    pub fn reset_eq(&mut self) -> Result<()> {
        eq_ffi::mpg123_reset_eq(self).map_err(Error::ParameterError)
    }
}

mod eq_ffi {
    use mpgdec_sys::ffi as sys;

    use crate::{
        session::{equalizer::EqChannel, DecodingSession},
        Binding, EngineCode,
    };

    #[inline]
    pub fn mpg123_eq2(
        session: &mut DecodingSession,
        channel: EqChannel,
        band: i32,
        gain: f64,
    ) -> Result<(), EngineCode> {
        let channel = sys::mpg123_channels::from(channel) as core::ffi::c_int;
        let res =
            unsafe { sys::mpg123_eq2(session.handle_mut().to_raw(), channel, band, gain) };
        session.handle().check(res)
    }

    #[inline]
    pub fn mpg123_geteq2(session: &DecodingSession, channel: EqChannel, band: i32) -> f64 {
        let channel = sys::mpg123_channels::from(channel) as core::ffi::c_int;
        unsafe { sys::mpg123_geteq2(session.handle().to_raw(), channel, band) }
    }

    #[inline]
    pub fn mpg123_reset_eq(session: &mut DecodingSession) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_reset_eq(session.handle_mut().to_raw()) };
        session.handle().check(res)
    }
}
