//! Sample and frame positioning.
//!
//! Sample offsets count PCM frames (one sample per channel) at the output rate.
//! Frame offsets count MPEG frames.
use mpgdec_sys::ffi as sys;

use crate::{
    session::{DecodingSession, SessionState},
    EngineCode, Error, Result,
};

/// Reference point of a seek offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whence {
    #[default]
    Start,
    Current,
    End,
}

impl From<Whence> for i32 {
    fn from(value: Whence) -> Self {
        let raw = match value {
            Whence::Start => sys::SEEK_SET,
            Whence::Current => sys::SEEK_CUR,
            Whence::End => sys::SEEK_END,
        };
        raw as i32
    }
}

impl DecodingSession {
    /// Moves to a sample offset and returns the resulting absolute offset.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64> {
        self.require_open()?;
        let pos = seek_ffi::mpg123_seek64(self, offset, whence);
        self.checked_position(pos)
    }

    /// Moves to an MPEG frame offset and returns the resulting absolute frame.
    pub fn seek_frame(&mut self, offset: i64, whence: Whence) -> Result<i64> {
        self.require_open()?;
        let pos = seek_ffi::mpg123_seek_frame64(self, offset, whence);
        self.checked_position(pos)
    }

    /// Current sample offset.
    pub fn tell(&self) -> Result<i64> {
        self.require_open()?;
        let pos = seek_ffi::mpg123_tell64(self);
        self.checked_position(pos)
    }

    /// Current MPEG frame offset.
    pub fn tell_frame(&self) -> Result<i64> {
        self.require_open()?;
        let pos = seek_ffi::mpg123_tellframe64(self);
        self.checked_position(pos)
    }

    /// Total length in samples, as far as the engine knows.
    ///
    /// Negative values are passed through unchanged; they mean the length is unknown.
    pub fn length(&self) -> Result<i64> {
        self.require_open()?;
        Ok(seek_ffi::mpg123_length64(self))
    }

    /// Total length in MPEG frames. Negative when unknown.
    pub fn frame_length(&self) -> Result<i64> {
        self.require_open()?;
        Ok(seek_ffi::mpg123_framelength64(self))
    }

    /// Seeks to `seconds` from the start, rounded to the nearest sample.
    ///
    /// Fails with [`Error::SeekFailed`] when no output rate is known yet, or with
    /// `BAD_VALUE` when `seconds` is NaN or infinite. The position is left untouched
    /// in both cases.
    pub fn seek_to_time(&mut self, seconds: f64) -> Result<i64> {
        let rate = self.sample_rate();
        if self.state() != SessionState::Open || rate == 0 {
            return Err(Error::SeekFailed(EngineCode::BAD_RATE));
        }
        if !seconds.is_finite() {
            return Err(Error::SeekFailed(EngineCode::BAD_VALUE));
        }
        let offset = (rate as f64 * seconds).round() as i64;
        self.seek(offset, Whence::Start)
    }

    /// Current position in seconds.
    pub fn position_seconds(&self) -> Result<f64> {
        let rate = self.sample_rate();
        if rate == 0 {
            return Err(Error::SeekFailed(EngineCode::BAD_RATE));
        }
        Ok(self.tell()? as f64 / rate as f64)
    }

    fn checked_position(&self, pos: i64) -> Result<i64> {
        if pos < 0 {
            let code = i32::try_from(pos).unwrap_or(EngineCode::ERR.raw());
            return Err(Error::SeekFailed(self.handle().refine(EngineCode(code))));
        }
        Ok(pos)
    }
}

mod seek_ffi {
    use mpgdec_sys::ffi as sys;

    use crate::{
        session::{seek::Whence, DecodingSession},
        Binding,
    };

    #[inline]
    pub fn mpg123_seek64(session: &mut DecodingSession, offset: i64, whence: Whence) -> i64 {
        unsafe { sys::mpg123_seek64(session.handle_mut().to_raw(), offset, whence.into()) }
    }

    #[inline]
    pub fn mpg123_seek_frame64(session: &mut DecodingSession, offset: i64, whence: Whence) -> i64 {
        unsafe { sys::mpg123_seek_frame64(session.handle_mut().to_raw(), offset, whence.into()) }
    }

    #[inline]
    pub fn mpg123_tell64(session: &DecodingSession) -> i64 {
        unsafe { sys::mpg123_tell64(session.handle().to_raw()) }
    }

    #[inline]
    pub fn mpg123_tellframe64(session: &DecodingSession) -> i64 {
        unsafe { sys::mpg123_tellframe64(session.handle().to_raw()) }
    }

    #[inline]
    pub fn mpg123_length64(session: &DecodingSession) -> i64 {
        unsafe { sys::mpg123_length64(session.handle().to_raw()) }
    }

    #[inline]
    pub fn mpg123_framelength64(session: &DecodingSession) -> i64 {
        unsafe { sys::mpg123_framelength64(session.handle().to_raw()) }
    }
}
