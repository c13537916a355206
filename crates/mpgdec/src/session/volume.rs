//! Output volume.
//!
//! The engine scales decoded samples by a linear factor. Replay gain adjustment
//! (see [`RvaMode`](crate::params::RvaMode)) is applied on top of it.
use crate::{session::DecodingSession, Error, Result};

/// Volume state reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeInfo {
    /// Linear factor set by the caller.
    pub base: f64,
    /// Linear factor actually applied, after replay gain.
    pub really: f64,
    /// Replay gain adjustment in dB, 0 when none is active.
    pub rva_db: f64,
}

impl DecodingSession {
    /// Sets the linear volume factor.
    pub fn set_volume(&mut self, volume: f64) -> Result<()> {
        volume_ffi::mpg123_volume(self, volume).map_err(Error::ParameterError)
    }

    /// Adds `change` to the linear volume factor.
    pub fn change_volume(&mut self, change: f64) -> Result<()> {
        volume_ffi::mpg123_volume_change(self, change).map_err(Error::ParameterError)
    }

    /// Multiplies the linear volume factor by `10^(db / 20)`.
    pub fn change_volume_db(&mut self, db: f64) -> Result<()> {
        volume_ffi::mpg123_volume_change_db(self, db).map_err(Error::ParameterError)
    }

    pub fn volume(&self) -> Result<VolumeInfo> {
        volume_ffi::mpg123_getvolume(self).map_err(Error::ParameterError)
    }
}

mod volume_ffi {
    use mpgdec_sys::ffi as sys;

    use crate::{
        session::{volume::VolumeInfo, DecodingSession},
        Binding, EngineCode,
    };

    #[inline]
    pub fn mpg123_volume(session: &mut DecodingSession, volume: f64) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_volume(session.handle_mut().to_raw(), volume) };
        session.handle().check(res)
    }

    #[inline]
    pub fn mpg123_volume_change(
        session: &mut DecodingSession,
        change: f64,
    ) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_volume_change(session.handle_mut().to_raw(), change) };
        session.handle().check(res)
    }

    #[inline]
    pub fn mpg123_volume_change_db(
        session: &mut DecodingSession,
        db: f64,
    ) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_volume_change_db(session.handle_mut().to_raw(), db) };
        session.handle().check(res)
    }

    #[inline]
    pub fn mpg123_getvolume(session: &DecodingSession) -> Result<VolumeInfo, EngineCode> {
        let mut base: f64 = 0.0;
        let mut really: f64 = 0.0;
        let mut rva_db: f64 = 0.0;
        let res = unsafe {
            sys::mpg123_getvolume(
                session.handle().to_raw(),
                &mut base,
                &mut really,
                &mut rva_db,
            )
        };
        session.handle().check(res)?;
        Ok(VolumeInfo {
            base,
            really,
            rva_db,
        })
    }
}
