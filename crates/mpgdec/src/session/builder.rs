use crate::{
    params::{DecoderFlags, Param, RvaMode},
    session::{handle::EngineHandle, DecodingSession},
    Error, Result,
};

/// Engine parameters to apply when a session is created.
///
/// Anything left unset keeps the engine's default.
///
/// ```no_run
/// # use mpgdec::session::builder::SessionBuilder;
/// # use mpgdec::params::{DecoderFlags, RvaMode};
/// # fn main() -> mpgdec::Result<()> {
/// let session = SessionBuilder::new()
///     .add_flags(DecoderFlags::QUIET | DecoderFlags::GAPLESS)
///     .rva(RvaMode::Album)
///     .resync_limit(-1)
///     .build()?;
/// # let _ = session;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    flags: Option<DecoderFlags>,
    add_flags: DecoderFlags,
    remove_flags: DecoderFlags,
    rva: Option<RvaMode>,
    resync_limit: Option<i64>,
    feed_pool: Option<i64>,
    feed_buffer: Option<i64>,
    outscale: Option<f64>,
    preframes: Option<i64>,
    index_size: Option<i64>,
    verbose: Option<i64>,
    force_rate: Option<u32>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the engine's decoder flags entirely.
    pub fn flags(mut self, flags: DecoderFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Sets flags on top of the defaults (or of [`flags()`](Self::flags)).
    pub fn add_flags(mut self, flags: DecoderFlags) -> Self {
        self.add_flags |= flags;
        self
    }

    pub fn remove_flags(mut self, flags: DecoderFlags) -> Self {
        self.remove_flags |= flags;
        self
    }

    pub fn rva(mut self, mode: RvaMode) -> Self {
        self.rva = Some(mode);
        self
    }

    /// Bytes to scan for a frame header when resyncing. -1 removes the limit.
    pub fn resync_limit(mut self, bytes: i64) -> Self {
        self.resync_limit = Some(bytes);
        self
    }

    pub fn feed_pool(mut self, chunks: i64) -> Self {
        self.feed_pool = Some(chunks);
        self
    }

    pub fn feed_buffer(mut self, bytes: i64) -> Self {
        self.feed_buffer = Some(bytes);
        self
    }

    /// Initial linear output scale, the same factor as
    /// [`DecodingSession::set_volume()`].
    pub fn outscale(mut self, scale: f64) -> Self {
        self.outscale = Some(scale);
        self
    }

    pub fn preframes(mut self, frames: i64) -> Self {
        self.preframes = Some(frames);
        self
    }

    pub fn index_size(mut self, size: i64) -> Self {
        self.index_size = Some(size);
        self
    }

    pub fn verbose(mut self, level: i64) -> Self {
        self.verbose = Some(level);
        self
    }

    /// Resample everything to `rate`. 0 disables.
    pub fn force_rate(mut self, rate: u32) -> Self {
        self.force_rate = Some(rate);
        self
    }

    pub fn build(self) -> Result<DecodingSession> {
        let mut handle = EngineHandle::new()?;
        for (param, value, fvalue) in self.settings() {
            handle
                .set_param(param, value, fvalue)
                .map_err(Error::ParameterError)?;
        }
        tracing::debug!("created decoding session");
        Ok(DecodingSession::from_handle(handle))
    }

    fn settings(&self) -> Vec<(Param, i64, f64)> {
        let mut out = Vec::new();
        if let Some(flags) = self.flags {
            out.push((Param::Flags, flags.bits() as i64, 0.0));
        }
        if !self.add_flags.is_none() {
            out.push((Param::AddFlags, self.add_flags.bits() as i64, 0.0));
        }
        if !self.remove_flags.is_none() {
            out.push((Param::RemoveFlags, self.remove_flags.bits() as i64, 0.0));
        }
        if let Some(mode) = self.rva {
            let raw = mpgdec_sys::ffi::mpg123_param_rva::from(mode);
            out.push((Param::Rva, raw as i64, 0.0));
        }
        let integers = [
            (Param::ResyncLimit, self.resync_limit),
            (Param::FeedPool, self.feed_pool),
            (Param::FeedBuffer, self.feed_buffer),
            (Param::Preframes, self.preframes),
            (Param::IndexSize, self.index_size),
            (Param::Verbose, self.verbose),
            (Param::ForceRate, self.force_rate.map(i64::from)),
        ];
        out.extend(
            integers
                .into_iter()
                .filter_map(|(param, value)| value.map(|v| (param, v, 0.0))),
        );
        if let Some(scale) = self.outscale {
            out.push((Param::Outscale, 0, scale));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_apply_nothing() {
        assert!(SessionBuilder::new().settings().is_empty());
        assert!(SessionBuilder::new().build().is_ok());
    }

    #[test]
    fn test_builder_params_are_applied() {
        let session = SessionBuilder::new()
            .resync_limit(8192)
            .preframes(2)
            .feed_pool(4)
            .build()
            .unwrap();
        assert_eq!(session.param(Param::ResyncLimit).unwrap(), 8192);
        assert_eq!(session.param(Param::Preframes).unwrap(), 2);
        assert_eq!(session.param(Param::FeedPool).unwrap(), 4);
    }

    #[test]
    fn test_builder_flags_and_rva() {
        let session = SessionBuilder::new()
            .flags(DecoderFlags::GAPLESS)
            .add_flags(DecoderFlags::QUIET)
            .rva(RvaMode::Mix)
            .build()
            .unwrap();
        let flags = session.flags().unwrap();
        assert!(flags.contains(DecoderFlags::GAPLESS | DecoderFlags::QUIET));
        assert_eq!(
            session.param(Param::Rva).unwrap(),
            mpgdec_sys::ffi::mpg123_param_rva_MPG123_RVA_MIX as i64
        );
    }

    #[test]
    fn test_builder_remove_flags() {
        let session = SessionBuilder::new()
            .add_flags(DecoderFlags::QUIET)
            .remove_flags(DecoderFlags::QUIET)
            .build()
            .unwrap();
        assert!(!session.flags().unwrap().contains(DecoderFlags::QUIET));
    }

    #[test]
    fn test_builder_outscale_is_the_volume() {
        let session = SessionBuilder::new().outscale(0.5).build().unwrap();
        assert!((session.volume().unwrap().base - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_builder_rejects_bad_rva() {
        let mut session = SessionBuilder::new().build().unwrap();
        let err = session.set_param(Param::Rva, 99).unwrap_err();
        assert!(matches!(err, Error::ParameterError(_)), "got {err:?}");
    }
}
