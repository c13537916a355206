//! Decoding sessions.
//!
//! A [`DecodingSession`] owns one libmpg123 handle and walks it through a small
//! state machine:
//!
//! ```text
//! new() -> Ready -(open | open_feed)-> Open -(close)-> Ready -> ... -> drop
//! ```
//!
//! Closing and reopening is allowed any number of times. Dropping the session
//! releases the engine handle.
//!
//! ## Stream sources
//! - [`DecodingSession::open()`] lets the engine read a file directly. The native
//!   output format is queried and locked right away.
//! - [`DecodingSession::open_feed()`] starts an empty stream that the caller fills
//!   with [`DecodingSession::feed()`]. The output format is unknown until the engine
//!   has parsed enough input to announce one.
//!
//! ## Reading
//! Decoded audio is pulled either as raw chunks ([`stream`]) or one MPEG frame at a
//! time with [`DecodingSession::decode_frame()`]. Seeking, the equalizer, volume and
//! metadata are in their own submodules but all operate on the same session.
//!
//! ## Threading
//! A session is `Send` but not `Sync`. Every mutating call takes `&mut self`, so
//! calls on one session are serialized by the borrow checker.
use std::path::Path;

use crate::{
    audio::{
        channels::{ChannelSupport, Channels},
        encoding::Encoding,
    },
    cstring_from_path,
    params::{DecoderFlags, Param},
    session::{builder::SessionBuilder, handle::EngineHandle},
    EngineCode, Error, Result,
};

pub mod builder;
pub mod equalizer;
pub(crate) mod handle;
pub mod seek;
pub mod stream;
pub mod volume;

/// Chunk size used by [`DecodingSession::read_all()`].
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed or closed. A stream can be opened.
    Ready,
    /// A stream is open. Decoding, seeking and equalizer writes are valid.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    /// The engine reads the file itself.
    FileBacked,
    /// The caller pushes compressed bytes with [`DecodingSession::feed()`].
    Feed,
}

/// Negotiated PCM output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub rate: u32,
    pub channels: Channels,
    pub encoding: Encoding,
}

impl OutputFormat {
    /// Bytes per interleaved frame (one sample for each channel).
    pub fn frame_bytes(&self) -> usize {
        self.encoding.bytes_per_sample() * self.channels.count()
    }
}

pub struct DecodingSession {
    handle: EngineHandle,
    state: SessionState,
    mode: Option<StreamMode>,
    format: Option<OutputFormat>,
}

impl DecodingSession {
    /// Creates a session with the engine's default parameters.
    pub fn new() -> Result<Self> {
        SessionBuilder::new().build()
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn from_handle(handle: EngineHandle) -> Self {
        Self {
            handle,
            state: SessionState::Ready,
            mode: None,
            format: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// The source of the open stream. `None` while `Ready`.
    pub fn mode(&self) -> Option<StreamMode> {
        self.mode
    }

    /// The current output format.
    ///
    /// `None` while `Ready`, and in feed mode until the engine has announced a format.
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Output sample rate, or 0 when no format is known.
    pub fn sample_rate(&self) -> u32 {
        self.format.map_or(0, |f| f.rate)
    }

    pub fn channels(&self) -> Option<Channels> {
        self.format.map(|f| f.channels)
    }

    pub fn encoding(&self) -> Option<Encoding> {
        self.format.map(|f| f.encoding)
    }

    /// Opens `path` for decoding and locks the output format to the stream's native
    /// `(rate, channels, encoding)`.
    ///
    /// Only valid while `Ready`. Fails with [`Error::OpenFailed`] when the engine cannot
    /// open the file or cannot parse a format from it, and with
    /// [`Error::FormatConfigurationFailed`] when locking the format fails. On any
    /// failure the session stays `Ready`.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if self.state != SessionState::Ready {
            return Err(Error::InvalidSession);
        }
        let path = path.as_ref();
        let c_path = cstring_from_path(path)?;

        session_ffi::mpg123_open(&mut self.handle, &c_path).map_err(Error::OpenFailed)?;

        match self.lock_native_format() {
            Ok(format) => {
                self.state = SessionState::Open;
                self.mode = Some(StreamMode::FileBacked);
                self.format = Some(format);
                tracing::debug!(
                    path = %path.display(),
                    rate = format.rate,
                    channels = format.channels.count(),
                    encoding = ?format.encoding,
                    "opened file stream"
                );
                Ok(())
            }
            Err(e) => {
                if let Err(code) = session_ffi::mpg123_close(&mut self.handle) {
                    tracing::debug!(%code, "engine reported an error while closing");
                }
                tracing::debug!(path = %path.display(), error = %e, "open failed");
                Err(e)
            }
        }
    }

    /// Opens an empty feed-mode stream.
    ///
    /// Nothing can be decoded until at least one [`feed()`](Self::feed) call.
    pub fn open_feed(&mut self) -> Result<()> {
        if self.state != SessionState::Ready {
            return Err(Error::InvalidSession);
        }
        session_ffi::mpg123_open_feed(&mut self.handle).map_err(Error::OpenFailed)?;

        self.state = SessionState::Open;
        self.mode = Some(StreamMode::Feed);
        self.format = None;
        tracing::debug!("opened feed stream");
        Ok(())
    }

    /// Appends compressed bytes to a feed-mode stream.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        if self.state != SessionState::Open || self.mode != Some(StreamMode::Feed) {
            return Err(Error::InvalidSession);
        }
        session_ffi::mpg123_feed(&mut self.handle, bytes).map_err(Error::ReadFailed)?;
        tracing::trace!(bytes = bytes.len(), "fed compressed input");
        Ok(())
    }

    /// Closes the stream and forgets the output format.
    ///
    /// Always safe to call; closing a `Ready` session does nothing.
    pub fn close(&mut self) {
        if self.state == SessionState::Open {
            if let Err(code) = session_ffi::mpg123_close(&mut self.handle) {
                tracing::debug!(%code, "engine reported an error while closing");
            }
            tracing::debug!("closed stream");
        }
        self.state = SessionState::Ready;
        self.mode = None;
        self.format = None;
    }

    /// Restricts the output to exactly `(rate, channels, encoding)`.
    ///
    /// Only valid while `Open`. On success the cached format is the requested one.
    pub fn set_output_format(
        &mut self,
        rate: u32,
        channels: Channels,
        encoding: Encoding,
    ) -> Result<()> {
        self.require_open()?;
        let format = OutputFormat {
            rate,
            channels,
            encoding,
        };
        self.apply_format(format)?;
        self.format = Some(format);
        tracing::debug!(rate, channels = channels.count(), ?encoding, "locked output format");
        Ok(())
    }

    /// Which channel counts the engine can produce for `(rate, encoding)`.
    ///
    /// Does not need an open stream. An empty set means unsupported.
    pub fn format_support(&self, rate: u32, encoding: Encoding) -> ChannelSupport {
        session_ffi::mpg123_format_support(&self.handle, rate, encoding)
    }

    pub fn set_param(&mut self, param: Param, value: i64) -> Result<()> {
        self.handle
            .set_param(param, value, 0.0)
            .map_err(Error::ParameterError)
    }

    /// For float-valued parameters such as [`Param::Outscale`].
    pub fn set_param_f64(&mut self, param: Param, value: f64) -> Result<()> {
        self.handle
            .set_param(param, 0, value)
            .map_err(Error::ParameterError)
    }

    pub fn param(&self, param: Param) -> Result<i64> {
        let (value, _) = self.handle.param(param).map_err(Error::ParameterError)?;
        Ok(value)
    }

    pub fn param_f64(&self, param: Param) -> Result<f64> {
        let (_, fvalue) = self.handle.param(param).map_err(Error::ParameterError)?;
        Ok(fvalue)
    }

    pub fn flags(&self) -> Result<DecoderFlags> {
        let bits = self.param(Param::Flags)?;
        Ok(DecoderFlags::from_bits(bits as u32))
    }

    pub fn add_flags(&mut self, flags: DecoderFlags) -> Result<()> {
        self.set_param(Param::AddFlags, flags.bits() as i64)
    }

    pub fn remove_flags(&mut self, flags: DecoderFlags) -> Result<()> {
        self.set_param(Param::RemoveFlags, flags.bits() as i64)
    }

    pub(crate) fn require_open(&self) -> Result<()> {
        if self.state == SessionState::Open {
            Ok(())
        } else {
            Err(Error::InvalidSession)
        }
    }

    pub(crate) fn handle(&self) -> &EngineHandle {
        &self.handle
    }

    pub(crate) fn handle_mut(&mut self) -> &mut EngineHandle {
        &mut self.handle
    }

    /// Reads the format the engine will produce next.
    fn query_format(&self) -> Result<OutputFormat> {
        let (rate, channels, encoding) =
            session_ffi::mpg123_getformat(&self.handle).map_err(Error::OpenFailed)?;
        Ok(OutputFormat {
            rate: u32::try_from(rate).map_err(|_| Error::OpenFailed(EngineCode::BAD_RATE))?,
            channels: Channels::try_from(channels)
                .map_err(|_| Error::OpenFailed(EngineCode::BAD_CHANNEL))?,
            encoding: Encoding::try_from(encoding)?,
        })
    }

    fn lock_native_format(&mut self) -> Result<OutputFormat> {
        let format = self.query_format()?;
        self.apply_format(format)?;
        Ok(format)
    }

    fn apply_format(&mut self, format: OutputFormat) -> Result<()> {
        session_ffi::mpg123_format_none(&mut self.handle)
            .map_err(Error::FormatConfigurationFailed)?;
        session_ffi::mpg123_format(&mut self.handle, format)
            .map_err(Error::FormatConfigurationFailed)
    }

    /// Picks up a format the engine announced with `MPG123_NEW_FORMAT`.
    pub(crate) fn refresh_format(&mut self) -> Result<()> {
        let format = self.query_format().map_err(|e| match e {
            Error::OpenFailed(code) => Error::ReadFailed(code),
            other => other,
        })?;
        if self.format != Some(format) {
            tracing::debug!(
                rate = format.rate,
                channels = format.channels.count(),
                encoding = ?format.encoding,
                "engine announced a new output format"
            );
        }
        self.format = Some(format);
        Ok(())
    }
}

pub(crate) mod session_ffi {
    use std::ffi::CStr;

    use mpgdec_sys::ffi as sys;

    use crate::{
        audio::channels::ChannelSupport,
        session::{handle::EngineHandle, OutputFormat},
        Binding, EngineCode, Encoding,
    };

    #[inline]
    pub fn mpg123_open(handle: &mut EngineHandle, path: &CStr) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_open(handle.to_raw(), path.as_ptr()) };
        handle.check(res)
    }

    #[inline]
    pub fn mpg123_open_feed(handle: &mut EngineHandle) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_open_feed(handle.to_raw()) };
        handle.check(res)
    }

    #[inline]
    pub fn mpg123_feed(handle: &mut EngineHandle, bytes: &[u8]) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_feed(handle.to_raw(), bytes.as_ptr(), bytes.len()) };
        handle.check(res)
    }

    #[inline]
    pub fn mpg123_close(handle: &mut EngineHandle) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_close(handle.to_raw()) };
        handle.check(res)
    }

    #[inline]
    pub fn mpg123_getformat(handle: &EngineHandle) -> Result<(i64, i32, i32), EngineCode> {
        let mut rate: core::ffi::c_long = 0;
        let mut channels: core::ffi::c_int = 0;
        let mut encoding: core::ffi::c_int = 0;
        let res = unsafe {
            sys::mpg123_getformat(handle.to_raw(), &mut rate, &mut channels, &mut encoding)
        };
        handle.check(res)?;
        Ok((rate as i64, channels, encoding))
    }

    #[inline]
    pub fn mpg123_format_none(handle: &mut EngineHandle) -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_format_none(handle.to_raw()) };
        handle.check(res)
    }

    #[inline]
    pub fn mpg123_format(handle: &mut EngineHandle, format: OutputFormat) -> Result<(), EngineCode> {
        let channels = sys::mpg123_channelcount::from(format.channels) as core::ffi::c_int;
        let res = unsafe {
            sys::mpg123_format(
                handle.to_raw(),
                format.rate as core::ffi::c_long,
                channels,
                format.encoding.code(),
            )
        };
        handle.check(res)
    }

    #[inline]
    pub fn mpg123_format_support(
        handle: &EngineHandle,
        rate: u32,
        encoding: Encoding,
    ) -> ChannelSupport {
        let res = unsafe {
            sys::mpg123_format_support(
                handle.to_raw(),
                rate as core::ffi::c_long,
                encoding.code(),
            )
        };
        ChannelSupport::from_bits(res.max(0) as u32)
    }

    /// Returns the engine status and the number of bytes written into `buf`.
    #[inline]
    pub fn mpg123_read(handle: &mut EngineHandle, buf: &mut [u8]) -> (i32, usize) {
        let mut done: usize = 0;
        let res = unsafe {
            sys::mpg123_read(
                handle.to_raw(),
                buf.as_mut_ptr() as *mut core::ffi::c_void,
                buf.len(),
                &mut done,
            )
        };
        (res, done.min(buf.len()))
    }

    /// Decodes one frame. The returned bytes are copied out of the engine's buffer.
    #[inline]
    pub fn mpg123_decode_frame64(handle: &mut EngineHandle) -> (i32, i64, Vec<u8>) {
        let mut num: i64 = 0;
        let mut audio: *mut core::ffi::c_uchar = core::ptr::null_mut();
        let mut bytes: usize = 0;
        let res = unsafe {
            sys::mpg123_decode_frame64(handle.to_raw(), &mut num, &mut audio, &mut bytes)
        };
        let data = if audio.is_null() || bytes == 0 {
            Vec::new()
        } else {
            // Valid until the next call on this handle.
            unsafe { std::slice::from_raw_parts(audio, bytes) }.to_vec()
        };
        (res, num, data)
    }

    #[inline]
    pub fn mpg123_info2(handle: &EngineHandle) -> Result<sys::mpg123_frameinfo2, EngineCode> {
        let mut info = core::mem::MaybeUninit::<sys::mpg123_frameinfo2>::zeroed();
        let res = unsafe { sys::mpg123_info2(handle.to_raw(), info.as_mut_ptr()) };
        handle.check(res)?;
        Ok(unsafe { info.assume_init() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_assets::{mp3, temp_file::TempFileGuard};

    fn open_fixture(frames: usize) -> (DecodingSession, TempFileGuard) {
        let file = TempFileGuard::with_contents(&mp3::silent_stream(frames));
        let mut session = DecodingSession::new().unwrap();
        session.open(file.path()).unwrap();
        (session, file)
    }

    #[test]
    fn test_session_new_starts_ready_without_format() {
        let session = DecodingSession::new().unwrap();
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.mode(), None);
        assert_eq!(session.format(), None);
        assert_eq!(session.sample_rate(), 0);
        assert!(session.channels().is_none());
    }

    #[test]
    fn test_session_unopened_operations_fail_with_invalid_session() {
        let mut session = DecodingSession::new().unwrap();
        assert_eq!(session.decode_frame().unwrap_err(), Error::InvalidSession);
        assert_eq!(
            session.seek(0, seek::Whence::Start).unwrap_err(),
            Error::InvalidSession
        );
        assert_eq!(session.tell().unwrap_err(), Error::InvalidSession);
        assert_eq!(session.feed(&[0xFF]).unwrap_err(), Error::InvalidSession);
        assert_eq!(
            session
                .set_eq(equalizer::EqChannel::Left, 0, 1.0)
                .unwrap_err(),
            Error::InvalidSession
        );
        assert_eq!(session.pull_chunk(64).unwrap_err(), Error::InvalidSession);
        assert_eq!(
            session
                .set_output_format(44_100, Channels::Stereo, Encoding::S16)
                .unwrap_err(),
            Error::InvalidSession
        );
    }

    #[test]
    fn test_session_format_support_does_not_need_open() {
        let session = DecodingSession::new().unwrap();
        let support = session.format_support(44_100, Encoding::S16);
        assert!(support.supports(Channels::Stereo));
        assert!(support.supports(Channels::Mono));
    }

    #[test]
    fn test_session_open_populates_format() {
        let (session, _file) = open_fixture(24);
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.mode(), Some(StreamMode::FileBacked));
        assert_eq!(session.sample_rate(), 44_100);
        assert!(matches!(
            session.channels(),
            Some(Channels::Mono) | Some(Channels::Stereo)
        ));
        assert!(session.encoding().is_some());
    }

    #[test]
    fn test_session_open_missing_file_fails_and_stays_ready() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp3");

        let mut session = DecodingSession::new().unwrap();
        let err = session.open(&missing).unwrap_err();
        assert!(matches!(err, Error::OpenFailed(_)), "got {err:?}");
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.format(), None);

        // Still usable afterwards.
        let file = TempFileGuard::with_contents(&mp3::silent_stream(24));
        session.open(file.path()).unwrap();
        assert!(session.is_open());
    }

    #[test]
    fn test_session_open_unparseable_file_fails_and_stays_ready() {
        let file = TempFileGuard::with_contents(&[0u8; 4096]);
        let mut session = DecodingSession::new().unwrap();
        let err = session.open(file.path()).unwrap_err();
        assert!(matches!(err, Error::OpenFailed(_)), "got {err:?}");
        assert_eq!(session.state(), SessionState::Ready);

        // The engine stream was closed, so the handle takes a new file.
        let valid = TempFileGuard::with_contents(&mp3::silent_stream(24));
        session.open(valid.path()).unwrap();
        assert!(session.is_open());
        assert_eq!(session.sample_rate(), 44_100);
    }

    #[test]
    fn test_session_open_twice_is_invalid() {
        let (mut session, file) = open_fixture(24);
        assert_eq!(session.open(file.path()).unwrap_err(), Error::InvalidSession);
        assert_eq!(session.open_feed().unwrap_err(), Error::InvalidSession);
    }

    #[test]
    fn test_session_close_is_idempotent_and_reopenable() {
        let (mut session, file) = open_fixture(24);
        session.close();
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.format(), None);
        assert_eq!(session.sample_rate(), 0);

        session.close();
        assert_eq!(session.state(), SessionState::Ready);

        session.open(file.path()).unwrap();
        assert_eq!(session.sample_rate(), 44_100);
    }

    #[test]
    fn test_session_set_output_format_caches_requested_triple() {
        let (mut session, _file) = open_fixture(24);
        session
            .set_output_format(44_100, Channels::Mono, Encoding::S16)
            .unwrap();
        let format = session.format().unwrap();
        assert_eq!(format.channels, Channels::Mono);
        assert_eq!(format.encoding, Encoding::S16);
        assert_eq!(format.frame_bytes(), 2);

        let chunk = session.pull_chunk(1000).unwrap();
        assert_eq!(chunk.len() % 2, 0);
    }

    #[test]
    fn test_session_feed_requires_feed_mode() {
        let (mut session, _file) = open_fixture(24);
        assert_eq!(session.feed(&[0u8; 4]).unwrap_err(), Error::InvalidSession);
    }

    #[test]
    fn test_session_open_feed_has_no_format_yet() {
        let mut session = DecodingSession::new().unwrap();
        session.open_feed().unwrap();
        assert_eq!(session.mode(), Some(StreamMode::Feed));
        assert_eq!(session.format(), None);
        session.feed(&[]).unwrap();
    }

    #[test]
    fn test_session_params_and_flags() {
        let mut session = DecodingSession::new().unwrap();
        session.add_flags(DecoderFlags::QUIET).unwrap();
        assert!(session.flags().unwrap().contains(DecoderFlags::QUIET));

        session.remove_flags(DecoderFlags::QUIET).unwrap();
        assert!(!session.flags().unwrap().contains(DecoderFlags::QUIET));

        session.set_param(Param::ResyncLimit, 4096).unwrap();
        assert_eq!(session.param(Param::ResyncLimit).unwrap(), 4096);

        session.set_param_f64(Param::Outscale, 0.25).unwrap();
        assert!((session.param_f64(Param::Outscale).unwrap() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_session_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<DecodingSession>();
    }
}
