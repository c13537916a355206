//! `mpgdec` is a session-oriented MPEG audio decoding library built on top of
//! libmpg123.
//!
//! The compressed-frame decoding itself is done by libmpg123. This crate owns the
//! engine handle and turns its status codes into typed errors. It also provides the
//! plumbing a playback or analysis layer needs around that decoding:
//!
//! - A [`DecodingSession`] opens either a file path or a caller-fed byte stream.
//!   It locks the output PCM format and hands out owned chunks of decoded audio.
//! - Sample- and frame-domain seeking, a 32-band equalizer, volume control and
//!   merged ID3v1/ID3v2 metadata are exposed on the session.
//! - The [`pcm`] module converts raw decoded bytes in any of the twelve supported
//!   [`Encoding`]s into normalized `f32` lanes, independent of any session.
//!
//! Sessions are configured through a builder ([`session::builder::SessionBuilder`])
//! when engine parameters other than the defaults are needed.
//!
//! ## Quick start
//! ```no_run
//! # use mpgdec::{DecodingSession, pcm};
//! # fn main() -> mpgdec::Result<()> {
//! let mut session = DecodingSession::new()?;
//! session.open("track.mp3")?;
//!
//! let format = session.format().expect("open sessions have a format");
//! for chunk in session.chunks(mpgdec::DEFAULT_CHUNK_SIZE) {
//!     let chunk = chunk?;
//!     let block = pcm::normalize(chunk.as_bytes(), format.encoding, format.channels.count())?;
//!     // hand `block` to a sink
//! #   let _ = block;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Feature flags
//!
//! ## `generate-bindings`
//! Generates the raw libmpg123 bindings at build time using `bindgen`.
//!
//! - Intended for maintainers when moving to a newer libmpg123 API.
//! - Regular users should prefer the pre-generated bindings shipped with the crate.
//! - Adds a build dependency on clang/libclang via `bindgen`.
//!
//! # Logging
//! The crate emits [`tracing`] events for session lifecycle changes and never
//! installs a subscriber of its own.
pub mod audio;
pub mod metadata;
pub mod params;
pub mod pcm;
pub mod session;

#[cfg(test)]
pub(crate) mod test_assets;

#[doc(hidden)]
pub extern crate mpgdec_sys;

use std::{ffi::CStr, path::Path};

use mpgdec_sys::ffi as sys;

pub use audio::encoding::Encoding;
pub use audio::frame_info::FrameInfo;
pub use metadata::{MetadataRecord, TagKey};
pub use params::{has_feature, library_version, Feature, LibraryVersion};
pub use pcm::PcmBlock;
pub use session::{DecodingSession, DEFAULT_CHUNK_SIZE};

pub(crate) trait Binding: Sized {
    type Raw;

    /// Construct the wrapper from a raw FFI value.
    fn from_ptr(raw: Self::Raw) -> Self;

    fn to_raw(&self) -> Self::Raw;
}

/// A raw libmpg123 status code.
///
/// Carried verbatim inside every [`Error`] that originates in the engine, so callers
/// can tell a resync failure from an allocation failure without the crate having to
/// name every code in its own error type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineCode(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EngineStatus;

impl EngineStatus {
    /// `MPG123_OK` is the only success value for calls that report plain status.
    pub(crate) fn check(res: i32) -> std::result::Result<(), EngineCode> {
        if res == sys::mpg123_errors_MPG123_OK {
            Ok(())
        } else {
            Err(EngineCode(res))
        }
    }
}

impl EngineCode {
    pub const OK: Self = Self(sys::mpg123_errors_MPG123_OK);
    pub const ERR: Self = Self(sys::mpg123_errors_MPG123_ERR);
    pub const DONE: Self = Self(sys::mpg123_errors_MPG123_DONE);
    pub const NEW_FORMAT: Self = Self(sys::mpg123_errors_MPG123_NEW_FORMAT);
    pub const NEED_MORE: Self = Self(sys::mpg123_errors_MPG123_NEED_MORE);
    pub const BAD_CHANNEL: Self = Self(sys::mpg123_errors_MPG123_BAD_CHANNEL);
    pub const BAD_RATE: Self = Self(sys::mpg123_errors_MPG123_BAD_RATE);
    pub const BAD_PARAM: Self = Self(sys::mpg123_errors_MPG123_BAD_PARAM);
    pub const BAD_BAND: Self = Self(sys::mpg123_errors_MPG123_BAD_BAND);
    pub const OUT_OF_MEM: Self = Self(sys::mpg123_errors_MPG123_OUT_OF_MEM);
    pub const BAD_HANDLE: Self = Self(sys::mpg123_errors_MPG123_BAD_HANDLE);
    pub const BAD_VALUE: Self = Self(sys::mpg123_errors_MPG123_BAD_VALUE);

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Stable identifier for the code, independent of the engine's message catalog.
    pub fn name(self) -> &'static str {
        match self.0 {
            sys::mpg123_errors_MPG123_DONE => "Done",
            sys::mpg123_errors_MPG123_NEW_FORMAT => "NewFormat",
            sys::mpg123_errors_MPG123_NEED_MORE => "NeedMore",
            sys::mpg123_errors_MPG123_ERR => "Mpg123Error",
            sys::mpg123_errors_MPG123_OK => "Ok",
            sys::mpg123_errors_MPG123_BAD_OUTFORMAT => "BadOutFormat",
            sys::mpg123_errors_MPG123_BAD_CHANNEL => "BadChannel",
            sys::mpg123_errors_MPG123_BAD_RATE => "BadRate",
            sys::mpg123_errors_MPG123_ERR_16TO8TABLE => "Err16To8Table",
            sys::mpg123_errors_MPG123_BAD_PARAM => "BadParam",
            sys::mpg123_errors_MPG123_BAD_BUFFER => "BadBuffer",
            sys::mpg123_errors_MPG123_OUT_OF_MEM => "OutOfMemory",
            sys::mpg123_errors_MPG123_NOT_INITIALIZED => "NotInitialized",
            sys::mpg123_errors_MPG123_BAD_DECODER => "BadDecoder",
            sys::mpg123_errors_MPG123_BAD_HANDLE => "BadHandle",
            sys::mpg123_errors_MPG123_NO_BUFFERS => "NoBuffers",
            sys::mpg123_errors_MPG123_BAD_RVA => "BadRva",
            sys::mpg123_errors_MPG123_NO_GAPLESS => "NoGapless",
            sys::mpg123_errors_MPG123_NO_SPACE => "NoSpace",
            sys::mpg123_errors_MPG123_BAD_TYPES => "BadTypes",
            sys::mpg123_errors_MPG123_BAD_BAND => "BadBand",
            sys::mpg123_errors_MPG123_ERR_NULL => "ErrNull",
            sys::mpg123_errors_MPG123_ERR_READER => "ErrReader",
            sys::mpg123_errors_MPG123_NO_SEEK_FROM_END => "NoSeekFromEnd",
            sys::mpg123_errors_MPG123_BAD_WHENCE => "BadWhence",
            sys::mpg123_errors_MPG123_NO_TIMEOUT => "NoTimeout",
            sys::mpg123_errors_MPG123_BAD_FILE => "BadFile",
            sys::mpg123_errors_MPG123_NO_SEEK => "NoSeek",
            sys::mpg123_errors_MPG123_NO_READER => "NoReader",
            sys::mpg123_errors_MPG123_BAD_PARS => "BadPars",
            sys::mpg123_errors_MPG123_BAD_INDEX_PAR => "BadIndexPar",
            sys::mpg123_errors_MPG123_OUT_OF_SYNC => "OutOfSync",
            sys::mpg123_errors_MPG123_RESYNC_FAIL => "ResyncFail",
            sys::mpg123_errors_MPG123_NO_8BIT => "No8Bit",
            sys::mpg123_errors_MPG123_BAD_ALIGN => "BadAlign",
            sys::mpg123_errors_MPG123_NULL_BUFFER => "NullBuffer",
            sys::mpg123_errors_MPG123_NO_RELSEEK => "NoRelSeek",
            sys::mpg123_errors_MPG123_NULL_POINTER => "NullPointer",
            sys::mpg123_errors_MPG123_BAD_KEY => "BadKey",
            sys::mpg123_errors_MPG123_NO_INDEX => "NoIndex",
            sys::mpg123_errors_MPG123_INDEX_FAIL => "IndexFail",
            sys::mpg123_errors_MPG123_BAD_DECODER_SETUP => "BadDecoderSetup",
            sys::mpg123_errors_MPG123_MISSING_FEATURE => "MissingFeature",
            sys::mpg123_errors_MPG123_BAD_VALUE => "BadValue",
            sys::mpg123_errors_MPG123_LSEEK_FAILED => "LseekFailed",
            sys::mpg123_errors_MPG123_BAD_CUSTOM_IO => "BadCustomIo",
            sys::mpg123_errors_MPG123_LFS_OVERFLOW => "LfsOverflow",
            sys::mpg123_errors_MPG123_INT_OVERFLOW => "IntOverflow",
            sys::mpg123_errors_MPG123_BAD_FLOAT => "BadFloat",
            _ => "UNKNOWN_MPG123_ERROR",
        }
    }

    /// The engine's own description of the code.
    pub fn message(self) -> String {
        let ptr = unsafe { sys::mpg123_plain_strerror(self.0) };
        if ptr.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

impl std::fmt::Display for EngineCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.0, self.message())
    }
}

impl std::fmt::Debug for EngineCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EngineCode({}, {})", self.name(), self.0)
    }
}

/// Every failure the crate reports.
///
/// Variants that originate in the engine carry the raw [`EngineCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The engine library or a decoder handle could not be created.
    #[error("decoder initialization failed: {0}")]
    InitializationFailed(EngineCode),
    /// The path or stream could not be opened, or no format could be parsed from it.
    #[error("failed to open stream: {0}")]
    OpenFailed(EngineCode),
    /// Clearing or setting the output format table was rejected.
    #[error("output format configuration failed: {0}")]
    FormatConfigurationFailed(EngineCode),
    /// A decode pull or a feed was rejected.
    #[error("read failed: {0}")]
    ReadFailed(EngineCode),
    /// A seek or tell returned an error.
    #[error("seek failed: {0}")]
    SeekFailed(EngineCode),
    /// An equalizer, volume or engine parameter was rejected.
    #[error("parameter rejected: {0}")]
    ParameterError(EngineCode),
    /// The operation needs a session in a different state (usually open).
    #[error("operation not valid in the current session state")]
    InvalidSession,
    /// The numeric encoding code is outside the supported catalog.
    #[error("unsupported sample encoding {0:#x}")]
    UnsupportedEncoding(i32),
    /// The path cannot be handed to the engine (interior NUL or not representable).
    #[error("path cannot be passed to the decoder")]
    InvalidPath,
}

impl Error {
    /// The raw engine status behind this error, if it came from the engine.
    pub fn engine_code(&self) -> Option<EngineCode> {
        match *self {
            Error::InitializationFailed(code)
            | Error::OpenFailed(code)
            | Error::FormatConfigurationFailed(code)
            | Error::ReadFailed(code)
            | Error::SeekFailed(code)
            | Error::ParameterError(code) => Some(code),
            Error::InvalidSession | Error::UnsupportedEncoding(_) | Error::InvalidPath => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(unix)]
pub(crate) fn cstring_from_path(path: &Path) -> Result<std::ffi::CString> {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::CString::new(path.as_os_str().as_bytes()).map_err(|_| Error::InvalidPath)
}

// libmpg123 expects UTF-8 paths on non-unix targets.
#[cfg(not(unix))]
pub(crate) fn cstring_from_path(path: &Path) -> Result<std::ffi::CString> {
    let utf8 = path.to_str().ok_or(Error::InvalidPath)?;
    std::ffi::CString::new(utf8).map_err(|_| Error::InvalidPath)
}
