//! Engine parameters, decoder flags and library capability queries.
//!
//! Parameters are applied per session, either up front through
//! [`SessionBuilder`](crate::session::builder::SessionBuilder) or later with
//! [`DecodingSession::set_param()`](crate::DecodingSession::set_param()).
//! Features and the library version are process-wide and need no session.
use mpgdec_sys::ffi as sys;

/// A tunable engine parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Verbosity of the engine's own stderr diagnostics.
    Verbose,
    /// Replace the decoder flags. See [`DecoderFlags`].
    Flags,
    /// Set additional decoder flags.
    AddFlags,
    /// Clear decoder flags.
    RemoveFlags,
    /// Force a fixed output sample rate (0 disables).
    ForceRate,
    /// 0 = native rate, 1 = half rate, 2 = quarter rate.
    DownSample,
    /// Replay gain mode. See [`RvaMode`].
    Rva,
    /// Play every n-th frame only.
    DownSpeed,
    /// Play every frame n times.
    UpSpeed,
    /// Start decoding at this frame.
    StartFrame,
    /// Stop after decoding this many frames (0 = all).
    DecodeFrames,
    /// Stream interval for ICY metadata.
    IcyInterval,
    /// Output scale factor, read and written as a float.
    Outscale,
    /// Read timeout in seconds for network readers.
    Timeout,
    /// How many bytes to scan for the next frame header on resync (-1 = unlimited).
    ResyncLimit,
    /// Size of the frame index (negative: growing index).
    IndexSize,
    /// Number of frames decoded ahead of a seek target.
    Preframes,
    /// Number of buffer chunks kept in the feed pool.
    FeedPool,
    /// Minimal buffer size for feed-mode chunks.
    FeedBuffer,
    /// Frame size to assume for free-format streams.
    FreeformatSize,
}

impl From<Param> for sys::mpg123_parms {
    fn from(value: Param) -> Self {
        match value {
            Param::Verbose => sys::mpg123_parms_MPG123_VERBOSE,
            Param::Flags => sys::mpg123_parms_MPG123_FLAGS,
            Param::AddFlags => sys::mpg123_parms_MPG123_ADD_FLAGS,
            Param::RemoveFlags => sys::mpg123_parms_MPG123_REMOVE_FLAGS,
            Param::ForceRate => sys::mpg123_parms_MPG123_FORCE_RATE,
            Param::DownSample => sys::mpg123_parms_MPG123_DOWN_SAMPLE,
            Param::Rva => sys::mpg123_parms_MPG123_RVA,
            Param::DownSpeed => sys::mpg123_parms_MPG123_DOWNSPEED,
            Param::UpSpeed => sys::mpg123_parms_MPG123_UPSPEED,
            Param::StartFrame => sys::mpg123_parms_MPG123_START_FRAME,
            Param::DecodeFrames => sys::mpg123_parms_MPG123_DECODE_FRAMES,
            Param::IcyInterval => sys::mpg123_parms_MPG123_ICY_INTERVAL,
            Param::Outscale => sys::mpg123_parms_MPG123_OUTSCALE,
            Param::Timeout => sys::mpg123_parms_MPG123_TIMEOUT,
            Param::ResyncLimit => sys::mpg123_parms_MPG123_RESYNC_LIMIT,
            Param::IndexSize => sys::mpg123_parms_MPG123_INDEX_SIZE,
            Param::Preframes => sys::mpg123_parms_MPG123_PREFRAMES,
            Param::FeedPool => sys::mpg123_parms_MPG123_FEEDPOOL,
            Param::FeedBuffer => sys::mpg123_parms_MPG123_FEEDBUFFER,
            Param::FreeformatSize => sys::mpg123_parms_MPG123_FREEFORMAT_SIZE,
        }
    }
}

pub type DecoderFlagsRaw = sys::mpg123_param_flags;

/// Bitflags controlling decoder behavior.
///
/// Typed wrapper around libmpg123's `mpg123_param_flags`. Passed through
/// [`Param::Flags`], [`Param::AddFlags`] and [`Param::RemoveFlags`].
#[repr(transparent)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Hash, Eq)]
pub struct DecoderFlags(DecoderFlagsRaw);

impl DecoderFlags {
    pub const NONE: Self = Self(0);
    /// Any of the three mono downmix modes.
    pub const FORCE_MONO: Self = Self(sys::mpg123_param_flags_MPG123_FORCE_MONO);
    pub const MONO_LEFT: Self = Self(sys::mpg123_param_flags_MPG123_MONO_LEFT);
    pub const MONO_RIGHT: Self = Self(sys::mpg123_param_flags_MPG123_MONO_RIGHT);
    pub const MONO_MIX: Self = Self(sys::mpg123_param_flags_MPG123_MONO_MIX);
    /// Duplicate mono input to both output channels.
    pub const FORCE_STEREO: Self = Self(sys::mpg123_param_flags_MPG123_FORCE_STEREO);
    pub const FORCE_8BIT: Self = Self(sys::mpg123_param_flags_MPG123_FORCE_8BIT);
    /// Suppress the engine's own diagnostics on stderr.
    pub const QUIET: Self = Self(sys::mpg123_param_flags_MPG123_QUIET);
    /// Trim encoder delay and padding when the stream carries the information.
    pub const GAPLESS: Self = Self(sys::mpg123_param_flags_MPG123_GAPLESS);
    /// Fail instead of resyncing on a broken stream.
    pub const NO_RESYNC: Self = Self(sys::mpg123_param_flags_MPG123_NO_RESYNC);
    pub const SEEKBUFFER: Self = Self(sys::mpg123_param_flags_MPG123_SEEKBUFFER);
    /// Approximate seeking without an index.
    pub const FUZZY: Self = Self(sys::mpg123_param_flags_MPG123_FUZZY);
    pub const FORCE_FLOAT: Self = Self(sys::mpg123_param_flags_MPG123_FORCE_FLOAT);
    pub const PLAIN_ID3TEXT: Self = Self(sys::mpg123_param_flags_MPG123_PLAIN_ID3TEXT);
    pub const IGNORE_STREAMLENGTH: Self =
        Self(sys::mpg123_param_flags_MPG123_IGNORE_STREAMLENGTH);
    pub const SKIP_ID3V2: Self = Self(sys::mpg123_param_flags_MPG123_SKIP_ID3V2);
    pub const IGNORE_INFOFRAME: Self = Self(sys::mpg123_param_flags_MPG123_IGNORE_INFOFRAME);
    pub const AUTO_RESAMPLE: Self = Self(sys::mpg123_param_flags_MPG123_AUTO_RESAMPLE);
    /// Keep embedded pictures from ID3v2 tags.
    pub const PICTURE: Self = Self(sys::mpg123_param_flags_MPG123_PICTURE);
    pub const NO_PEEK_END: Self = Self(sys::mpg123_param_flags_MPG123_NO_PEEK_END);
    pub const FORCE_SEEKABLE: Self = Self(sys::mpg123_param_flags_MPG123_FORCE_SEEKABLE);
    pub const STORE_RAW_ID3: Self = Self(sys::mpg123_param_flags_MPG123_STORE_RAW_ID3);
    pub const FORCE_ENDIAN: Self = Self(sys::mpg123_param_flags_MPG123_FORCE_ENDIAN);
    pub const BIG_ENDIAN: Self = Self(sys::mpg123_param_flags_MPG123_BIG_ENDIAN);
    pub const NO_READAHEAD: Self = Self(sys::mpg123_param_flags_MPG123_NO_READAHEAD);
    pub const FLOAT_FALLBACK: Self = Self(sys::mpg123_param_flags_MPG123_FLOAT_FALLBACK);
    pub const NO_FRANKENSTEIN: Self = Self(sys::mpg123_param_flags_MPG123_NO_FRANKENSTEIN);

    #[inline]
    #[allow(clippy::unnecessary_cast)]
    pub fn bits(self) -> u32 {
        self.0 as u32
    }

    /// Set or clear bits
    #[inline]
    pub fn set(&mut self, other: Self, enabled: bool) {
        if enabled {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits as DecoderFlagsRaw)
    }

    /// Check if all the bits in other are set
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the bits in other are set
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for DecoderFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for DecoderFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Replay gain (relative volume adjustment) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RvaMode {
    #[default]
    Off,
    /// Per-track gain.
    Mix,
    /// Per-album gain.
    Album,
}

impl From<RvaMode> for sys::mpg123_param_rva {
    fn from(value: RvaMode) -> Self {
        match value {
            RvaMode::Off => sys::mpg123_param_rva_MPG123_RVA_OFF,
            RvaMode::Mix => sys::mpg123_param_rva_MPG123_RVA_MIX,
            RvaMode::Album => sys::mpg123_param_rva_MPG123_RVA_ALBUM,
        }
    }
}

/// A capability the linked libmpg123 build may or may not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    AbiUtf8Open,
    Output8Bit,
    Output16Bit,
    Output32Bit,
    Index,
    ParseId3v2,
    DecodeLayer1,
    DecodeLayer2,
    DecodeLayer3,
    DecodeAccurate,
    DecodeDownsample,
    DecodeNtoM,
    ParseIcy,
    TimeoutRead,
    Equalizer,
    MoreInfo,
    OutputFloat32,
    OutputFloat64,
}

impl From<Feature> for sys::mpg123_feature_set {
    fn from(value: Feature) -> Self {
        match value {
            Feature::AbiUtf8Open => sys::mpg123_feature_set_MPG123_FEATURE_ABI_UTF8OPEN,
            Feature::Output8Bit => sys::mpg123_feature_set_MPG123_FEATURE_OUTPUT_8BIT,
            Feature::Output16Bit => sys::mpg123_feature_set_MPG123_FEATURE_OUTPUT_16BIT,
            Feature::Output32Bit => sys::mpg123_feature_set_MPG123_FEATURE_OUTPUT_32BIT,
            Feature::Index => sys::mpg123_feature_set_MPG123_FEATURE_INDEX,
            Feature::ParseId3v2 => sys::mpg123_feature_set_MPG123_FEATURE_PARSE_ID3V2,
            Feature::DecodeLayer1 => sys::mpg123_feature_set_MPG123_FEATURE_DECODE_LAYER1,
            Feature::DecodeLayer2 => sys::mpg123_feature_set_MPG123_FEATURE_DECODE_LAYER2,
            Feature::DecodeLayer3 => sys::mpg123_feature_set_MPG123_FEATURE_DECODE_LAYER3,
            Feature::DecodeAccurate => sys::mpg123_feature_set_MPG123_FEATURE_DECODE_ACCURATE,
            Feature::DecodeDownsample => {
                sys::mpg123_feature_set_MPG123_FEATURE_DECODE_DOWNSAMPLE
            }
            Feature::DecodeNtoM => sys::mpg123_feature_set_MPG123_FEATURE_DECODE_NTOM,
            Feature::ParseIcy => sys::mpg123_feature_set_MPG123_FEATURE_PARSE_ICY,
            Feature::TimeoutRead => sys::mpg123_feature_set_MPG123_FEATURE_TIMEOUT_READ,
            Feature::Equalizer => sys::mpg123_feature_set_MPG123_FEATURE_EQUALIZER,
            Feature::MoreInfo => sys::mpg123_feature_set_MPG123_FEATURE_MOREINFO,
            Feature::OutputFloat32 => sys::mpg123_feature_set_MPG123_FEATURE_OUTPUT_FLOAT32,
            Feature::OutputFloat64 => sys::mpg123_feature_set_MPG123_FEATURE_OUTPUT_FLOAT64,
        }
    }
}

/// Whether the linked libmpg123 was built with `feature`.
pub fn has_feature(feature: Feature) -> bool {
    params_ffi::mpg123_feature2(feature)
}

/// Version of the linked libmpg123.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// `MPG123_API_VERSION` the library was built with.
    pub api: u32,
}

impl std::fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{} (api {})", self.major, self.minor, self.patch, self.api)
    }
}

pub fn library_version() -> LibraryVersion {
    let (major, minor, patch) = params_ffi::mpg123_distversion();
    LibraryVersion {
        major,
        minor,
        patch,
        api: params_ffi::mpg123_libversion(),
    }
}

pub(crate) mod params_ffi {
    use mpgdec_sys::ffi as sys;

    use crate::params::Feature;

    #[inline]
    pub fn mpg123_feature2(feature: Feature) -> bool {
        let key = sys::mpg123_feature_set::from(feature) as core::ffi::c_int;
        unsafe { sys::mpg123_feature2(key) != 0 }
    }

    #[inline]
    pub fn mpg123_libversion() -> u32 {
        let mut patch: core::ffi::c_uint = 0;
        unsafe { sys::mpg123_libversion(&mut patch) }
    }

    #[inline]
    pub fn mpg123_distversion() -> (u32, u32, u32) {
        let mut major: core::ffi::c_uint = 0;
        let mut minor: core::ffi::c_uint = 0;
        let mut patch: core::ffi::c_uint = 0;
        unsafe {
            sys::mpg123_distversion(&mut major, &mut minor, &mut patch);
        }
        (major, minor, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_flags_set_and_contains() {
        let mut flags = DecoderFlags::NONE;
        assert!(flags.is_none());

        flags.set(DecoderFlags::QUIET, true);
        flags |= DecoderFlags::GAPLESS;
        assert!(flags.contains(DecoderFlags::QUIET | DecoderFlags::GAPLESS));
        assert_eq!(flags.bits(), 0x20 | 0x40);

        flags.set(DecoderFlags::QUIET, false);
        assert!(!flags.contains(DecoderFlags::QUIET));
        assert!(flags.intersects(DecoderFlags::GAPLESS | DecoderFlags::FUZZY));
    }

    #[test]
    fn test_params_force_mono_covers_all_mono_modes() {
        let mono = DecoderFlags::FORCE_MONO;
        assert!(mono.contains(DecoderFlags::MONO_LEFT));
        assert!(mono.contains(DecoderFlags::MONO_RIGHT));
        assert!(mono.contains(DecoderFlags::MONO_MIX));
        assert!(!mono.intersects(DecoderFlags::FORCE_STEREO));
    }

    #[test]
    fn test_params_into_sys_matches_expected_constants() {
        assert_eq!(sys::mpg123_parms::from(Param::Verbose), 0);
        assert_eq!(sys::mpg123_parms::from(Param::Outscale), 11);
        assert_eq!(sys::mpg123_parms::from(Param::RemoveFlags), 13);
        assert_eq!(sys::mpg123_parms::from(Param::FreeformatSize), 19);
        assert_eq!(sys::mpg123_param_rva::from(RvaMode::Album), 2);
        assert_eq!(sys::mpg123_feature_set::from(Feature::Equalizer), 14);
    }

    #[test]
    fn test_params_linked_library_decodes_layer3() {
        assert!(has_feature(Feature::DecodeLayer3));
        assert!(has_feature(Feature::Output16Bit));
    }

    #[test]
    fn test_params_library_version_is_recent_enough() {
        let version = library_version();
        assert!(version.major >= 1);
        if version.major == 1 {
            assert!(version.minor >= 32, "linked libmpg123 is {version}");
        }
        assert!(version.api >= 48, "linked libmpg123 is {version}");
    }
}
