//! Descriptor of one decoded MPEG frame.
use mpgdec_sys::ffi as sys;

use crate::{EngineCode, Error};

/// MPEG audio version of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegVersion {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

impl TryFrom<i32> for MpegVersion {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value as sys::mpg123_version {
            sys::mpg123_version_MPG123_1_0 => Ok(MpegVersion::Mpeg1),
            sys::mpg123_version_MPG123_2_0 => Ok(MpegVersion::Mpeg2),
            sys::mpg123_version_MPG123_2_5 => Ok(MpegVersion::Mpeg25),
            _ => Err(Error::ReadFailed(EngineCode::ERR)),
        }
    }
}

/// Channel mode signalled in the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

impl TryFrom<i32> for ChannelMode {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value as sys::mpg123_mode {
            sys::mpg123_mode_MPG123_M_STEREO => Ok(ChannelMode::Stereo),
            sys::mpg123_mode_MPG123_M_JOINT => Ok(ChannelMode::JointStereo),
            sys::mpg123_mode_MPG123_M_DUAL => Ok(ChannelMode::DualChannel),
            sys::mpg123_mode_MPG123_M_MONO => Ok(ChannelMode::Mono),
            _ => Err(Error::ReadFailed(EngineCode::ERR)),
        }
    }
}

/// Bitrate mode of the stream the frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitrateMode {
    Constant,
    Variable,
    Average,
}

impl TryFrom<i32> for BitrateMode {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value as sys::mpg123_vbr {
            sys::mpg123_vbr_MPG123_CBR => Ok(BitrateMode::Constant),
            sys::mpg123_vbr_MPG123_VBR => Ok(BitrateMode::Variable),
            sys::mpg123_vbr_MPG123_ABR => Ok(BitrateMode::Average),
            _ => Err(Error::ReadFailed(EngineCode::ERR)),
        }
    }
}

/// Header flag bits of a frame.
#[repr(transparent)]
#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq)]
pub struct FrameFlags(u32);

impl FrameFlags {
    pub const NONE: Self = Self(0);
    /// The frame is protected by a CRC.
    pub const CRC: Self = Self(sys::mpg123_flags_MPG123_CRC);
    pub const COPYRIGHT: Self = Self(sys::mpg123_flags_MPG123_COPYRIGHT);
    pub const PRIVATE: Self = Self(sys::mpg123_flags_MPG123_PRIVATE);
    pub const ORIGINAL: Self = Self(sys::mpg123_flags_MPG123_ORIGINAL);

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Snapshot of the engine's description of the most recently decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub version: MpegVersion,
    /// MPEG layer, 1 to 3.
    pub layer: u8,
    pub rate_hz: u32,
    pub channel_mode: ChannelMode,
    /// Joint stereo mode extension bits.
    pub mode_extension: u8,
    /// Frame size in bytes, header excluded.
    pub frame_size_bytes: u32,
    pub flags: FrameFlags,
    pub emphasis: u8,
    pub bitrate_kbps: u32,
    /// Target bitrate for ABR streams, 0 otherwise.
    pub average_bitrate_kbps: u32,
    pub vbr: BitrateMode,
}

impl FrameInfo {
    #[inline]
    pub fn is_variable_bitrate(&self) -> bool {
        self.vbr != BitrateMode::Constant
    }
}

impl TryFrom<sys::mpg123_frameinfo2> for FrameInfo {
    type Error = Error;

    fn try_from(raw: sys::mpg123_frameinfo2) -> Result<Self, Self::Error> {
        Ok(Self {
            version: MpegVersion::try_from(raw.version)?,
            layer: raw.layer as u8,
            rate_hz: raw.rate as u32,
            channel_mode: ChannelMode::try_from(raw.mode)?,
            mode_extension: raw.mode_ext as u8,
            frame_size_bytes: raw.framesize as u32,
            flags: FrameFlags::from_bits(raw.flags as u32),
            emphasis: raw.emphasis as u8,
            bitrate_kbps: raw.bitrate as u32,
            average_bitrate_kbps: raw.abr_rate as u32,
            vbr: BitrateMode::try_from(raw.vbr)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_info() -> sys::mpg123_frameinfo2 {
        sys::mpg123_frameinfo2 {
            version: sys::mpg123_version_MPG123_1_0 as i32,
            layer: 3,
            rate: 44_100,
            mode: sys::mpg123_mode_MPG123_M_JOINT as i32,
            mode_ext: 2,
            framesize: 413,
            flags: (sys::mpg123_flags_MPG123_CRC | sys::mpg123_flags_MPG123_ORIGINAL) as i32,
            emphasis: 0,
            bitrate: 128,
            abr_rate: 0,
            vbr: sys::mpg123_vbr_MPG123_CBR as i32,
        }
    }

    #[test]
    fn test_frame_info_from_raw_copies_fields() {
        let info = FrameInfo::try_from(raw_info()).unwrap();
        assert_eq!(info.version, MpegVersion::Mpeg1);
        assert_eq!(info.layer, 3);
        assert_eq!(info.rate_hz, 44_100);
        assert_eq!(info.channel_mode, ChannelMode::JointStereo);
        assert_eq!(info.mode_extension, 2);
        assert_eq!(info.frame_size_bytes, 413);
        assert!(info.flags.contains(FrameFlags::CRC));
        assert!(info.flags.contains(FrameFlags::ORIGINAL));
        assert!(!info.flags.contains(FrameFlags::COPYRIGHT));
        assert_eq!(info.bitrate_kbps, 128);
        assert!(!info.is_variable_bitrate());
    }

    #[test]
    fn test_frame_info_vbr_and_abr_are_variable() {
        let mut raw = raw_info();
        raw.vbr = sys::mpg123_vbr_MPG123_VBR as i32;
        assert!(FrameInfo::try_from(raw).unwrap().is_variable_bitrate());

        raw.vbr = sys::mpg123_vbr_MPG123_ABR as i32;
        raw.abr_rate = 192;
        let info = FrameInfo::try_from(raw).unwrap();
        assert_eq!(info.vbr, BitrateMode::Average);
        assert_eq!(info.average_bitrate_kbps, 192);
        assert!(info.is_variable_bitrate());
    }

    #[test]
    fn test_frame_info_rejects_unknown_mode() {
        let mut raw = raw_info();
        raw.mode = 9;
        assert!(FrameInfo::try_from(raw).is_err());
    }
}
