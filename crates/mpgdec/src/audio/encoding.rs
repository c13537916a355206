//! The closed catalog of decoded sample encodings.
use mpgdec_sys::ffi as sys;

use crate::Error;

/// How raw sample values relate to amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Sample value is proportional to amplitude (integer or float PCM).
    Linear,
    /// 8-bit logarithmic encoding that must be expanded before use (mu-law, A-law).
    Companded,
}

/// Sample encoding of decoded PCM.
///
/// This is the full set of output encodings libmpg123 can produce. Every encoding
/// carries its width, signedness and kind, so callers never derive those from the
/// numeric code themselves:
///
/// | Encoding | Bytes | Kind | Signed |
/// |---|---|---|---|
/// | `U8` | 1 | linear | no |
/// | `S8` | 1 | linear | yes |
/// | `ULaw8` | 1 | companded | yes |
/// | `ALaw8` | 1 | companded | yes |
/// | `U16` | 2 | linear | no |
/// | `S16` | 2 | linear | yes |
/// | `U24` | 3 | linear | no |
/// | `S24` | 3 | linear | yes |
/// | `U32` | 4 | linear | no |
/// | `S32` | 4 | linear | yes |
/// | `F32` | 4 | linear | yes |
/// | `F64` | 8 | linear | yes |
///
/// The companded encodings carry a sign bit, so they are reported as signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    U8,
    S8,
    ULaw8,
    ALaw8,
    U16,
    S16,
    U24,
    S24,
    U32,
    S32,
    F32,
    F64,
}

impl Encoding {
    /// Every supported encoding, in catalog order.
    pub const ALL: [Encoding; 12] = [
        Encoding::U8,
        Encoding::S8,
        Encoding::ULaw8,
        Encoding::ALaw8,
        Encoding::U16,
        Encoding::S16,
        Encoding::U24,
        Encoding::S24,
        Encoding::U32,
        Encoding::S32,
        Encoding::F32,
        Encoding::F64,
    ];

    pub const fn bytes_per_sample(self) -> usize {
        match self {
            Encoding::U8 | Encoding::S8 | Encoding::ULaw8 | Encoding::ALaw8 => 1,
            Encoding::U16 | Encoding::S16 => 2,
            Encoding::U24 | Encoding::S24 => 3,
            Encoding::U32 | Encoding::S32 | Encoding::F32 => 4,
            Encoding::F64 => 8,
        }
    }

    pub const fn kind(self) -> SampleKind {
        match self {
            Encoding::ULaw8 | Encoding::ALaw8 => SampleKind::Companded,
            _ => SampleKind::Linear,
        }
    }

    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Encoding::U8 | Encoding::U16 | Encoding::U24 | Encoding::U32
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Encoding::F32 | Encoding::F64)
    }

    /// The engine's numeric code for this encoding.
    #[inline]
    pub fn code(self) -> i32 {
        sys::mpg123_enc_enum::from(self) as i32
    }
}

impl From<Encoding> for sys::mpg123_enc_enum {
    fn from(value: Encoding) -> Self {
        match value {
            Encoding::U8 => sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_8,
            Encoding::S8 => sys::mpg123_enc_enum_MPG123_ENC_SIGNED_8,
            Encoding::ULaw8 => sys::mpg123_enc_enum_MPG123_ENC_ULAW_8,
            Encoding::ALaw8 => sys::mpg123_enc_enum_MPG123_ENC_ALAW_8,
            Encoding::U16 => sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_16,
            Encoding::S16 => sys::mpg123_enc_enum_MPG123_ENC_SIGNED_16,
            Encoding::U24 => sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_24,
            Encoding::S24 => sys::mpg123_enc_enum_MPG123_ENC_SIGNED_24,
            Encoding::U32 => sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_32,
            Encoding::S32 => sys::mpg123_enc_enum_MPG123_ENC_SIGNED_32,
            Encoding::F32 => sys::mpg123_enc_enum_MPG123_ENC_FLOAT_32,
            Encoding::F64 => sys::mpg123_enc_enum_MPG123_ENC_FLOAT_64,
        }
    }
}

impl TryFrom<i32> for Encoding {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let Ok(raw) = sys::mpg123_enc_enum::try_from(value) else {
            return Err(Error::UnsupportedEncoding(value));
        };
        match raw {
            sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_8 => Ok(Encoding::U8),
            sys::mpg123_enc_enum_MPG123_ENC_SIGNED_8 => Ok(Encoding::S8),
            sys::mpg123_enc_enum_MPG123_ENC_ULAW_8 => Ok(Encoding::ULaw8),
            sys::mpg123_enc_enum_MPG123_ENC_ALAW_8 => Ok(Encoding::ALaw8),
            sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_16 => Ok(Encoding::U16),
            sys::mpg123_enc_enum_MPG123_ENC_SIGNED_16 => Ok(Encoding::S16),
            sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_24 => Ok(Encoding::U24),
            sys::mpg123_enc_enum_MPG123_ENC_SIGNED_24 => Ok(Encoding::S24),
            sys::mpg123_enc_enum_MPG123_ENC_UNSIGNED_32 => Ok(Encoding::U32),
            sys::mpg123_enc_enum_MPG123_ENC_SIGNED_32 => Ok(Encoding::S32),
            sys::mpg123_enc_enum_MPG123_ENC_FLOAT_32 => Ok(Encoding::F32),
            sys::mpg123_enc_enum_MPG123_ENC_FLOAT_64 => Ok(Encoding::F64),
            _ => Err(Error::UnsupportedEncoding(value)),
        }
    }
}
