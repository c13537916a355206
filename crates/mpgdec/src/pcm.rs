//! Conversion of raw decoded PCM bytes into normalized `f32` samples.
//!
//! Every function here is pure: it takes the bytes, the [`Encoding`] they are in and
//! the channel count, and returns de-interleaved lanes of samples in roughly
//! `[-1.0, 1.0]`. Nothing here touches a decoding session.
//!
//! ## Scaling
//!
//! | Encoding | Formula |
//! |---|---|
//! | `U8` | `(s - 128) / 128` |
//! | `S8` | `s / 127` |
//! | `U16` | `(s - 32768) / 32768` |
//! | `S16` | `s / 32767` |
//! | `U24` | `(s - 8388608) / 8388608` |
//! | `S24` | `s / 8388608` |
//! | `U32` | `(s - 2147483648) / 2147483648` |
//! | `S32` | `s / 2147483647` |
//! | `F32` | unchanged |
//! | `F64` | narrowed to `f32` |
//! | `ULaw8` | `sign * ((mantissa << (exponent + 3)) + (33 << exponent)) / 32767` |
//! | `ALaw8` | ITU-T G.711 A-law expansion, `/ 32767` |
//!
//! The signed integer encodings divide by the positive maximum, so the most negative
//! value lands slightly below `-1.0` (`-32768 / 32767` for `S16`).
//!
//! Multi-byte samples are read little-endian.
//!
//! ## Partial frames
//! A frame is one sample per channel. When the input length is not a whole number
//! of frames, the trailing bytes are ignored and reported through
//! [`PcmBlock::trailing_bytes`].
//!
//! ## Channel limit
//! At most [`MAX_CHANNELS`] channels are accepted.
use crate::{audio::encoding::Encoding, EngineCode, Error, Result};

/// Largest channel count [`normalize`] accepts.
pub const MAX_CHANNELS: usize = 64;

const LAW_MAX: f32 = 32767.0;
const ULAW_BIAS: i32 = 33;

/// Normalized samples, one lane per channel.
///
/// All lanes have the same length, which is the frame count.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBlock {
    lanes: Vec<Vec<f32>>,
    trailing_bytes: usize,
}

impl PcmBlock {
    pub fn channels(&self) -> usize {
        self.lanes.len()
    }

    pub fn frames(&self) -> usize {
        self.lanes.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    pub fn lane(&self, channel: usize) -> Option<&[f32]> {
        self.lanes.get(channel).map(Vec::as_slice)
    }

    pub fn lanes(&self) -> &[Vec<f32>] {
        &self.lanes
    }

    pub fn into_lanes(self) -> Vec<Vec<f32>> {
        self.lanes
    }

    /// Bytes at the end of the input that did not form a whole frame.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    /// The samples re-interleaved frame by frame.
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frames();
        let mut out = Vec::with_capacity(frames * self.channels());
        for f in 0..frames {
            for lane in &self.lanes {
                out.push(lane[f]);
            }
        }
        out
    }
}

/// Normalizes `raw` bytes in `encoding` into `channels` lanes.
///
/// Fails with [`Error::ParameterError`] when `channels` is zero or above
/// [`MAX_CHANNELS`].
pub fn normalize(raw: &[u8], encoding: Encoding, channels: usize) -> Result<PcmBlock> {
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(Error::ParameterError(EngineCode::BAD_CHANNEL));
    }
    let width = encoding.bytes_per_sample();
    let frame_bytes = width
        .checked_mul(channels)
        .ok_or(Error::ParameterError(EngineCode::BAD_CHANNEL))?;

    let frames = raw.len() / frame_bytes;
    let trailing_bytes = raw.len() % frame_bytes;

    let mut lanes: Vec<Vec<f32>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();
    for frame in raw.chunks_exact(frame_bytes) {
        for (lane, sample) in lanes.iter_mut().zip(frame.chunks_exact(width)) {
            lane.push(sample_to_f32(encoding, sample));
        }
    }

    Ok(PcmBlock {
        lanes,
        trailing_bytes,
    })
}

/// Same as [`normalize`], taking the engine's numeric encoding code.
///
/// Codes outside the catalog fail with [`Error::UnsupportedEncoding`].
pub fn normalize_code(raw: &[u8], code: i32, channels: usize) -> Result<PcmBlock> {
    let encoding = Encoding::try_from(code)?;
    normalize(raw, encoding, channels)
}

/// Compatibility shim for encoding codes newer than this crate.
///
/// Unknown codes are decoded as signed 16-bit and a warning is logged. The result
/// is only correct if the producer really emitted `S16`; prefer [`normalize_code`].
pub fn normalize_lenient(raw: &[u8], code: i32, channels: usize) -> Result<PcmBlock> {
    let encoding = match Encoding::try_from(code) {
        Ok(encoding) => encoding,
        Err(_) => {
            tracing::warn!(code, "unknown sample encoding, decoding as signed 16-bit");
            Encoding::S16
        }
    };
    normalize(raw, encoding, channels)
}

// `s` is exactly `encoding.bytes_per_sample()` long.
#[inline]
fn sample_to_f32(encoding: Encoding, s: &[u8]) -> f32 {
    match encoding {
        Encoding::U8 => (s[0] as f32 - 128.0) / 128.0,
        Encoding::S8 => (s[0] as i8) as f32 / 127.0,
        Encoding::ULaw8 => ulaw_to_linear(s[0]) as f32 / LAW_MAX,
        Encoding::ALaw8 => alaw_to_linear(s[0]) as f32 / LAW_MAX,
        Encoding::U16 => (u16::from_le_bytes([s[0], s[1]]) as f32 - 32768.0) / 32768.0,
        Encoding::S16 => i16::from_le_bytes([s[0], s[1]]) as f32 / 32767.0,
        Encoding::U24 => {
            let v = u32::from_le_bytes([s[0], s[1], s[2], 0]);
            (v as f32 - 8_388_608.0) / 8_388_608.0
        }
        Encoding::S24 => {
            // Arithmetic shift sign-extends from bit 23.
            let v = i32::from_le_bytes([0, s[0], s[1], s[2]]) >> 8;
            v as f32 / 8_388_608.0
        }
        Encoding::U32 => {
            let v = u32::from_le_bytes([s[0], s[1], s[2], s[3]]);
            ((v as f64 - 2_147_483_648.0) / 2_147_483_648.0) as f32
        }
        Encoding::S32 => {
            let v = i32::from_le_bytes([s[0], s[1], s[2], s[3]]);
            (v as f64 / 2_147_483_647.0) as f32
        }
        Encoding::F32 => f32::from_le_bytes([s[0], s[1], s[2], s[3]]),
        Encoding::F64 => {
            f64::from_le_bytes([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]]) as f32
        }
    }
}

fn ulaw_to_linear(byte: u8) -> i32 {
    let exponent = ((byte & 0x70) >> 4) as i32;
    let mantissa = (byte & 0x0F) as i32;
    let magnitude = (mantissa << (exponent + 3)) + (ULAW_BIAS << exponent);
    if byte & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

fn alaw_to_linear(byte: u8) -> i32 {
    let a = byte ^ 0x55;
    let segment = ((a & 0x70) >> 4) as i32;
    let mut magnitude = ((a & 0x0F) as i32) << 4;
    match segment {
        0 => magnitude += 8,
        1 => magnitude += 0x108,
        _ => magnitude = (magnitude + 0x108) << (segment - 1),
    }
    if a & 0x80 != 0 {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_f32_eq(a: f32, b: f32) {
        assert!(
            (a - b).abs() <= 1.0e-6,
            "expected {a} ~= {b}, diff={}",
            (a - b).abs()
        );
    }

    #[test]
    fn test_pcm_empty_input_yields_zero_frames_for_every_encoding() {
        for enc in Encoding::ALL {
            let block = normalize(&[], enc, 2).unwrap();
            assert_eq!(block.frames(), 0, "{enc:?}");
            assert_eq!(block.channels(), 2);
            assert_eq!(block.trailing_bytes(), 0);
            assert!(block.is_empty());
        }
    }

    #[test]
    fn test_pcm_rejects_implausible_channel_count() {
        for channels in [MAX_CHANNELS + 1, usize::MAX / 64, usize::MAX] {
            assert_eq!(
                normalize(&[], Encoding::U8, channels).unwrap_err(),
                Error::ParameterError(EngineCode::BAD_CHANNEL)
            );
        }

        let block = normalize(&[0x80; MAX_CHANNELS], Encoding::U8, MAX_CHANNELS).unwrap();
        assert_eq!(block.channels(), MAX_CHANNELS);
        assert_eq!(block.frames(), 1);
    }

    #[test]
    fn test_pcm_u8_scaling() {
        let block = normalize(&[0x00, 0xFF, 0x80], Encoding::U8, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], -1.0);
        assert_f32_eq(lane[1], 0.992_187_5);
        assert_f32_eq(lane[2], 0.0);
    }

    #[test]
    fn test_pcm_s8_scaling() {
        let block = normalize(&[127, 0, 0x81], Encoding::S8, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], 1.0);
        assert_f32_eq(lane[1], 0.0);
        assert_f32_eq(lane[2], -1.0);
    }

    #[test]
    fn test_pcm_s16_scaling_is_asymmetric() {
        let mut raw = Vec::new();
        for v in [32767i16, -32768, 0] {
            raw.extend_from_slice(&v.to_le_bytes());
        }
        let block = normalize(&raw, Encoding::S16, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], 1.0);
        assert_f32_eq(lane[1], -32768.0 / 32767.0);
        assert!(lane[1] < -1.0);
        assert_f32_eq(lane[2], 0.0);
    }

    #[test]
    fn test_pcm_u16_scaling() {
        let mut raw = Vec::new();
        for v in [0u16, 32768, 65535] {
            raw.extend_from_slice(&v.to_le_bytes());
        }
        let block = normalize(&raw, Encoding::U16, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], -1.0);
        assert_f32_eq(lane[1], 0.0);
        assert_f32_eq(lane[2], 32767.0 / 32768.0);
    }

    #[test]
    fn test_pcm_s24_sign_extends_from_bit_23() {
        let block = normalize(&[0x00, 0x00, 0x80], Encoding::S24, 1).unwrap();
        assert_eq!(block.lane(0).unwrap()[0], -1.0);

        let block = normalize(&[0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF], Encoding::S24, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], 8_388_607.0 / 8_388_608.0);
        assert_f32_eq(lane[1], -1.0 / 8_388_608.0);
    }

    #[test]
    fn test_pcm_u24_scaling() {
        let block = normalize(&[0x00, 0x00, 0x80, 0x00, 0x00, 0x00], Encoding::U24, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], 0.0);
        assert_f32_eq(lane[1], -1.0);
    }

    #[test]
    fn test_pcm_32_bit_integer_scaling() {
        let block = normalize(&i32::MAX.to_le_bytes(), Encoding::S32, 1).unwrap();
        assert_f32_eq(block.lane(0).unwrap()[0], 1.0);

        let block = normalize(&0u32.to_le_bytes(), Encoding::U32, 1).unwrap();
        assert_f32_eq(block.lane(0).unwrap()[0], -1.0);

        let block = normalize(&0x8000_0000u32.to_le_bytes(), Encoding::U32, 1).unwrap();
        assert_f32_eq(block.lane(0).unwrap()[0], 0.0);
    }

    #[test]
    fn test_pcm_float_passthrough() {
        let block = normalize(&0.25f32.to_le_bytes(), Encoding::F32, 1).unwrap();
        assert_eq!(block.lane(0).unwrap()[0], 0.25);

        let block = normalize(&(-0.5f64).to_le_bytes(), Encoding::F64, 1).unwrap();
        assert_eq!(block.lane(0).unwrap()[0], -0.5);
    }

    #[test]
    fn test_pcm_ulaw_expansion() {
        let block = normalize(&[0x00, 0x80, 0x7F, 0x15], Encoding::ULaw8, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], 33.0 / 32767.0);
        assert_f32_eq(lane[1], -33.0 / 32767.0);
        // exponent 7, mantissa 15
        assert_f32_eq(lane[2], ((15 << 10) + (33 << 7)) as f32 / 32767.0);
        // exponent 1, mantissa 5
        assert_f32_eq(lane[3], ((5 << 4) + (33 << 1)) as f32 / 32767.0);
    }

    #[test]
    fn test_pcm_alaw_expansion() {
        let block = normalize(&[0xD5, 0x55, 0xAA, 0x2A], Encoding::ALaw8, 1).unwrap();
        let lane = block.lane(0).unwrap();
        assert_f32_eq(lane[0], 8.0 / 32767.0);
        assert_f32_eq(lane[1], -8.0 / 32767.0);
        assert_f32_eq(lane[2], 32256.0 / 32767.0);
        assert_f32_eq(lane[3], -32256.0 / 32767.0);
    }

    #[test]
    fn test_pcm_lanes_are_deinterleaved() {
        let mut raw = Vec::new();
        for v in [1000i16, -1000, 2000, -2000, 3000, -3000] {
            raw.extend_from_slice(&v.to_le_bytes());
        }
        let block = normalize(&raw, Encoding::S16, 2).unwrap();
        assert_eq!(block.channels(), 2);
        assert_eq!(block.frames(), 3);

        let left = block.lane(0).unwrap();
        let right = block.lane(1).unwrap();
        for (l, r) in left.iter().zip(right) {
            assert!(*l > 0.0);
            assert_f32_eq(*l, -*r);
        }
        assert!(block.lane(2).is_none());

        let interleaved = block.interleaved();
        assert_eq!(interleaved.len(), 6);
        assert_f32_eq(interleaved[0], 1000.0 / 32767.0);
        assert_f32_eq(interleaved[1], -1000.0 / 32767.0);
        assert_f32_eq(interleaved[4], 3000.0 / 32767.0);
    }

    #[test]
    fn test_pcm_partial_frame_is_truncated_and_reported() {
        // Two stereo S16 frames plus three stray bytes.
        let raw = [0u8; 8 + 3];
        let block = normalize(&raw, Encoding::S16, 2).unwrap();
        assert_eq!(block.frames(), 2);
        assert_eq!(block.trailing_bytes(), 3);
    }

    #[test]
    fn test_pcm_zero_channels_is_rejected() {
        let err = normalize(&[0u8; 4], Encoding::S16, 0).unwrap_err();
        assert_eq!(err, Error::ParameterError(EngineCode::BAD_CHANNEL));
    }

    #[test]
    fn test_pcm_unknown_code_is_rejected() {
        let err = normalize_code(&[0u8; 4], 0x7777, 1).unwrap_err();
        assert_eq!(err, Error::UnsupportedEncoding(0x7777));

        let ok = normalize_code(&[0x80], Encoding::U8.code(), 1).unwrap();
        assert_f32_eq(ok.lane(0).unwrap()[0], 0.0);
    }

    #[test]
    fn test_pcm_lenient_falls_back_to_s16() {
        let raw = 32767i16.to_le_bytes();
        let block = normalize_lenient(&raw, 0x7777, 1).unwrap();
        assert_f32_eq(block.lane(0).unwrap()[0], 1.0);

        // Known codes are not affected by the shim.
        let block = normalize_lenient(&[0x00], Encoding::U8.code(), 1).unwrap();
        assert_f32_eq(block.lane(0).unwrap()[0], -1.0);
    }
}
