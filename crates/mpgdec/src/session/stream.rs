//! Pulling decoded PCM out of an open session.
//!
//! Chunks are owned copies of the decoded bytes in the session's current
//! [`OutputFormat`](crate::session::OutputFormat). Frame decoding additionally reports
//! the frame sequence number and the frame header description.
use crate::{
    audio::frame_info::FrameInfo,
    session::{session_ffi, DecodingSession, DEFAULT_CHUNK_SIZE},
    EngineCode, Error, Result,
};

/// Owned block of decoded PCM bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioChunk {
    data: Vec<u8>,
}

impl AudioChunk {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for AudioChunk {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<AudioChunk> for Vec<u8> {
    fn from(chunk: AudioChunk) -> Self {
        chunk.data
    }
}

/// One decoded MPEG frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedUnit {
    /// Frame number the engine assigned to this unit.
    pub sequence: i64,
    pub audio: AudioChunk,
    pub info: FrameInfo,
}

impl DecodingSession {
    /// Decodes up to `max_bytes` of PCM.
    ///
    /// An empty chunk means the end of the stream. A chunk shorter than `max_bytes`
    /// does not.
    pub fn pull_chunk(&mut self, max_bytes: usize) -> Result<AudioChunk> {
        self.require_open()?;
        let mut buf = vec![0u8; max_bytes];
        loop {
            let (res, done) = session_ffi::mpg123_read(self.handle_mut(), &mut buf);
            match EngineCode(res) {
                EngineCode::OK | EngineCode::DONE => {
                    buf.truncate(done);
                    tracing::trace!(bytes = done, "pulled pcm chunk");
                    return Ok(AudioChunk::new(buf));
                }
                EngineCode::NEW_FORMAT => {
                    self.refresh_format()?;
                    if done > 0 {
                        buf.truncate(done);
                        return Ok(AudioChunk::new(buf));
                    }
                }
                code => return Err(Error::ReadFailed(self.handle().refine(code))),
            }
        }
    }

    /// Iterates over chunks of at most `chunk_size` bytes until the stream ends.
    ///
    /// The iterator stops after the first error, which it yields.
    pub fn chunks(&mut self, chunk_size: usize) -> Chunks<'_> {
        Chunks {
            session: self,
            chunk_size,
            finished: chunk_size == 0,
        }
    }

    /// Decodes the rest of the stream into one buffer.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for chunk in self.chunks(DEFAULT_CHUNK_SIZE) {
            out.extend_from_slice(chunk?.as_bytes());
        }
        tracing::debug!(bytes = out.len(), "decoded stream to end");
        Ok(out)
    }

    /// Decodes the next MPEG frame.
    ///
    /// Returns `Ok(None)` at the end of a file, and in feed mode when the engine needs
    /// more input before it can produce another frame.
    pub fn decode_frame(&mut self) -> Result<Option<DecodedUnit>> {
        self.require_open()?;
        loop {
            let (res, sequence, data) = session_ffi::mpg123_decode_frame64(self.handle_mut());
            match EngineCode(res) {
                EngineCode::OK => {
                    let info = self.frame_info()?;
                    return Ok(Some(DecodedUnit {
                        sequence,
                        audio: AudioChunk::new(data),
                        info,
                    }));
                }
                EngineCode::DONE | EngineCode::NEED_MORE => return Ok(None),
                EngineCode::NEW_FORMAT => self.refresh_format()?,
                code => return Err(Error::ReadFailed(self.handle().refine(code))),
            }
        }
    }

    /// Header description of the most recently decoded frame.
    pub fn frame_info(&self) -> Result<FrameInfo> {
        self.require_open()?;
        let raw = session_ffi::mpg123_info2(self.handle()).map_err(Error::ReadFailed)?;
        FrameInfo::try_from(raw)
    }
}

/// Iterator returned by [`DecodingSession::chunks()`].
pub struct Chunks<'a> {
    session: &'a mut DecodingSession,
    chunk_size: usize,
    finished: bool,
}

impl Iterator for Chunks<'_> {
    type Item = Result<AudioChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.session.pull_chunk(self.chunk_size) {
            Ok(chunk) if chunk.is_empty() => {
                self.finished = true;
                None
            }
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}

#[cfg(test)]
mod tests {
    use crate::{
        audio::{
            channels::Channels,
            encoding::Encoding,
            frame_info::{FrameInfo, MpegVersion},
        },
        pcm,
        session::DecodingSession,
        test_assets::{mp3, temp_file::TempFileGuard},
        Error,
    };

    fn open_stereo_s16(frames: usize) -> (DecodingSession, TempFileGuard) {
        let file = TempFileGuard::with_contents(&mp3::silent_stream(frames));
        let mut session = DecodingSession::new().unwrap();
        session.open(file.path()).unwrap();
        session
            .set_output_format(44_100, Channels::Stereo, Encoding::S16)
            .unwrap();
        (session, file)
    }

    #[test]
    fn test_stream_read_all_decodes_silence() {
        let (mut session, _file) = open_stereo_s16(24);
        let bytes = session.read_all().unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(bytes.len() % 4, 0);

        let block = pcm::normalize(&bytes, Encoding::S16, 2).unwrap();
        assert_eq!(block.channels(), 2);
        assert!(block
            .lanes()
            .iter()
            .flatten()
            .all(|sample| sample.abs() < 1e-3));
    }

    #[test]
    fn test_stream_pull_chunk_respects_limit() {
        let (mut session, _file) = open_stereo_s16(24);
        let chunk = session.pull_chunk(100).unwrap();
        assert!(chunk.len() <= 100);
    }

    #[test]
    fn test_stream_chunks_sum_to_read_all() {
        let (mut session, file) = open_stereo_s16(24);
        let total: usize = session
            .chunks(1000)
            .map(|chunk| chunk.unwrap().len())
            .sum();
        assert!(session.chunks(1000).next().is_none());

        let mut again = DecodingSession::new().unwrap();
        again.open(file.path()).unwrap();
        again
            .set_output_format(44_100, Channels::Stereo, Encoding::S16)
            .unwrap();
        assert_eq!(again.read_all().unwrap().len(), total);
    }

    #[test]
    fn test_stream_end_of_stream_is_empty_chunk() {
        let (mut session, _file) = open_stereo_s16(8);
        session.read_all().unwrap();
        assert!(session.pull_chunk(512).unwrap().is_empty());
        assert!(session.pull_chunk(512).unwrap().is_empty());
    }

    #[test]
    fn test_stream_zero_chunk_size_yields_nothing() {
        let (mut session, _file) = open_stereo_s16(8);
        assert!(session.chunks(0).next().is_none());
    }

    #[test]
    fn test_stream_decode_frame_reports_header() {
        let (mut session, _file) = open_stereo_s16(24);
        let unit = session.decode_frame().unwrap().expect("first frame");
        assert_eq!(unit.audio.len() % 4, 0);

        let FrameInfo {
            version,
            layer,
            rate_hz,
            bitrate_kbps,
            ..
        } = unit.info;
        assert_eq!(version, MpegVersion::Mpeg1);
        assert_eq!(layer, 3);
        assert_eq!(rate_hz, 44_100);
        assert_eq!(bitrate_kbps, 128);
        assert_eq!(session.frame_info().unwrap(), unit.info);
    }

    #[test]
    fn test_stream_decode_frame_until_exhausted() {
        let (mut session, _file) = open_stereo_s16(12);
        let mut frames = 0;
        let mut last = -1;
        while let Some(unit) = session.decode_frame().unwrap() {
            assert!(unit.sequence > last);
            last = unit.sequence;
            frames += 1;
        }
        assert!(frames > 0);
        assert!(session.decode_frame().unwrap().is_none());
    }

    #[test]
    fn test_stream_feed_mode_needs_more_is_not_an_error() {
        let stream = mp3::silent_stream(16);
        let mut session = DecodingSession::new().unwrap();
        session.open_feed().unwrap();
        assert!(session.decode_frame().unwrap().is_none());

        session.feed(&stream).unwrap();
        let mut frames = 0;
        while let Some(unit) = session.decode_frame().unwrap() {
            assert!(!unit.audio.is_empty());
            frames += 1;
        }
        assert!(frames > 0);
        assert_eq!(session.sample_rate(), 44_100);

        session.feed(&[0xFF]).unwrap();
        assert!(session.decode_frame().unwrap().is_none());
    }

    #[test]
    fn test_stream_frame_info_requires_open() {
        let session = DecodingSession::new().unwrap();
        assert_eq!(session.frame_info().unwrap_err(), Error::InvalidSession);
    }
}
