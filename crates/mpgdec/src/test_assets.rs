/// Synthetic MPEG-1 Layer III streams and ID3 tags.
pub mod mp3 {
    /// `FF FB 90 00`: MPEG-1 Layer III, no CRC, 128 kbps, 44.1 kHz, no padding, stereo.
    pub const SILENT_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
    /// 144 * 128000 / 44100, rounded down.
    pub const FRAME_BYTES: usize = 417;
    pub const SAMPLES_PER_FRAME: usize = 1152;

    /// `count` frames whose side info and main data are all zero. They decode to silence.
    pub fn silent_stream(count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(count * FRAME_BYTES);
        for _ in 0..count {
            out.extend_from_slice(&SILENT_HEADER);
            out.resize(out.len() + FRAME_BYTES - SILENT_HEADER.len(), 0);
        }
        out
    }

    fn syncsafe(size: usize) -> [u8; 4] {
        assert!(size < (1 << 28));
        [
            ((size >> 21) & 0x7F) as u8,
            ((size >> 14) & 0x7F) as u8,
            ((size >> 7) & 0x7F) as u8,
            (size & 0x7F) as u8,
        ]
    }

    /// ID3v2.3 tag with ISO-8859-1 text frames, e.g. `(b"TIT2", "Title")`.
    pub fn id3v2(frames: &[(&[u8; 4], &str)]) -> Vec<u8> {
        let mut body = Vec::new();
        for (id, text) in frames {
            assert!(text.is_ascii());
            body.extend_from_slice(*id);
            body.extend_from_slice(&((text.len() + 1) as u32).to_be_bytes());
            body.extend_from_slice(&[0, 0]); // flags
            body.push(0); // ISO-8859-1
            body.extend_from_slice(text.as_bytes());
        }

        let mut out = Vec::with_capacity(10 + body.len());
        out.extend_from_slice(b"ID3");
        out.extend_from_slice(&[3, 0, 0]);
        out.extend_from_slice(&syncsafe(body.len()));
        out.extend_from_slice(&body);
        out
    }

    fn fixed_field(out: &mut Vec<u8>, text: &str, width: usize) {
        let bytes = text.as_bytes();
        assert!(bytes.len() <= width);
        out.extend_from_slice(bytes);
        out.resize(out.len() + width - bytes.len(), 0);
    }

    /// 128-byte ID3v1 trailer. `genre` 255 means "none".
    pub fn id3v1(
        title: &str,
        artist: &str,
        album: &str,
        year: &str,
        comment: &str,
        genre: u8,
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(128);
        out.extend_from_slice(b"TAG");
        fixed_field(&mut out, title, 30);
        fixed_field(&mut out, artist, 30);
        fixed_field(&mut out, album, 30);
        fixed_field(&mut out, year, 4);
        fixed_field(&mut out, comment, 30);
        out.push(genre);
        assert_eq!(out.len(), 128);
        out
    }

    /// `[id3v2] frames [id3v1]`.
    pub fn tagged_stream(v2: Option<Vec<u8>>, frames: usize, v1: Option<Vec<u8>>) -> Vec<u8> {
        let mut out = v2.unwrap_or_default();
        out.extend_from_slice(&silent_stream(frames));
        if let Some(v1) = v1 {
            out.extend_from_slice(&v1);
        }
        out
    }
}

// Temporary .mp3 files on disk
pub mod temp_file {
    use std::io::Write;

    pub(crate) struct TempFileGuard {
        file: tempfile::NamedTempFile,
    }

    impl TempFileGuard {
        pub(crate) fn with_contents(bytes: &[u8]) -> Self {
            let mut file = tempfile::Builder::new()
                .prefix("mpgdec_test_")
                .suffix(".mp3")
                .tempfile()
                .unwrap();
            file.write_all(bytes).unwrap();
            file.flush().unwrap();
            Self { file }
        }

        pub(crate) fn path(&self) -> &std::path::Path {
            self.file.path()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mp3;

    #[test]
    fn test_assets_silent_stream_layout() {
        let stream = mp3::silent_stream(3);
        assert_eq!(stream.len(), 3 * mp3::FRAME_BYTES);
        assert_eq!(&stream[mp3::FRAME_BYTES..mp3::FRAME_BYTES + 4], &mp3::SILENT_HEADER);
    }

    #[test]
    fn test_assets_id3v2_header() {
        let tag = mp3::id3v2(&[(b"TIT2", "B")]);
        assert_eq!(&tag[..3], b"ID3");
        // 10 byte frame header, encoding byte, text
        assert_eq!(tag[9] as usize, 12);
        assert_eq!(tag.len(), 22);
    }

    #[test]
    fn test_assets_id3v1_layout() {
        let tag = mp3::id3v1("A", "", "", "2001", "", 255);
        assert_eq!(&tag[..4], b"TAGA");
        assert_eq!(&tag[93..97], b"2001");
        assert_eq!(tag[127], 255);
    }
}
