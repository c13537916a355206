//! ID3 tag metadata.
//!
//! The engine parses a legacy ID3v1 trailer and an extended ID3v2 header tag
//! independently. [`TagSources::merge()`] combines them into one
//! [`MetadataRecord`]: for every key the extended value wins when it is present
//! and non-empty, otherwise the legacy value is used when non-empty, otherwise
//! the key is left out.
use std::collections::BTreeMap;

use mpgdec_sys::ffi as sys;

use crate::{session::DecodingSession, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKey {
    Title,
    Artist,
    Album,
    Year,
    Comment,
    Genre,
}

impl TagKey {
    pub const ALL: [TagKey; 6] = [
        TagKey::Title,
        TagKey::Artist,
        TagKey::Album,
        TagKey::Year,
        TagKey::Comment,
        TagKey::Genre,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TagKey::Title => "title",
            TagKey::Artist => "artist",
            TagKey::Album => "album",
            TagKey::Year => "year",
            TagKey::Comment => "comment",
            TagKey::Genre => "genre",
        }
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merged tag values. Keys without a value are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    fields: BTreeMap<TagKey, String>,
}

impl MetadataRecord {
    pub fn get(&self, key: TagKey) -> Option<&str> {
        self.fields.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: TagKey) -> bool {
        self.fields.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagKey, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The six tag fields of one tag source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub comment: Option<String>,
    pub genre: Option<String>,
}

impl TagFields {
    pub fn get(&self, key: TagKey) -> Option<&str> {
        let value = match key {
            TagKey::Title => &self.title,
            TagKey::Artist => &self.artist,
            TagKey::Album => &self.album,
            TagKey::Year => &self.year,
            TagKey::Comment => &self.comment,
            TagKey::Genre => &self.genre,
        };
        value.as_deref()
    }

    /// Decodes a raw ID3v1 tag.
    pub fn from_legacy(raw: &sys::mpg123_id3v1) -> Self {
        Self {
            title: non_empty(legacy_field(&c_bytes(&raw.title))),
            artist: non_empty(legacy_field(&c_bytes(&raw.artist))),
            album: non_empty(legacy_field(&c_bytes(&raw.album))),
            year: non_empty(legacy_field(&c_bytes(&raw.year))),
            comment: non_empty(legacy_field(&c_bytes(&raw.comment))),
            genre: genre_name(raw.genre).map(str::to_owned),
        }
    }
}

/// The legacy and extended tags of a stream, before merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSources {
    /// ID3v1.
    pub legacy: Option<TagFields>,
    /// ID3v2.
    pub extended: Option<TagFields>,
}

impl TagSources {
    pub fn merge(&self) -> MetadataRecord {
        fn pick(fields: &Option<TagFields>, key: TagKey) -> Option<&str> {
            fields
                .as_ref()
                .and_then(|f| f.get(key))
                .filter(|v| !v.is_empty())
        }

        let fields = TagKey::ALL
            .into_iter()
            .filter_map(|key| {
                pick(&self.extended, key)
                    .or_else(|| pick(&self.legacy, key))
                    .map(|value| (key, value.to_owned()))
            })
            .collect();
        MetadataRecord { fields }
    }
}

/// Decodes a fixed-width ID3v1 field: everything up to the first NUL (or the whole
/// field when there is none), as lossy UTF-8.
pub fn legacy_field(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

fn c_bytes(chars: &[core::ffi::c_char]) -> Vec<u8> {
    chars.iter().map(|&c| c as u8).collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// ID3v1 genres, including the Winamp extensions.
const GENRES: [&str; 126] = [
    "Blues",
    "Classic Rock",
    "Country",
    "Dance",
    "Disco",
    "Funk",
    "Grunge",
    "Hip-Hop",
    "Jazz",
    "Metal",
    "New Age",
    "Oldies",
    "Other",
    "Pop",
    "R&B",
    "Rap",
    "Reggae",
    "Rock",
    "Techno",
    "Industrial",
    "Alternative",
    "Ska",
    "Death Metal",
    "Pranks",
    "Soundtrack",
    "Euro-Techno",
    "Ambient",
    "Trip-Hop",
    "Vocal",
    "Jazz+Funk",
    "Fusion",
    "Trance",
    "Classical",
    "Instrumental",
    "Acid",
    "House",
    "Game",
    "Sound Clip",
    "Gospel",
    "Noise",
    "AlternRock",
    "Bass",
    "Soul",
    "Punk",
    "Space",
    "Meditative",
    "Instrumental Pop",
    "Instrumental Rock",
    "Ethnic",
    "Gothic",
    "Darkwave",
    "Techno-Industrial",
    "Electronic",
    "Pop-Folk",
    "Eurodance",
    "Dream",
    "Southern Rock",
    "Comedy",
    "Cult",
    "Gangsta",
    "Top 40",
    "Christian Rap",
    "Pop/Funk",
    "Jungle",
    "Native American",
    "Cabaret",
    "New Wave",
    "Psychadelic",
    "Rave",
    "Showtunes",
    "Trailer",
    "Lo-Fi",
    "Tribal",
    "Acid Punk",
    "Acid Jazz",
    "Polka",
    "Retro",
    "Musical",
    "Rock & Roll",
    "Hard Rock",
    "Folk",
    "Folk-Rock",
    "National Folk",
    "Swing",
    "Fast Fusion",
    "Bebob",
    "Latin",
    "Revival",
    "Celtic",
    "Bluegrass",
    "Avantgarde",
    "Gothic Rock",
    "Progressive Rock",
    "Psychedelic Rock",
    "Symphonic Rock",
    "Slow Rock",
    "Big Band",
    "Chorus",
    "Easy Listening",
    "Acoustic",
    "Humour",
    "Speech",
    "Chanson",
    "Opera",
    "Chamber Music",
    "Sonata",
    "Symphony",
    "Booty Bass",
    "Primus",
    "Porn Groove",
    "Satire",
    "Slow Jam",
    "Club",
    "Tango",
    "Samba",
    "Folklore",
    "Ballad",
    "Power Ballad",
    "Rhythmic Soul",
    "Freestyle",
    "Duet",
    "Punk Rock",
    "Drum Solo",
    "A capella",
    "Euro-House",
    "Dance Hall",
];

/// Name of an ID3v1 genre byte. `None` for 255 ("no genre") and unknown values.
pub fn genre_name(genre: u8) -> Option<&'static str> {
    GENRES.get(genre as usize).copied()
}

/// Which tag kinds the engine has seen on the open stream.
#[repr(transparent)]
#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq)]
pub struct MetaFlags(u32);

impl MetaFlags {
    pub const NONE: Self = Self(0);
    /// An ID3 tag arrived since the last [`DecodingSession::metadata()`] call.
    pub const NEW_ID3: Self = Self(sys::MPG123_NEW_ID3);
    /// The stream carries ID3 data.
    pub const ID3: Self = Self(sys::MPG123_ID3);
    pub const NEW_ICY: Self = Self(sys::MPG123_NEW_ICY);
    pub const ICY: Self = Self(sys::MPG123_ICY);

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

impl DecodingSession {
    /// Merged tag metadata of the current stream.
    ///
    /// Recomputed from the engine on each call. Empty when no stream is open or the
    /// stream has no tags.
    pub fn metadata(&self) -> Result<MetadataRecord> {
        Ok(self.tag_sources()?.merge())
    }

    /// The legacy and extended tags as parsed by the engine, unmerged.
    pub fn tag_sources(&self) -> Result<TagSources> {
        metadata_ffi::mpg123_id3(self).map_err(Error::ReadFailed)
    }

    pub fn meta_check(&self) -> MetaFlags {
        metadata_ffi::mpg123_meta_check(self)
    }
}

mod metadata_ffi {
    use mpgdec_sys::ffi as sys;

    use crate::{
        metadata::{non_empty, MetaFlags, TagFields, TagSources},
        session::DecodingSession,
        Binding, EngineCode,
    };

    #[inline]
    pub fn mpg123_id3(session: &DecodingSession) -> Result<TagSources, EngineCode> {
        let mut v1: *mut sys::mpg123_id3v1 = core::ptr::null_mut();
        let mut v2: *mut sys::mpg123_id3v2 = core::ptr::null_mut();
        let res = unsafe { sys::mpg123_id3(session.handle().to_raw(), &mut v1, &mut v2) };
        session.handle().check(res)?;

        // Both point into the handle and stay valid until the next call on it.
        let legacy = unsafe { v1.as_ref() }.map(TagFields::from_legacy);
        let extended = unsafe { v2.as_ref() }.map(|tag| TagFields {
            title: extended_field(tag.title),
            artist: extended_field(tag.artist),
            album: extended_field(tag.album),
            year: extended_field(tag.year),
            comment: extended_field(tag.comment),
            genre: extended_field(tag.genre),
        });
        Ok(TagSources { legacy, extended })
    }

    #[inline]
    pub fn mpg123_meta_check(session: &DecodingSession) -> MetaFlags {
        let res = unsafe { sys::mpg123_meta_check(session.handle().to_raw()) };
        MetaFlags::from_bits(res.max(0) as u32)
    }

    fn extended_field(value: *mut sys::mpg123_string) -> Option<String> {
        let value = unsafe { value.as_ref() }?;
        if value.p.is_null() || value.fill == 0 {
            return None;
        }
        // `fill` counts the terminating NUL.
        let bytes = unsafe { std::slice::from_raw_parts(value.p as *const u8, value.fill) };
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        non_empty(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_assets::{mp3, temp_file::TempFileGuard};

    fn fields(title: &str) -> TagFields {
        TagFields {
            title: Some(title.to_owned()),
            ..TagFields::default()
        }
    }

    fn open(bytes: &[u8]) -> (DecodingSession, TempFileGuard) {
        let file = TempFileGuard::with_contents(bytes);
        let mut session = DecodingSession::new().unwrap();
        session.open(file.path()).unwrap();
        (session, file)
    }

    #[test]
    fn test_metadata_extended_wins() {
        let sources = TagSources {
            legacy: Some(fields("A")),
            extended: Some(fields("B")),
        };
        assert_eq!(sources.merge().get(TagKey::Title), Some("B"));
    }

    #[test]
    fn test_metadata_empty_extended_falls_back_to_legacy() {
        let sources = TagSources {
            legacy: Some(fields("A")),
            extended: Some(fields("")),
        };
        assert_eq!(sources.merge().get(TagKey::Title), Some("A"));

        let sources = TagSources {
            legacy: Some(fields("A")),
            extended: None,
        };
        assert_eq!(sources.merge().get(TagKey::Title), Some("A"));
    }

    #[test]
    fn test_metadata_absent_keys_are_omitted() {
        let sources = TagSources {
            legacy: Some(fields("")),
            extended: Some(TagFields::default()),
        };
        let record = sources.merge();
        assert!(record.is_empty());
        assert!(!record.contains(TagKey::Title));
        assert!(TagSources::default().merge().is_empty());
    }

    #[test]
    fn test_metadata_legacy_field_stops_at_nul() {
        assert_eq!(legacy_field(b"Song\0\0garbage"), "Song");
        assert_eq!(legacy_field(b"Full"), "Full");
        assert_eq!(legacy_field(b"\0abc"), "");
        assert_eq!(legacy_field(&[b'a', 0xFF, 0]), "a\u{FFFD}");
    }

    #[test]
    fn test_metadata_genre_names() {
        assert_eq!(genre_name(0), Some("Blues"));
        assert_eq!(genre_name(17), Some("Rock"));
        assert_eq!(genre_name(125), Some("Dance Hall"));
        assert_eq!(genre_name(126), None);
        assert_eq!(genre_name(255), None);
    }

    #[test]
    fn test_metadata_from_legacy_raw() {
        let mut raw = sys::mpg123_id3v1 {
            tag: [b'T' as _, b'A' as _, b'G' as _],
            title: [0; 30],
            artist: [0; 30],
            album: [0; 30],
            year: [0; 4],
            comment: [0; 30],
            genre: 8,
        };
        for (dst, src) in raw.title.iter_mut().zip(b"Tune") {
            *dst = *src as _;
        }
        for (dst, src) in raw.year.iter_mut().zip(b"1999") {
            *dst = *src as _;
        }
        let tag = TagFields::from_legacy(&raw);
        assert_eq!(tag.title.as_deref(), Some("Tune"));
        assert_eq!(tag.year.as_deref(), Some("1999"));
        assert_eq!(tag.artist, None);
        assert_eq!(tag.genre.as_deref(), Some("Jazz"));
    }

    #[test]
    fn test_metadata_from_file_prefers_extended() {
        let bytes = mp3::tagged_stream(
            Some(mp3::id3v2(&[(b"TIT2", "B")])),
            16,
            Some(mp3::id3v1("A", "Artist", "", "", "", 17)),
        );
        let (session, _file) = open(&bytes);
        let record = session.metadata().unwrap();
        assert_eq!(record.get(TagKey::Title), Some("B"));
        assert_eq!(record.get(TagKey::Artist), Some("Artist"));
        assert_eq!(record.get(TagKey::Genre), Some("Rock"));
        assert!(!record.contains(TagKey::Album));
    }

    #[test]
    fn test_metadata_from_file_legacy_only() {
        let bytes = mp3::tagged_stream(None, 16, Some(mp3::id3v1("A", "", "", "", "", 255)));
        let (session, _file) = open(&bytes);
        assert!(!session.meta_check().is_none());

        let record = session.metadata().unwrap();
        assert_eq!(record.get(TagKey::Title), Some("A"));
        assert!(!record.contains(TagKey::Genre));
    }

    #[test]
    fn test_metadata_untagged_file_is_empty() {
        let (session, _file) = open(&mp3::silent_stream(16));
        assert!(session.metadata().unwrap().is_empty());
    }

    #[test]
    fn test_metadata_without_stream_is_empty() {
        let session = DecodingSession::new().unwrap();
        assert!(session.metadata().unwrap().is_empty());
        assert!(session.meta_check().is_none());
    }
}
