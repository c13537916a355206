//! Audio-related types: sample encodings, channel layouts and frame descriptors
pub mod channels;
pub mod encoding;
pub mod frame_info;
