/* Pre-generated from native/wrapper.h against libmpg123 1.32 (MPG123_API_VERSION 48).
 * Regenerate with `--features generate-bindings`. */

pub const SEEK_SET: u32 = 0;
pub const SEEK_CUR: u32 = 1;
pub const SEEK_END: u32 = 2;

pub const MPG123_API_VERSION: u32 = 48;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_handle_struct {
    _unused: [u8; 0],
}
pub type mpg123_handle = mpg123_handle_struct;

pub type mpg123_parms = core::ffi::c_uint;
pub const mpg123_parms_MPG123_VERBOSE: mpg123_parms = 0;
pub const mpg123_parms_MPG123_FLAGS: mpg123_parms = 1;
pub const mpg123_parms_MPG123_ADD_FLAGS: mpg123_parms = 2;
pub const mpg123_parms_MPG123_FORCE_RATE: mpg123_parms = 3;
pub const mpg123_parms_MPG123_DOWN_SAMPLE: mpg123_parms = 4;
pub const mpg123_parms_MPG123_RVA: mpg123_parms = 5;
pub const mpg123_parms_MPG123_DOWNSPEED: mpg123_parms = 6;
pub const mpg123_parms_MPG123_UPSPEED: mpg123_parms = 7;
pub const mpg123_parms_MPG123_START_FRAME: mpg123_parms = 8;
pub const mpg123_parms_MPG123_DECODE_FRAMES: mpg123_parms = 9;
pub const mpg123_parms_MPG123_ICY_INTERVAL: mpg123_parms = 10;
pub const mpg123_parms_MPG123_OUTSCALE: mpg123_parms = 11;
pub const mpg123_parms_MPG123_TIMEOUT: mpg123_parms = 12;
pub const mpg123_parms_MPG123_REMOVE_FLAGS: mpg123_parms = 13;
pub const mpg123_parms_MPG123_RESYNC_LIMIT: mpg123_parms = 14;
pub const mpg123_parms_MPG123_INDEX_SIZE: mpg123_parms = 15;
pub const mpg123_parms_MPG123_PREFRAMES: mpg123_parms = 16;
pub const mpg123_parms_MPG123_FEEDPOOL: mpg123_parms = 17;
pub const mpg123_parms_MPG123_FEEDBUFFER: mpg123_parms = 18;
pub const mpg123_parms_MPG123_FREEFORMAT_SIZE: mpg123_parms = 19;

pub type mpg123_param_flags = core::ffi::c_uint;
pub const mpg123_param_flags_MPG123_FORCE_MONO: mpg123_param_flags = 7;
pub const mpg123_param_flags_MPG123_MONO_LEFT: mpg123_param_flags = 1;
pub const mpg123_param_flags_MPG123_MONO_RIGHT: mpg123_param_flags = 2;
pub const mpg123_param_flags_MPG123_MONO_MIX: mpg123_param_flags = 4;
pub const mpg123_param_flags_MPG123_FORCE_STEREO: mpg123_param_flags = 8;
pub const mpg123_param_flags_MPG123_FORCE_8BIT: mpg123_param_flags = 16;
pub const mpg123_param_flags_MPG123_QUIET: mpg123_param_flags = 32;
pub const mpg123_param_flags_MPG123_GAPLESS: mpg123_param_flags = 64;
pub const mpg123_param_flags_MPG123_NO_RESYNC: mpg123_param_flags = 128;
pub const mpg123_param_flags_MPG123_SEEKBUFFER: mpg123_param_flags = 256;
pub const mpg123_param_flags_MPG123_FUZZY: mpg123_param_flags = 512;
pub const mpg123_param_flags_MPG123_FORCE_FLOAT: mpg123_param_flags = 1024;
pub const mpg123_param_flags_MPG123_PLAIN_ID3TEXT: mpg123_param_flags = 2048;
pub const mpg123_param_flags_MPG123_IGNORE_STREAMLENGTH: mpg123_param_flags = 4096;
pub const mpg123_param_flags_MPG123_SKIP_ID3V2: mpg123_param_flags = 8192;
pub const mpg123_param_flags_MPG123_IGNORE_INFOFRAME: mpg123_param_flags = 16384;
pub const mpg123_param_flags_MPG123_AUTO_RESAMPLE: mpg123_param_flags = 32768;
pub const mpg123_param_flags_MPG123_PICTURE: mpg123_param_flags = 65536;
pub const mpg123_param_flags_MPG123_NO_PEEK_END: mpg123_param_flags = 131072;
pub const mpg123_param_flags_MPG123_FORCE_SEEKABLE: mpg123_param_flags = 262144;
pub const mpg123_param_flags_MPG123_STORE_RAW_ID3: mpg123_param_flags = 524288;
pub const mpg123_param_flags_MPG123_FORCE_ENDIAN: mpg123_param_flags = 1048576;
pub const mpg123_param_flags_MPG123_BIG_ENDIAN: mpg123_param_flags = 2097152;
pub const mpg123_param_flags_MPG123_NO_READAHEAD: mpg123_param_flags = 4194304;
pub const mpg123_param_flags_MPG123_FLOAT_FALLBACK: mpg123_param_flags = 8388608;
pub const mpg123_param_flags_MPG123_NO_FRANKENSTEIN: mpg123_param_flags = 16777216;

pub type mpg123_param_rva = core::ffi::c_uint;
pub const mpg123_param_rva_MPG123_RVA_OFF: mpg123_param_rva = 0;
pub const mpg123_param_rva_MPG123_RVA_MIX: mpg123_param_rva = 1;
pub const mpg123_param_rva_MPG123_RVA_ALBUM: mpg123_param_rva = 2;
pub const mpg123_param_rva_MPG123_RVA_MAX: mpg123_param_rva = 2;

pub type mpg123_feature_set = core::ffi::c_uint;
pub const mpg123_feature_set_MPG123_FEATURE_ABI_UTF8OPEN: mpg123_feature_set = 0;
pub const mpg123_feature_set_MPG123_FEATURE_OUTPUT_8BIT: mpg123_feature_set = 1;
pub const mpg123_feature_set_MPG123_FEATURE_OUTPUT_16BIT: mpg123_feature_set = 2;
pub const mpg123_feature_set_MPG123_FEATURE_OUTPUT_32BIT: mpg123_feature_set = 3;
pub const mpg123_feature_set_MPG123_FEATURE_INDEX: mpg123_feature_set = 4;
pub const mpg123_feature_set_MPG123_FEATURE_PARSE_ID3V2: mpg123_feature_set = 5;
pub const mpg123_feature_set_MPG123_FEATURE_DECODE_LAYER1: mpg123_feature_set = 6;
pub const mpg123_feature_set_MPG123_FEATURE_DECODE_LAYER2: mpg123_feature_set = 7;
pub const mpg123_feature_set_MPG123_FEATURE_DECODE_LAYER3: mpg123_feature_set = 8;
pub const mpg123_feature_set_MPG123_FEATURE_DECODE_ACCURATE: mpg123_feature_set = 9;
pub const mpg123_feature_set_MPG123_FEATURE_DECODE_DOWNSAMPLE: mpg123_feature_set = 10;
pub const mpg123_feature_set_MPG123_FEATURE_DECODE_NTOM: mpg123_feature_set = 11;
pub const mpg123_feature_set_MPG123_FEATURE_PARSE_ICY: mpg123_feature_set = 12;
pub const mpg123_feature_set_MPG123_FEATURE_TIMEOUT_READ: mpg123_feature_set = 13;
pub const mpg123_feature_set_MPG123_FEATURE_EQUALIZER: mpg123_feature_set = 14;
pub const mpg123_feature_set_MPG123_FEATURE_MOREINFO: mpg123_feature_set = 15;
pub const mpg123_feature_set_MPG123_FEATURE_OUTPUT_FLOAT32: mpg123_feature_set = 16;
pub const mpg123_feature_set_MPG123_FEATURE_OUTPUT_FLOAT64: mpg123_feature_set = 17;

pub type mpg123_errors = core::ffi::c_int;
pub const mpg123_errors_MPG123_DONE: mpg123_errors = -12;
pub const mpg123_errors_MPG123_NEW_FORMAT: mpg123_errors = -11;
pub const mpg123_errors_MPG123_NEED_MORE: mpg123_errors = -10;
pub const mpg123_errors_MPG123_ERR: mpg123_errors = -1;
pub const mpg123_errors_MPG123_OK: mpg123_errors = 0;
pub const mpg123_errors_MPG123_BAD_OUTFORMAT: mpg123_errors = 1;
pub const mpg123_errors_MPG123_BAD_CHANNEL: mpg123_errors = 2;
pub const mpg123_errors_MPG123_BAD_RATE: mpg123_errors = 3;
pub const mpg123_errors_MPG123_ERR_16TO8TABLE: mpg123_errors = 4;
pub const mpg123_errors_MPG123_BAD_PARAM: mpg123_errors = 5;
pub const mpg123_errors_MPG123_BAD_BUFFER: mpg123_errors = 6;
pub const mpg123_errors_MPG123_OUT_OF_MEM: mpg123_errors = 7;
pub const mpg123_errors_MPG123_NOT_INITIALIZED: mpg123_errors = 8;
pub const mpg123_errors_MPG123_BAD_DECODER: mpg123_errors = 9;
pub const mpg123_errors_MPG123_BAD_HANDLE: mpg123_errors = 10;
pub const mpg123_errors_MPG123_NO_BUFFERS: mpg123_errors = 11;
pub const mpg123_errors_MPG123_BAD_RVA: mpg123_errors = 12;
pub const mpg123_errors_MPG123_NO_GAPLESS: mpg123_errors = 13;
pub const mpg123_errors_MPG123_NO_SPACE: mpg123_errors = 14;
pub const mpg123_errors_MPG123_BAD_TYPES: mpg123_errors = 15;
pub const mpg123_errors_MPG123_BAD_BAND: mpg123_errors = 16;
pub const mpg123_errors_MPG123_ERR_NULL: mpg123_errors = 17;
pub const mpg123_errors_MPG123_ERR_READER: mpg123_errors = 18;
pub const mpg123_errors_MPG123_NO_SEEK_FROM_END: mpg123_errors = 19;
pub const mpg123_errors_MPG123_BAD_WHENCE: mpg123_errors = 20;
pub const mpg123_errors_MPG123_NO_TIMEOUT: mpg123_errors = 21;
pub const mpg123_errors_MPG123_BAD_FILE: mpg123_errors = 22;
pub const mpg123_errors_MPG123_NO_SEEK: mpg123_errors = 23;
pub const mpg123_errors_MPG123_NO_READER: mpg123_errors = 24;
pub const mpg123_errors_MPG123_BAD_PARS: mpg123_errors = 25;
pub const mpg123_errors_MPG123_BAD_INDEX_PAR: mpg123_errors = 26;
pub const mpg123_errors_MPG123_OUT_OF_SYNC: mpg123_errors = 27;
pub const mpg123_errors_MPG123_RESYNC_FAIL: mpg123_errors = 28;
pub const mpg123_errors_MPG123_NO_8BIT: mpg123_errors = 29;
pub const mpg123_errors_MPG123_BAD_ALIGN: mpg123_errors = 30;
pub const mpg123_errors_MPG123_NULL_BUFFER: mpg123_errors = 31;
pub const mpg123_errors_MPG123_NO_RELSEEK: mpg123_errors = 32;
pub const mpg123_errors_MPG123_NULL_POINTER: mpg123_errors = 33;
pub const mpg123_errors_MPG123_BAD_KEY: mpg123_errors = 34;
pub const mpg123_errors_MPG123_NO_INDEX: mpg123_errors = 35;
pub const mpg123_errors_MPG123_INDEX_FAIL: mpg123_errors = 36;
pub const mpg123_errors_MPG123_BAD_DECODER_SETUP: mpg123_errors = 37;
pub const mpg123_errors_MPG123_MISSING_FEATURE: mpg123_errors = 38;
pub const mpg123_errors_MPG123_BAD_VALUE: mpg123_errors = 39;
pub const mpg123_errors_MPG123_LSEEK_FAILED: mpg123_errors = 40;
pub const mpg123_errors_MPG123_BAD_CUSTOM_IO: mpg123_errors = 41;
pub const mpg123_errors_MPG123_LFS_OVERFLOW: mpg123_errors = 42;
pub const mpg123_errors_MPG123_INT_OVERFLOW: mpg123_errors = 43;
pub const mpg123_errors_MPG123_BAD_FLOAT: mpg123_errors = 44;

pub type mpg123_enc_enum = core::ffi::c_uint;
pub const mpg123_enc_enum_MPG123_ENC_8: mpg123_enc_enum = 15;
pub const mpg123_enc_enum_MPG123_ENC_16: mpg123_enc_enum = 64;
pub const mpg123_enc_enum_MPG123_ENC_24: mpg123_enc_enum = 16384;
pub const mpg123_enc_enum_MPG123_ENC_32: mpg123_enc_enum = 256;
pub const mpg123_enc_enum_MPG123_ENC_SIGNED: mpg123_enc_enum = 128;
pub const mpg123_enc_enum_MPG123_ENC_FLOAT: mpg123_enc_enum = 3584;
pub const mpg123_enc_enum_MPG123_ENC_SIGNED_16: mpg123_enc_enum = 208;
pub const mpg123_enc_enum_MPG123_ENC_UNSIGNED_16: mpg123_enc_enum = 96;
pub const mpg123_enc_enum_MPG123_ENC_UNSIGNED_8: mpg123_enc_enum = 1;
pub const mpg123_enc_enum_MPG123_ENC_SIGNED_8: mpg123_enc_enum = 130;
pub const mpg123_enc_enum_MPG123_ENC_ULAW_8: mpg123_enc_enum = 4;
pub const mpg123_enc_enum_MPG123_ENC_ALAW_8: mpg123_enc_enum = 8;
pub const mpg123_enc_enum_MPG123_ENC_SIGNED_32: mpg123_enc_enum = 4480;
pub const mpg123_enc_enum_MPG123_ENC_UNSIGNED_32: mpg123_enc_enum = 8448;
pub const mpg123_enc_enum_MPG123_ENC_SIGNED_24: mpg123_enc_enum = 20608;
pub const mpg123_enc_enum_MPG123_ENC_UNSIGNED_24: mpg123_enc_enum = 24576;
pub const mpg123_enc_enum_MPG123_ENC_FLOAT_32: mpg123_enc_enum = 512;
pub const mpg123_enc_enum_MPG123_ENC_FLOAT_64: mpg123_enc_enum = 1024;
pub const mpg123_enc_enum_MPG123_ENC_ANY: mpg123_enc_enum = 30719;

pub type mpg123_channelcount = core::ffi::c_uint;
pub const mpg123_channelcount_MPG123_MONO: mpg123_channelcount = 1;
pub const mpg123_channelcount_MPG123_STEREO: mpg123_channelcount = 2;

pub type mpg123_channels = core::ffi::c_uint;
pub const mpg123_channels_MPG123_LEFT: mpg123_channels = 1;
pub const mpg123_channels_MPG123_RIGHT: mpg123_channels = 2;
pub const mpg123_channels_MPG123_LR: mpg123_channels = 3;

pub type mpg123_vbr = core::ffi::c_uint;
pub const mpg123_vbr_MPG123_CBR: mpg123_vbr = 0;
pub const mpg123_vbr_MPG123_VBR: mpg123_vbr = 1;
pub const mpg123_vbr_MPG123_ABR: mpg123_vbr = 2;

pub type mpg123_version = core::ffi::c_uint;
pub const mpg123_version_MPG123_1_0: mpg123_version = 0;
pub const mpg123_version_MPG123_2_0: mpg123_version = 1;
pub const mpg123_version_MPG123_2_5: mpg123_version = 2;

pub type mpg123_mode = core::ffi::c_uint;
pub const mpg123_mode_MPG123_M_STEREO: mpg123_mode = 0;
pub const mpg123_mode_MPG123_M_JOINT: mpg123_mode = 1;
pub const mpg123_mode_MPG123_M_DUAL: mpg123_mode = 2;
pub const mpg123_mode_MPG123_M_MONO: mpg123_mode = 3;

pub type mpg123_flags = core::ffi::c_uint;
pub const mpg123_flags_MPG123_CRC: mpg123_flags = 1;
pub const mpg123_flags_MPG123_COPYRIGHT: mpg123_flags = 2;
pub const mpg123_flags_MPG123_PRIVATE: mpg123_flags = 4;
pub const mpg123_flags_MPG123_ORIGINAL: mpg123_flags = 8;

pub const MPG123_NEW_ID3: u32 = 1;
pub const MPG123_ID3: u32 = 3;
pub const MPG123_NEW_ICY: u32 = 4;
pub const MPG123_ICY: u32 = 12;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_frameinfo2 {
    pub version: core::ffi::c_int,
    pub layer: core::ffi::c_int,
    pub rate: core::ffi::c_long,
    pub mode: core::ffi::c_int,
    pub mode_ext: core::ffi::c_int,
    pub framesize: core::ffi::c_int,
    pub flags: core::ffi::c_int,
    pub emphasis: core::ffi::c_int,
    pub bitrate: core::ffi::c_int,
    pub abr_rate: core::ffi::c_int,
    pub vbr: core::ffi::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_string {
    pub p: *mut core::ffi::c_char,
    pub size: usize,
    pub fill: usize,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_text {
    pub lang: [core::ffi::c_char; 3usize],
    pub id: [core::ffi::c_char; 4usize],
    pub description: mpg123_string,
    pub text: mpg123_string,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_picture {
    pub type_: core::ffi::c_char,
    pub description: mpg123_string,
    pub mime_type: mpg123_string,
    pub size: usize,
    pub data: *mut core::ffi::c_uchar,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_id3v2 {
    pub version: core::ffi::c_uchar,
    pub title: *mut mpg123_string,
    pub artist: *mut mpg123_string,
    pub album: *mut mpg123_string,
    pub year: *mut mpg123_string,
    pub genre: *mut mpg123_string,
    pub comment: *mut mpg123_string,
    pub comment_list: *mut mpg123_text,
    pub comments: usize,
    pub text: *mut mpg123_text,
    pub texts: usize,
    pub extra: *mut mpg123_text,
    pub extras: usize,
    pub picture: *mut mpg123_picture,
    pub pictures: usize,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct mpg123_id3v1 {
    pub tag: [core::ffi::c_char; 3usize],
    pub title: [core::ffi::c_char; 30usize],
    pub artist: [core::ffi::c_char; 30usize],
    pub album: [core::ffi::c_char; 30usize],
    pub year: [core::ffi::c_char; 4usize],
    pub comment: [core::ffi::c_char; 30usize],
    pub genre: core::ffi::c_uchar,
}

extern "C" {
    pub fn mpg123_init() -> core::ffi::c_int;
    pub fn mpg123_exit();
    pub fn mpg123_new(
        decoder: *const core::ffi::c_char,
        error: *mut core::ffi::c_int,
    ) -> *mut mpg123_handle;
    pub fn mpg123_delete(mh: *mut mpg123_handle);

    pub fn mpg123_param2(
        mh: *mut mpg123_handle,
        type_: core::ffi::c_int,
        value: core::ffi::c_long,
        fvalue: f64,
    ) -> core::ffi::c_int;
    pub fn mpg123_getparam2(
        mh: *mut mpg123_handle,
        type_: core::ffi::c_int,
        value: *mut core::ffi::c_long,
        fvalue: *mut f64,
    ) -> core::ffi::c_int;
    pub fn mpg123_feature2(key: core::ffi::c_int) -> core::ffi::c_int;

    pub fn mpg123_plain_strerror(errcode: core::ffi::c_int) -> *const core::ffi::c_char;
    pub fn mpg123_strerror(mh: *mut mpg123_handle) -> *const core::ffi::c_char;
    pub fn mpg123_errcode(mh: *mut mpg123_handle) -> core::ffi::c_int;

    pub fn mpg123_libversion(patch: *mut core::ffi::c_uint) -> core::ffi::c_uint;
    pub fn mpg123_distversion(
        major: *mut core::ffi::c_uint,
        minor: *mut core::ffi::c_uint,
        patch: *mut core::ffi::c_uint,
    ) -> *const core::ffi::c_char;

    pub fn mpg123_format_none(mh: *mut mpg123_handle) -> core::ffi::c_int;
    pub fn mpg123_format_all(mh: *mut mpg123_handle) -> core::ffi::c_int;
    pub fn mpg123_format(
        mh: *mut mpg123_handle,
        rate: core::ffi::c_long,
        channels: core::ffi::c_int,
        encodings: core::ffi::c_int,
    ) -> core::ffi::c_int;
    pub fn mpg123_format_support(
        mh: *mut mpg123_handle,
        rate: core::ffi::c_long,
        encoding: core::ffi::c_int,
    ) -> core::ffi::c_int;
    pub fn mpg123_getformat(
        mh: *mut mpg123_handle,
        rate: *mut core::ffi::c_long,
        channels: *mut core::ffi::c_int,
        encoding: *mut core::ffi::c_int,
    ) -> core::ffi::c_int;
    pub fn mpg123_encsize(encoding: core::ffi::c_int) -> core::ffi::c_int;

    pub fn mpg123_open(mh: *mut mpg123_handle, path: *const core::ffi::c_char)
        -> core::ffi::c_int;
    pub fn mpg123_open_feed(mh: *mut mpg123_handle) -> core::ffi::c_int;
    pub fn mpg123_close(mh: *mut mpg123_handle) -> core::ffi::c_int;

    pub fn mpg123_read(
        mh: *mut mpg123_handle,
        outmemory: *mut core::ffi::c_void,
        outmemsize: usize,
        done: *mut usize,
    ) -> core::ffi::c_int;
    pub fn mpg123_feed(
        mh: *mut mpg123_handle,
        in_: *const core::ffi::c_uchar,
        size: usize,
    ) -> core::ffi::c_int;
    pub fn mpg123_decode_frame64(
        mh: *mut mpg123_handle,
        num: *mut i64,
        audio: *mut *mut core::ffi::c_uchar,
        bytes: *mut usize,
    ) -> core::ffi::c_int;
    pub fn mpg123_info2(mh: *mut mpg123_handle, mi: *mut mpg123_frameinfo2) -> core::ffi::c_int;

    pub fn mpg123_tell64(mh: *mut mpg123_handle) -> i64;
    pub fn mpg123_tellframe64(mh: *mut mpg123_handle) -> i64;
    pub fn mpg123_seek64(mh: *mut mpg123_handle, sampleoff: i64, whence: core::ffi::c_int)
        -> i64;
    pub fn mpg123_seek_frame64(
        mh: *mut mpg123_handle,
        frameoff: i64,
        whence: core::ffi::c_int,
    ) -> i64;
    pub fn mpg123_length64(mh: *mut mpg123_handle) -> i64;
    pub fn mpg123_framelength64(mh: *mut mpg123_handle) -> i64;

    pub fn mpg123_eq2(
        mh: *mut mpg123_handle,
        channel: core::ffi::c_int,
        band: core::ffi::c_int,
        val: f64,
    ) -> core::ffi::c_int;
    pub fn mpg123_geteq2(
        mh: *mut mpg123_handle,
        channel: core::ffi::c_int,
        band: core::ffi::c_int,
    ) -> f64;
    pub fn mpg123_reset_eq(mh: *mut mpg123_handle) -> core::ffi::c_int;

    pub fn mpg123_volume(mh: *mut mpg123_handle, vol: f64) -> core::ffi::c_int;
    pub fn mpg123_volume_change(mh: *mut mpg123_handle, change: f64) -> core::ffi::c_int;
    pub fn mpg123_volume_change_db(mh: *mut mpg123_handle, db: f64) -> core::ffi::c_int;
    pub fn mpg123_getvolume(
        mh: *mut mpg123_handle,
        base: *mut f64,
        really: *mut f64,
        rva_db: *mut f64,
    ) -> core::ffi::c_int;

    pub fn mpg123_meta_check(mh: *mut mpg123_handle) -> core::ffi::c_int;
    pub fn mpg123_meta_free(mh: *mut mpg123_handle);
    pub fn mpg123_id3(
        mh: *mut mpg123_handle,
        v1: *mut *mut mpg123_id3v1,
        v2: *mut *mut mpg123_id3v2,
    ) -> core::ffi::c_int;
}
