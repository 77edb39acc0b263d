//! Lookup tables for MPEG audio frame header fields
//!
//! Tables are indexed directly by the raw bitfield value, so a 2-bit field
//! maps through a 4-entry array and the bitrate index through 16 entries.
//! Reserved patterns are `None` (or [`BitrateSlot::Bad`]).
//! See http://www.mp3-tech.org/programmer/frame_header.html

use crate::types::{BitrateSlot, ChannelMode, Emphasis, Layer, MpegVersion};
use crate::types::BitrateSlot::{Bad, Free, Kbps};

/// Version ID (2 bits): 00=2.5, 01=reserved, 10=2, 11=1
pub const VERSIONS: [Option<MpegVersion>; 4] = [
    Some(MpegVersion::Mpeg25), // 00
    None,                      // 01
    Some(MpegVersion::Mpeg2),  // 10
    Some(MpegVersion::Mpeg1),  // 11
];

/// Layer description (2 bits): 00=reserved, 01=III, 10=II, 11=I
pub const LAYERS: [Option<Layer>; 4] = [
    None,                  // 00
    Some(Layer::LayerIII), // 01
    Some(Layer::LayerII),  // 10
    Some(Layer::LayerI),   // 11
];

/// MPEG-1 Layer I bitrates (kbps)
pub const BITRATES_V1_L1: [BitrateSlot; 16] = [
    Free, Kbps(32), Kbps(64), Kbps(96), Kbps(128), Kbps(160), Kbps(192), Kbps(224),
    Kbps(256), Kbps(288), Kbps(320), Kbps(352), Kbps(384), Kbps(416), Kbps(448), Bad,
];

/// MPEG-1 Layer II bitrates (kbps)
pub const BITRATES_V1_L2: [BitrateSlot; 16] = [
    Free, Kbps(32), Kbps(48), Kbps(56), Kbps(64), Kbps(80), Kbps(96), Kbps(112),
    Kbps(128), Kbps(160), Kbps(192), Kbps(224), Kbps(256), Kbps(320), Kbps(384), Bad,
];

/// MPEG-1 Layer III bitrates (kbps)
pub const BITRATES_V1_L3: [BitrateSlot; 16] = [
    Free, Kbps(32), Kbps(40), Kbps(48), Kbps(56), Kbps(64), Kbps(80), Kbps(96),
    Kbps(112), Kbps(128), Kbps(160), Kbps(192), Kbps(224), Kbps(256), Kbps(320), Bad,
];

/// MPEG-2/2.5 Layer I bitrates (kbps)
pub const BITRATES_V2_L1: [BitrateSlot; 16] = [
    Free, Kbps(32), Kbps(48), Kbps(56), Kbps(64), Kbps(80), Kbps(96), Kbps(112),
    Kbps(128), Kbps(144), Kbps(160), Kbps(176), Kbps(192), Kbps(224), Kbps(256), Bad,
];

/// MPEG-2/2.5 Layer II and Layer III bitrates (kbps)
pub const BITRATES_V2_L2L3: [BitrateSlot; 16] = [
    Free, Kbps(8), Kbps(16), Kbps(24), Kbps(32), Kbps(40), Kbps(48), Kbps(56),
    Kbps(64), Kbps(80), Kbps(96), Kbps(112), Kbps(128), Kbps(144), Kbps(160), Bad,
];

/// Sample rates (Hz) per version; sample rate index 3 is reserved
pub const SAMPLE_RATES_V1: [u32; 3] = [44100, 48000, 32000];
pub const SAMPLE_RATES_V2: [u32; 3] = [22050, 24000, 16000];
pub const SAMPLE_RATES_V25: [u32; 3] = [11025, 12000, 8000];

/// Sample rate table for a version
pub fn sample_rates(version: MpegVersion) -> &'static [u32; 3] {
    match version {
        MpegVersion::Mpeg1 => &SAMPLE_RATES_V1,
        MpegVersion::Mpeg2 => &SAMPLE_RATES_V2,
        MpegVersion::Mpeg25 => &SAMPLE_RATES_V25,
    }
}

/// Channel mode (2 bits)
pub const CHANNEL_MODES: [ChannelMode; 4] = [
    ChannelMode::Stereo,        // 00
    ChannelMode::JointStereo,   // 01
    ChannelMode::DualChannel,   // 10
    ChannelMode::SingleChannel, // 11
];

/// Layer III mode extension: (intensity stereo, MS stereo)
pub const MODE_EXTENSIONS_LAYER_3: [(bool, bool); 4] = [
    (false, false), // 00
    (false, true),  // 01
    (true, false),  // 10
    (true, true),   // 11
];

/// Layer I/II mode extension: first intensity stereo band (upper bound is always 31)
pub const MODE_EXTENSION_BANDS: [u8; 4] = [4, 8, 12, 16];

/// Emphasis (2 bits); `10` is reserved but still reported
pub const EMPHASES: [Emphasis; 4] = [
    Emphasis::None,     // 00
    Emphasis::Ms50_15,  // 01
    Emphasis::Reserved, // 10
    Emphasis::CcitJ17,  // 11
];

/// Layer II bitrates allowed for single channel frames
pub const LAYER2_SINGLE_CHANNEL_BITRATES: [u32; 10] =
    [32, 48, 56, 64, 80, 96, 112, 128, 160, 192];

/// Layer II bitrates allowed for stereo, joint stereo and dual channel frames
pub const LAYER2_MULTI_CHANNEL_BITRATES: [u32; 10] =
    [64, 96, 112, 128, 160, 192, 224, 256, 320, 384];
