//! Bitrate table selection and validation
//!
//! The table is chosen from version and layer alone. MPEG-2 and MPEG-2.5
//! share tables, and their Layer II and Layer III share one table as well.
//! Layer II additionally restricts which bitrates each channel mode may use;
//! that check needs the channel mode, so it runs later via
//! [`check_layer2_combination`].

use std::fmt;

use log::trace;

use crate::error::{DecodeError, DecodeResult};
use crate::input::RawHeader;
use crate::tables::{
    BITRATES_V1_L1, BITRATES_V1_L2, BITRATES_V1_L3, BITRATES_V2_L1, BITRATES_V2_L2L3,
    LAYER2_MULTI_CHANNEL_BITRATES, LAYER2_SINGLE_CHANNEL_BITRATES,
};
use crate::types::{
    Bitrate, BitrateSelection, BitrateSlot, ChannelMode, HeaderFields, Layer, MpegVersion,
};

/// Which bitrate table applies to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitrateTable {
    V1L1,
    V1L2,
    V1L3,
    V2L1,
    V2L2L3,
}

impl BitrateTable {
    /// Pick the table for a version/layer pair
    pub fn select(version: MpegVersion, layer: Layer) -> Self {
        match (version, layer) {
            (MpegVersion::Mpeg1, Layer::LayerI) => BitrateTable::V1L1,
            (MpegVersion::Mpeg1, Layer::LayerII) => BitrateTable::V1L2,
            (MpegVersion::Mpeg1, Layer::LayerIII) => BitrateTable::V1L3,
            (MpegVersion::Mpeg2 | MpegVersion::Mpeg25, Layer::LayerI) => BitrateTable::V2L1,
            (MpegVersion::Mpeg2 | MpegVersion::Mpeg25, Layer::LayerII | Layer::LayerIII) => {
                BitrateTable::V2L2L3
            }
        }
    }

    pub fn slots(&self) -> &'static [BitrateSlot; 16] {
        match self {
            BitrateTable::V1L1 => &BITRATES_V1_L1,
            BitrateTable::V1L2 => &BITRATES_V1_L2,
            BitrateTable::V1L3 => &BITRATES_V1_L3,
            BitrateTable::V2L1 => &BITRATES_V2_L1,
            BitrateTable::V2L2L3 => &BITRATES_V2_L2L3,
        }
    }

    /// Look up a 4-bit index; anything but a bitrate or free format is `None`
    pub fn lookup(&self, index: u8) -> Option<Bitrate> {
        match self.slots().get(index as usize)? {
            BitrateSlot::Free => Some(Bitrate::Free),
            BitrateSlot::Kbps(kbps) => Some(Bitrate::Kbps(*kbps)),
            BitrateSlot::Bad => None,
        }
    }
}

impl fmt::Display for BitrateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitrateTable::V1L1 => "V1,L1",
            BitrateTable::V1L2 => "V1,L2",
            BitrateTable::V1L3 => "V1,L3",
            BitrateTable::V2L1 => "V2,L1",
            BitrateTable::V2L2L3 => "V2,L2L3",
        })
    }
}

/// Resolve the bitrate index of `raw` in the table for `fields`.
pub fn resolve_bitrate(fields: HeaderFields, raw: &RawHeader) -> DecodeResult<BitrateSelection> {
    let table = BitrateTable::select(fields.version, fields.layer);
    let index = raw.bitrate_index();
    let bitrate = table.lookup(index).ok_or(DecodeError::InvalidBitrate)?;

    trace!("bitrate index {:04b} in table {} -> {}", index, table, bitrate);
    Ok(BitrateSelection { table, index, bitrate })
}

/// Enforce the Layer II bitrate/channel mode rule.
///
/// Free format and layers other than II always pass.
pub fn check_layer2_combination(
    layer: Layer,
    bitrate: Bitrate,
    channel_mode: ChannelMode,
) -> DecodeResult<()> {
    let kbps = match (layer, bitrate.kbps()) {
        (Layer::LayerII, Some(kbps)) => kbps,
        _ => return Ok(()),
    };

    let allowed: &[u32] = match channel_mode {
        ChannelMode::SingleChannel => &LAYER2_SINGLE_CHANNEL_BITRATES,
        ChannelMode::Stereo | ChannelMode::JointStereo | ChannelMode::DualChannel => {
            &LAYER2_MULTI_CHANNEL_BITRATES
        }
    };

    if allowed.contains(&kbps) {
        Ok(())
    } else {
        Err(DecodeError::InvalidLayer2Combination)
    }
}
