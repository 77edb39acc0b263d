//! Auxiliary header field decoding
//!
//! Everything after the bitrate: protection, sample rate, padding, private
//! bit, channel mode, mode extension, copyright, original and emphasis.
//! Sample rate is the only field here with a reserved value that rejects the
//! header; the Layer II bitrate rule is applied once the channel mode is known.

use log::trace;

use crate::bitrate::check_layer2_combination;
use crate::error::{DecodeError, DecodeResult};
use crate::input::RawHeader;
use crate::tables::{
    sample_rates, CHANNEL_MODES, EMPHASES, MODE_EXTENSIONS_LAYER_3, MODE_EXTENSION_BANDS,
};
use crate::types::{
    AuxiliaryFields, BitrateSelection, ChannelMode, HeaderFields, Layer, ModeExtension,
    MpegVersion,
};

/// Sample rate in Hz for a version and 2-bit index
pub fn decode_sample_rate(version: MpegVersion, index: u8) -> DecodeResult<u32> {
    sample_rates(version)
        .get(index as usize)
        .copied()
        .ok_or(DecodeError::InvalidSampleRate)
}

/// Interpret the mode extension bits for a layer and channel mode
pub fn decode_mode_extension(layer: Layer, channel_mode: ChannelMode, index: u8) -> ModeExtension {
    if channel_mode != ChannelMode::JointStereo {
        return ModeExtension::NotApplicable;
    }

    let index = (index & 0x3) as usize;
    match layer {
        Layer::LayerIII => {
            let (intensity_stereo, ms_stereo) = MODE_EXTENSIONS_LAYER_3[index];
            ModeExtension::Layer3 { intensity_stereo, ms_stereo }
        }
        Layer::LayerI | Layer::LayerII => ModeExtension::IntensityBands {
            first_band: MODE_EXTENSION_BANDS[index],
        },
    }
}

/// Decode the remaining fields of a header whose version, layer and bitrate
/// are already resolved.
pub fn decode_auxiliary(
    fields: HeaderFields,
    selection: &BitrateSelection,
    raw: &RawHeader,
) -> DecodeResult<AuxiliaryFields> {
    let crc_protected = raw.protection_bit() == 0;
    let sample_rate = decode_sample_rate(fields.version, raw.sample_rate_index())?;
    let padded = raw.padding_bit() == 1;
    let private_bit = raw.private_bit() == 1;

    let channel_mode = CHANNEL_MODES[raw.channel_mode_id() as usize];
    check_layer2_combination(fields.layer, selection.bitrate, channel_mode)?;
    let mode_extension = decode_mode_extension(fields.layer, channel_mode, raw.mode_extension_id());

    let copyright = raw.copyright_bit() == 1;
    let original = raw.original_bit() == 1;
    let emphasis = EMPHASES[raw.emphasis_id() as usize];

    trace!(
        "{}: {} Hz, {}, mode extension {}, emphasis {}",
        raw,
        sample_rate,
        channel_mode,
        mode_extension,
        emphasis
    );

    Ok(AuxiliaryFields {
        crc_protected,
        sample_rate,
        padded,
        private_bit,
        channel_mode,
        mode_extension,
        copyright,
        original,
        emphasis,
    })
}
