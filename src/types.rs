//! Data model for decoded MPEG audio frame headers
//!
//! The enumerations here only hold non-reserved values. Reserved bit patterns
//! are rejected while decoding and never become a value of these types,
//! except for [`Emphasis::Reserved`], which is reported as-is.

use std::fmt;

#[cfg(feature = "json")]
use serde::Serialize;

/// Frame header length in bytes
pub const HEADER_LEN: usize = 4;

/// MPEG audio version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum MpegVersion {
    /// MPEG-2.5 (unofficial low sample rate extension)
    Mpeg25,
    /// MPEG-2 (ISO/IEC 13818-3)
    Mpeg2,
    /// MPEG-1 (ISO/IEC 11172-3)
    Mpeg1,
}

impl fmt::Display for MpegVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MpegVersion::Mpeg1 => "MPEG Version 1",
            MpegVersion::Mpeg2 => "MPEG Version 2",
            MpegVersion::Mpeg25 => "MPEG Version 2.5",
        })
    }
}

/// MPEG audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum Layer {
    LayerI,
    LayerII,
    LayerIII,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layer::LayerI => "Layer I",
            Layer::LayerII => "Layer II",
            Layer::LayerIII => "Layer III",
        })
    }
}

/// Channel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum ChannelMode {
    /// Standard stereo
    Stereo,
    /// Joint stereo (intensity and/or mid/side coding)
    JointStereo,
    /// Dual channel (two independent mono channels)
    DualChannel,
    /// Single channel (mono)
    SingleChannel,
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChannelMode::Stereo => "Stereo",
            ChannelMode::JointStereo => "Joint stereo (Stereo)",
            ChannelMode::DualChannel => "Dual channel (Two mono)",
            ChannelMode::SingleChannel => "Single channel (Mono)",
        })
    }
}

/// Pre-emphasis indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum Emphasis {
    /// No emphasis
    None,
    /// 50/15 microseconds emphasis
    Ms50_15,
    /// Reserved bit pattern `10`, reported rather than rejected
    Reserved,
    /// CCITT J.17 emphasis
    CcitJ17,
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Emphasis::None => "No emphasis",
            Emphasis::Ms50_15 => "50/15 ms",
            Emphasis::Reserved => "Reserved",
            Emphasis::CcitJ17 => "CCIT J.17",
        })
    }
}

/// One slot of a bitrate table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitrateSlot {
    /// Free format (index 0)
    Free,
    /// Fixed bitrate in kbps
    Kbps(u32),
    /// Forbidden index
    Bad,
}

/// A resolved, usable bitrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum Bitrate {
    /// Free format; the encoder chose a bitrate not present in the table
    Free,
    /// Fixed bitrate in kbps
    Kbps(u32),
}

impl Bitrate {
    /// Bitrate in kbps, or `None` for free format
    pub fn kbps(&self) -> Option<u32> {
        match self {
            Bitrate::Free => None,
            Bitrate::Kbps(kbps) => Some(*kbps),
        }
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bitrate::Free => f.write_str("Free"),
            Bitrate::Kbps(kbps) => write!(f, "{}", kbps),
        }
    }
}

/// Meaning of the mode extension bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum ModeExtension {
    /// Channel mode is not joint stereo
    NotApplicable,
    /// Layer III joint stereo coding switches
    Layer3 { intensity_stereo: bool, ms_stereo: bool },
    /// Layer I/II intensity stereo, applied from `first_band` up to band 31
    IntensityBands { first_band: u8 },
}

impl fmt::Display for ModeExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ModeExtension::NotApplicable => f.write_str("N/A"),
            ModeExtension::Layer3 { intensity_stereo, ms_stereo } => {
                match (intensity_stereo, ms_stereo) {
                    (false, false) => f.write_str("No joint stereo coding"),
                    (true, false) => f.write_str("Intensity stereo"),
                    (false, true) => f.write_str("MS stereo"),
                    (true, true) => f.write_str("Intensity stereo and MS stereo"),
                }
            }
            ModeExtension::IntensityBands { first_band } => {
                write!(f, "Intensity stereo: Bands {} to 31", first_band)
            }
        }
    }
}

/// Version and layer, both known to be non-reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields {
    pub version: MpegVersion,
    pub layer: Layer,
}

/// Bitrate table key plus the bitrate it resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitrateSelection {
    pub table: crate::bitrate::BitrateTable,
    pub index: u8,
    pub bitrate: Bitrate,
}

/// Fields decoded from bytes 2 to 4 after version, layer and bitrate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxiliaryFields {
    pub crc_protected: bool,
    pub sample_rate: u32,
    pub padded: bool,
    pub private_bit: bool,
    pub channel_mode: ChannelMode,
    pub mode_extension: ModeExtension,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: Emphasis,
}

/// Fully decoded frame header
///
/// Only produced by [`crate::decoder::decode_header`] once every validation
/// rule has passed; there is no way to build a partially valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct DecodedHeader {
    version: MpegVersion,
    layer: Layer,
    crc_protected: bool,
    bitrate: Bitrate,
    sample_rate: u32,
    padded: bool,
    private_bit: bool,
    channel_mode: ChannelMode,
    mode_extension: ModeExtension,
    copyright: bool,
    original: bool,
    emphasis: Emphasis,
}

impl DecodedHeader {
    /// Combine the outputs of every decoding stage
    pub(crate) fn assemble(
        fields: HeaderFields,
        selection: BitrateSelection,
        aux: AuxiliaryFields,
    ) -> Self {
        Self {
            version: fields.version,
            layer: fields.layer,
            crc_protected: aux.crc_protected,
            bitrate: selection.bitrate,
            sample_rate: aux.sample_rate,
            padded: aux.padded,
            private_bit: aux.private_bit,
            channel_mode: aux.channel_mode,
            mode_extension: aux.mode_extension,
            copyright: aux.copyright,
            original: aux.original,
            emphasis: aux.emphasis,
        }
    }

    pub fn version(&self) -> MpegVersion {
        self.version
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// True when a 16-bit CRC follows the header
    pub fn crc_protected(&self) -> bool {
        self.crc_protected
    }

    pub fn bitrate(&self) -> Bitrate {
        self.bitrate
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn padded(&self) -> bool {
        self.padded
    }

    pub fn private_bit(&self) -> bool {
        self.private_bit
    }

    pub fn channel_mode(&self) -> ChannelMode {
        self.channel_mode
    }

    pub fn mode_extension(&self) -> ModeExtension {
        self.mode_extension
    }

    pub fn copyright(&self) -> bool {
        self.copyright
    }

    /// True for original media, false for a copy
    pub fn original(&self) -> bool {
        self.original
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }
}

impl fmt::Display for DecodedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sync Word: (Valid)")?;
        writeln!(f, "MPEG Audio Version: {}", self.version)?;
        writeln!(f, "Layer: {}", self.layer)?;
        writeln!(
            f,
            "Protection: {}",
            if self.crc_protected { "Protected by CRC" } else { "No CRC" }
        )?;
        writeln!(f, "Bitrate: {} kbps", self.bitrate)?;
        writeln!(f, "Sampling Rate: {} Hz", self.sample_rate)?;
        writeln!(
            f,
            "Padding: {}",
            if self.padded { "Padded" } else { "Not padded" }
        )?;
        writeln!(
            f,
            "Private Bit: {}",
            if self.private_bit { "Private bit set" } else { "Private bit not set" }
        )?;
        writeln!(f, "Channel Mode: {}", self.channel_mode)?;
        writeln!(f, "Mode Extension: {}", self.mode_extension)?;
        writeln!(
            f,
            "Copyright: {}",
            if self.copyright { "Copyright bit set" } else { "Copyright bit not set" }
        )?;
        writeln!(
            f,
            "Original: {}",
            if self.original { "Original media" } else { "Copy of original media" }
        )?;
        write!(f, "Emphasis: {}", self.emphasis)
    }
}
