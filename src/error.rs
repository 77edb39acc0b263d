//! Error types for the header decoder
//!
//! This module defines the rejection reasons a decode attempt can end with,
//! plus the configuration errors raised by the command line front end.

use thiserror::Error;

/// Reason a 4-byte input is not a valid MPEG audio frame header.
///
/// Variants are listed in the order the decoder checks them; a decode
/// attempt reports only the first rule that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DecodeError {
    /// Input is not exactly 4 hexadecimal byte pairs
    #[error("Please enter exactly 4 valid hexadecimal bytes.")]
    MalformedInput,

    /// Leading 11 bits are not all set
    #[error("Invalid sync word. Not a valid MP3 frame header.")]
    InvalidSyncWord,

    /// Version field holds the reserved value `01`
    #[error("Invalid version ID. Not a valid MP3 frame header.")]
    InvalidVersion,

    /// Layer field holds the reserved value `00`
    #[error("Invalid layer ID. Not a valid MP3 frame header.")]
    InvalidLayer,

    /// Bitrate index resolves to the "bad" slot of its table
    #[error("Invalid bitrate index. Not a valid MP3 frame header.")]
    InvalidBitrate,

    /// Sample rate index holds the reserved value `11`
    #[error("Invalid sample rate index. Not a valid MP3 frame header.")]
    InvalidSampleRate,

    /// Layer II bitrate is not allowed for the frame's channel mode
    #[error("Invalid bitrate and channel mode combination for Layer II.")]
    InvalidLayer2Combination,
}

/// Front end configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Output format name not recognised
    #[error("Unknown output format: {0:?} (expected \"text\" or \"json\")")]
    UnknownFormat(String),

    /// JSON output requested from a build without the `json` feature
    #[error("JSON output is not available in this build (enable the \"json\" feature)")]
    JsonUnavailable,
}

/// Specialized result types for different modules
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
