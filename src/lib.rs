//! # Rust MP3 Header Decoder
//!
//! A pure Rust decoder for the 4-byte MPEG audio frame header. It reports
//! version, layer, bitrate, sample rate, channel mode and the auxiliary
//! flags of MPEG-1, MPEG-2 and MPEG-2.5 Layer I/II/III frames, or the first
//! validation rule the header breaks.
//!
//! ```
//! use mp3_header_rs::{decode_hex, Bitrate, DecodeError};
//!
//! let header = decode_hex("FF FB 90 64").unwrap();
//! assert_eq!(header.bitrate(), Bitrate::Kbps(128));
//! assert_eq!(header.sample_rate(), 44100);
//!
//! assert_eq!(decode_hex("00 00 00 00"), Err(DecodeError::InvalidSyncWord));
//! ```

pub mod bitrate;
pub mod config;
pub mod decoder;
pub mod error;
pub mod fields;
pub mod header;
pub mod input;
pub mod report;
pub mod tables;
pub mod types;

pub use bitrate::BitrateTable;
pub use config::{Config, OutputFormat};
pub use decoder::{decode_header, decode_hex};
pub use error::{ConfigError, ConfigResult, DecodeError, DecodeResult};
pub use input::{group_header_args, parse_hex_bytes, RawHeader};
pub use types::{
    Bitrate, ChannelMode, DecodedHeader, Emphasis, Layer, ModeExtension, MpegVersion,
};
