//! Raw header input
//!
//! Turns caller supplied hex text into exactly four bytes and exposes the
//! raw bitfields of the standard frame header layout:
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! ```
//!
//! A = sync, B = version, C = layer, D = protection, E = bitrate index,
//! F = sample rate index, G = padding, H = private, I = channel mode,
//! J = mode extension, K = copyright, L = original, M = emphasis.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::{DecodeError, DecodeResult};
use crate::types::HEADER_LEN;

/// Number of hex digits in a complete header
const HEX_DIGITS: usize = HEADER_LEN * 2;

/// Whitespace as matched by a regex `\s`, which also covers the byte order mark
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parse hex text such as `"FF FB 90 64"` into four bytes.
///
/// Whitespace anywhere is ignored. What remains must be exactly eight ASCII
/// hex digits; anything else is [`DecodeError::MalformedInput`].
pub fn parse_hex_bytes(text: &str) -> DecodeResult<[u8; HEADER_LEN]> {
    let digits: Vec<char> = text.chars().filter(|&c| !is_separator(c)).collect();

    if digits.len() != HEX_DIGITS {
        trace!("hex input has {} digits, expected {}", digits.len(), HEX_DIGITS);
        return Err(DecodeError::MalformedInput);
    }

    let mut bytes = [0u8; HEADER_LEN];
    for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
        let high = pair[0].to_digit(16).ok_or(DecodeError::MalformedInput)?;
        let low = pair[1].to_digit(16).ok_or(DecodeError::MalformedInput)?;
        *byte = ((high << 4) | low) as u8;
    }

    Ok(bytes)
}

/// Rejoin a header that was split across several command line arguments.
///
/// `FF FB 90 64` passed unquoted arrives as four arguments. When none of the
/// arguments is a header on its own but all of them together are, they are
/// joined into one input; otherwise the arguments are returned unchanged.
pub fn group_header_args(args: Vec<String>) -> Vec<String> {
    if args.len() < 2 || args.iter().any(|arg| parse_hex_bytes(arg).is_ok()) {
        return args;
    }

    let joined = args.join(" ");
    if parse_hex_bytes(&joined).is_ok() {
        trace!("joined {} arguments into header {:?}", args.len(), joined);
        vec![joined]
    } else {
        args
    }
}

/// The four header bytes, with accessors for each bitfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHeader {
    bytes: [u8; HEADER_LEN],
}

impl RawHeader {
    pub fn new(bytes: [u8; HEADER_LEN]) -> Self {
        Self { bytes }
    }

    /// Header as a big-endian 32-bit word
    pub fn word(&self) -> u32 {
        u32::from_be_bytes(self.bytes)
    }

    /// 11-bit frame sync
    pub fn sync_word(&self) -> u16 {
        ((self.word() >> 21) & 0x7FF) as u16
    }

    pub fn version_id(&self) -> u8 {
        ((self.word() >> 19) & 0x3) as u8
    }

    pub fn layer_id(&self) -> u8 {
        ((self.word() >> 17) & 0x3) as u8
    }

    /// 0 means a CRC follows the header
    pub fn protection_bit(&self) -> u8 {
        ((self.word() >> 16) & 0x1) as u8
    }

    pub fn bitrate_index(&self) -> u8 {
        ((self.word() >> 12) & 0xF) as u8
    }

    pub fn sample_rate_index(&self) -> u8 {
        ((self.word() >> 10) & 0x3) as u8
    }

    pub fn padding_bit(&self) -> u8 {
        ((self.word() >> 9) & 0x1) as u8
    }

    pub fn private_bit(&self) -> u8 {
        ((self.word() >> 8) & 0x1) as u8
    }

    pub fn channel_mode_id(&self) -> u8 {
        ((self.word() >> 6) & 0x3) as u8
    }

    pub fn mode_extension_id(&self) -> u8 {
        ((self.word() >> 4) & 0x3) as u8
    }

    pub fn copyright_bit(&self) -> u8 {
        ((self.word() >> 3) & 0x1) as u8
    }

    pub fn original_bit(&self) -> u8 {
        ((self.word() >> 2) & 0x1) as u8
    }

    pub fn emphasis_id(&self) -> u8 {
        (self.word() & 0x3) as u8
    }
}

impl From<[u8; HEADER_LEN]> for RawHeader {
    fn from(bytes: [u8; HEADER_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl From<u32> for RawHeader {
    fn from(word: u32) -> Self {
        Self::new(word.to_be_bytes())
    }
}

impl FromStr for RawHeader {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_bytes(s).map(Self::new)
    }
}

impl fmt::Display for RawHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2, b3] = self.bytes;
        write!(f, "{:02X} {:02X} {:02X} {:02X}", b0, b1, b2, b3)
    }
}
