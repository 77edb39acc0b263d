//! Sync word, version and layer decoding
//!
//! These are the fields every later stage needs to interpret the rest of
//! the header, so they are validated first.

use log::trace;

use crate::error::{DecodeError, DecodeResult};
use crate::input::RawHeader;
use crate::tables::{LAYERS, VERSIONS};
use crate::types::HeaderFields;

/// All 11 sync bits set
pub const SYNC_WORD: u16 = 0x7FF;

/// Validate the sync word and resolve version and layer.
pub fn decode_header_fields(raw: &RawHeader) -> DecodeResult<HeaderFields> {
    if raw.sync_word() != SYNC_WORD {
        return Err(DecodeError::InvalidSyncWord);
    }

    let version = VERSIONS[raw.version_id() as usize].ok_or(DecodeError::InvalidVersion)?;
    let layer = LAYERS[raw.layer_id() as usize].ok_or(DecodeError::InvalidLayer)?;

    trace!("{}: {} {}", raw, version, layer);
    Ok(HeaderFields { version, layer })
}
