//! Frame header decoding pipeline
//!
//! Decoding runs as a strict sequence of stages, each of which may reject
//! the header:
//!
//! 1. hex text to bytes ([`crate::input`])
//! 2. sync word, version, layer ([`crate::header`])
//! 3. bitrate ([`crate::bitrate`])
//! 4. remaining fields and the Layer II rule ([`crate::fields`])
//!
//! The first failing stage ends the decode; no partial result is returned.

use log::debug;

use crate::bitrate::resolve_bitrate;
use crate::error::DecodeResult;
use crate::fields::decode_auxiliary;
use crate::header::decode_header_fields;
use crate::input::{parse_hex_bytes, RawHeader};
use crate::types::DecodedHeader;

/// Decode a frame header from its four bytes.
pub fn decode_header(raw: impl Into<RawHeader>) -> DecodeResult<DecodedHeader> {
    let raw = raw.into();
    decode_raw(&raw).map_err(|err| {
        debug!("rejected header {}: {:?}", raw, err);
        err
    })
}

/// Decode a frame header from hex text such as `"FF FB 90 64"`.
pub fn decode_hex(text: &str) -> DecodeResult<DecodedHeader> {
    let bytes = parse_hex_bytes(text).map_err(|err| {
        debug!("rejected input {:?}: {:?}", text, err);
        err
    })?;
    decode_header(bytes)
}

fn decode_raw(raw: &RawHeader) -> DecodeResult<DecodedHeader> {
    let fields = decode_header_fields(raw)?;
    let selection = resolve_bitrate(fields, raw)?;
    let aux = decode_auxiliary(fields, &selection, raw)?;
    Ok(DecodedHeader::assemble(fields, selection, aux))
}
