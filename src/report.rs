//! Presentation of decode results
//!
//! Writers for the human readable field list, a raw bitfield breakdown, the
//! text report of a whole batch and (with the `json` feature) a JSON report.

use std::io::{self, Write};

use crate::error::DecodeResult;
use crate::input::RawHeader;
use crate::types::DecodedHeader;

/// Write the decoded field list
pub fn write_text<W: Write>(writer: &mut W, header: &DecodedHeader) -> io::Result<()> {
    writeln!(writer, "{}", header)
}

/// Write every raw bitfield with its decimal and binary value.
///
/// Works on any four bytes, including headers that fail to decode.
pub fn write_bits<W: Write>(writer: &mut W, raw: &RawHeader) -> io::Result<()> {
    let fields: [(&str, u32, usize); 13] = [
        ("Sync", raw.sync_word() as u32, 11),
        ("Version", raw.version_id() as u32, 2),
        ("Layer", raw.layer_id() as u32, 2),
        ("Protection", raw.protection_bit() as u32, 1),
        ("Bitrate", raw.bitrate_index() as u32, 4),
        ("Sample rate", raw.sample_rate_index() as u32, 2),
        ("Padding", raw.padding_bit() as u32, 1),
        ("Private", raw.private_bit() as u32, 1),
        ("Mode", raw.channel_mode_id() as u32, 2),
        ("Mode ext", raw.mode_extension_id() as u32, 2),
        ("Copyright", raw.copyright_bit() as u32, 1),
        ("Original", raw.original_bit() as u32, 1),
        ("Emphasis", raw.emphasis_id() as u32, 2),
    ];

    writeln!(writer, "Header: {} (0x{:08X})", raw, raw.word())?;
    for (name, value, width) in fields {
        writeln!(
            writer,
            "  {:<12} {:>4} ({:0width$b})",
            format!("{}:", name),
            value,
            value,
            width = width
        )?;
    }
    Ok(())
}

/// Write one block per decode attempt, separated by a blank line.
///
/// Failed inputs print their error message; later inputs are still reported.
/// With `show_bits`, inputs that parse as four bytes are preceded by their
/// bitfield table.
pub fn write_text_report<W: Write>(
    writer: &mut W,
    show_bits: bool,
    results: &[(String, DecodeResult<DecodedHeader>)],
) -> io::Result<()> {
    for (i, (input, result)) in results.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        if show_bits {
            if let Ok(raw) = input.parse::<RawHeader>() {
                write_bits(writer, &raw)?;
                writeln!(writer)?;
            }
        }
        match result {
            Ok(header) => write_text(writer, header)?,
            Err(err) => writeln!(writer, "{}", err)?,
        }
    }
    Ok(())
}

#[cfg(feature = "json")]
pub use self::json::{write_json, JsonEntry};

#[cfg(feature = "json")]
mod json {
    use std::io::{self, Write};

    use serde::Serialize;

    use crate::error::DecodeResult;
    use crate::types::DecodedHeader;

    /// One decode attempt in a JSON report
    #[derive(Debug, Serialize)]
    pub struct JsonEntry<'a> {
        pub input: &'a str,
        pub header: Option<DecodedHeader>,
        pub error: Option<String>,
    }

    impl<'a> JsonEntry<'a> {
        pub fn new(input: &'a str, result: &DecodeResult<DecodedHeader>) -> Self {
            match result {
                Ok(header) => Self { input, header: Some(*header), error: None },
                Err(err) => Self { input, header: None, error: Some(err.to_string()) },
            }
        }
    }

    /// Write all entries as a pretty printed JSON array
    pub fn write_json<W: Write>(writer: &mut W, entries: &[JsonEntry<'_>]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writer.write_all(json.as_bytes())?;
        writeln!(writer)
    }
}
