//! MPEG audio frame header decoder command line tool
//!
//! Decodes each header given on the command line, or one header per line
//! of standard input when none are given.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use log::debug;

use mp3_header_rs::report::write_text_report;
use mp3_header_rs::{
    decode_hex, group_header_args, Config, DecodeResult, DecodedHeader, OutputFormat,
};

/// Decode 4-byte MPEG audio (MP3) frame headers given as hex, e.g. "FF FB 90 64"
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Headers to decode; an unquoted "FF FB 90 64" is read as one header. Reads stdin when empty
    headers: Vec<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Print the raw bitfields before each decoded header
    #[arg(short, long)]
    bits: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            format: self.format,
            show_bits: self.bits,
            verbose: self.verbose,
        }
    }
}

/// Collect the inputs to decode, one header per non-blank stdin line if none were given
fn collect_inputs(headers: Vec<String>) -> io::Result<Vec<String>> {
    if !headers.is_empty() {
        return Ok(group_header_args(headers));
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

#[cfg(feature = "json")]
fn write_json_report<W: Write>(
    out: &mut W,
    results: &[(String, DecodeResult<DecodedHeader>)],
) -> io::Result<()> {
    use mp3_header_rs::report::{write_json, JsonEntry};

    let entries: Vec<JsonEntry<'_>> = results
        .iter()
        .map(|(input, result)| JsonEntry::new(input, result))
        .collect();
    write_json(out, &entries)
}

#[cfg(not(feature = "json"))]
fn write_json_report<W: Write>(
    _out: &mut W,
    _results: &[(String, DecodeResult<DecodedHeader>)],
) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "JSON output is not available in this build"))
}

fn run(args: Args) -> io::Result<bool> {
    let config = args.config();
    let inputs = collect_inputs(args.headers)?;
    debug!("decoding {} header(s) as {}", inputs.len(), config.format);

    let results: Vec<(String, DecodeResult<DecodedHeader>)> = inputs
        .into_iter()
        .map(|input| {
            let result = decode_hex(&input);
            (input, result)
        })
        .collect();
    let all_ok = results.iter().all(|(_, result)| result.is_ok());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => write_text_report(&mut out, config.show_bits, &results)?,
        OutputFormat::Json => write_json_report(&mut out, &results)?,
    }
    out.flush()?;

    Ok(all_ok)
}

fn main() {
    let args = Args::parse();
    let config = args.config();

    // Initialize logger with minimal output (warnings by default)
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(err) = config.validate() {
        eprintln!("Error: {}", err);
        process::exit(2);
    }

    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
