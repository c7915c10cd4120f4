//! cellid CLI tool
//!
//! Decodes a hex-encoded Cell Global Identity given on the command line.
//!
//! # Usage
//!
//! ```bash
//! cellid-decode "72 F4 10 00 01 00 02"
//! cellid-decode -f json 21635404 0100FF   # rejected: one cell id per call
//! cellid-decode -f json "21635404 0100FF"
//! ```

mod input;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use cellid_common::{init_logging, render, DecoderConfig, Error, LogLevel, OutputFormat};

use input::decode_argument;

/// Process status for every failure: bad arguments, bad input or I/O.
const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "cellid-decode")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hex-encoded 7-byte cell identity (quote it if it contains spaces)
    #[arg(value_name = "cell-id")]
    pub cell_id: String,

    /// Output format: text, json or yaml
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to a YAML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os(), &mut io::stderr()) {
        Ok(args) => args,
        Err(status) => return ExitCode::from(status),
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, &mut io::stderr());
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    init_logging(config.log_level);

    ExitCode::from(run(
        &args.cell_id,
        config.output,
        &mut io::stdout(),
        &mut io::stderr(),
    ))
}

/// Parses the command line. Argument errors print a diagnostic and the usage
/// line to `err` and yield the failure status; help and version exit here.
fn parse_args<I, T>(argv: I, err: &mut impl Write) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let message = e.to_string();
            let reason = message.lines().next().unwrap_or_default();
            let _ = writeln!(
                err,
                "Invalid argument: {}\n{}",
                reason.trim_start_matches("error: "),
                Args::command().render_usage()
            );
            EXIT_FAILURE
        }
    })
}

/// Decodes `cell_id` and writes the rendered record to `out`. Returns the
/// process status; failures are reported on `err`.
fn run(cell_id: &str, format: OutputFormat, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match write_decoded(cell_id, format, out) {
        Ok(()) => 0,
        Err(e) => {
            report_error(&e, err);
            EXIT_FAILURE
        }
    }
}

fn write_decoded(cell_id: &str, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    debug!(%format, "decoding cell identity");

    let cgi = decode_argument(cell_id).map_err(|e| {
        debug!(input = %cell_id, error = %e, "rejected cell identity");
        e
    })?;
    let rendered = render(&cgi, format).context("Failed to render cell identity")?;
    writeln!(out, "{}", rendered).context("Failed to write decoded record")?;
    Ok(())
}

/// Merges the configuration file (if any) with command-line overrides.
fn load_config(args: &Args) -> Result<DecoderConfig> {
    let base = match &args.config_file {
        Some(path) => DecoderConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => DecoderConfig::default(),
    };
    Ok(base.with_overrides(args.format, args.log_level))
}

/// Writes the one-line diagnostic for `e`, followed by the usage line when
/// the input itself was at fault.
fn report_error(e: &anyhow::Error, err: &mut impl Write) {
    let _ = match input_error(e) {
        Some(input) => writeln!(
            err,
            "Invalid argument: {}\n{}",
            input,
            Args::command().render_usage()
        ),
        None => writeln!(err, "ERROR: {:#}", e),
    };
}

/// Returns the decoder error behind `e` if it was caused by bad input.
fn input_error(e: &anyhow::Error) -> Option<&Error> {
    e.downcast_ref::<Error>().filter(|err| err.is_input_error())
}
