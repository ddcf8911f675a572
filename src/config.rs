// File: src/config.rs
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use crate::errors::{ConvertError, Result};

/// Command line of the converter binary.
#[derive(Debug, Parser)]
#[command(name = "markov-convert", version, about)]
pub struct Args {
    /// Legacy database, named chat_<id>.<ext>
    pub input: Option<String>,

    /// Write the chain here instead of <input dir>/<id>.json
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Do not print the per-word progress line
    #[arg(short, long)]
    pub quiet: bool,

    /// Read the written file back and check it
    #[arg(long)]
    pub verify: bool,

    /// Anything after the input is ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Command {
    Convert(Config),
    /// `--help` or `--version`; the error carries the text to print.
    Info(clap::Error),
}

/// Parses a full command line, program name first.
///
/// Every clap failure other than a help or version request is a
/// [`ConvertError::Usage`], so bad arguments never share an exit code
/// with a missing input file.
pub fn parse_command<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Config::try_from(args).map(Command::Convert),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Command::Info(e))
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "rejected command line");
            Err(ConvertError::Usage)
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: String,
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub quiet: bool,
    pub verify: bool,
}

impl Config {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into(),
            output: None,
            pretty: false,
            quiet: false,
            verify: false,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConvertError;

    fn try_from(args: Args) -> Result<Self> {
        let input = args.input.ok_or(ConvertError::Usage)?;
        Ok(Self {
            input,
            output: args.output,
            pretty: args.pretty,
            quiet: args.quiet,
            verify: args.verify,
        })
    }
}
