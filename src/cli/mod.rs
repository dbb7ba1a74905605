//! Command-line front-ends: `svg2hanzi` and `hanzi-center`.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read, Write};
use std::path::Path;

use clap::Args;
use log::LevelFilter;
use tempfile::NamedTempFile;

use crate::errors::{Error, Result};
use crate::FitConfig;

pub mod center;
pub mod convert;

/// Placement flags shared by both front-ends
#[derive(Args, Clone, Debug)]
pub(crate) struct FitArgs {
    /// Scale the glyph uniformly to fill the canvas (less padding)
    #[arg(long)]
    fit: bool,

    /// Padding on every side when fitting; overrides --pad-x / --pad-y
    #[arg(long)]
    pad: Option<f64>,

    /// Horizontal padding when fitting
    #[arg(long, default_value = "0")]
    pad_x: f64,

    /// Vertical padding when fitting
    #[arg(long, default_value = "0")]
    pad_y: f64,

    /// Horizontal nudge applied after centering
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    bias_x: f64,

    /// Vertical nudge applied after centering
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    bias_y: f64,

    /// Treat +y as up: a positive --bias-y moves the glyph down
    #[arg(long)]
    y_up: bool,

    /// Equalize left and right margins
    #[arg(long)]
    balance_x: bool,

    /// Equalize top and bottom margins
    #[arg(long)]
    balance_y: bool,
}

impl FitArgs {
    pub(crate) fn to_config(&self) -> Result<FitConfig> {
        let config = FitConfig {
            fit: self.fit,
            pad_x: self.pad.unwrap_or(self.pad_x),
            pad_y: self.pad.unwrap_or(self.pad_y),
            bias_x: self.bias_x,
            bias_y: self.bias_y,
            flip_y_bias: self.y_up,
            balance_x: self.balance_x,
            balance_y: self.balance_y,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Install the logger: `info` when `verbose`, otherwise `warn`.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    // A logger may already be installed when embedded
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Reject an output path referring to the same file as the input.
pub(crate) fn check_paths(input: &str, output: &str) -> Result<()> {
    if input != "-" && output != "-" {
        let in_path = Path::new(input);
        let out_path = Path::new(output);
        if out_path.exists()
            && out_path.canonicalize().map_err(Error::from_err)?
                == in_path.canonicalize().map_err(Error::from_err)?
        {
            return Err(Error::Cli(
                "Output path must not refer to the same file as the input file.".into(),
            ));
        }
    }
    Ok(())
}

/// Open `input` for reading, with '-' for stdin
pub(crate) fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
    if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // Read everything up front so a single Ctrl-D ends interactive input
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Ok(Box::new(BufReader::new(Cursor::new(buf))))
        } else {
            Ok(Box::new(stdin))
        }
    } else {
        Ok(Box::new(BufReader::new(File::open(input)?)))
    }
}

/// Run `render` against `output` ('-' for stdout).
///
/// File output is rendered to a temporary file first and only copied into
/// place once rendering succeeds.
pub(crate) fn write_output(
    output: &str,
    render: impl FnOnce(&mut dyn Write) -> Result<()>,
) -> Result<()> {
    if output == "-" {
        let mut stdout = std::io::stdout().lock();
        render(&mut stdout)?;
        writeln!(stdout)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        render(&mut out_temp)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems.
        fs::copy(out_temp.path(), output)?;
    }
    Ok(())
}
