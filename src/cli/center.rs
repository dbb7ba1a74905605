//! `hanzi-center`: re-center an existing glyph JSON record.

use clap::Parser;

use super::{check_paths, open_input, write_output, FitArgs};
use crate::errors::{Error, Result};
use crate::{center_stream, CenterConfig};

/// Command line arguments
#[derive(Parser)]
#[command(
    name = "hanzi-center",
    author,
    version,
    about = "hanzi-center: center and fit glyph JSON on the 1024 canvas",
    long_about = None
)]
struct Arguments {
    /// JSON file to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target JSON file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Replace the `character` field
    #[arg(long = "char")]
    character: Option<String>,

    #[command(flatten)]
    fit: FitArgs,

    /// Report the derived bbox and transform
    #[arg(short, long)]
    verbose: bool,
}

/// Top-level configuration used by the `hanzi-center` command-line process.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    pub verbose: bool,
    pub center: CenterConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        check_paths(&args.file, &args.output)?;
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            verbose: args.verbose,
            center: CenterConfig {
                character: args.character,
                fit: args.fit.to_config()?,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Read glyph JSON from `input` ('-' for stdin), re-center it, and write
/// the result to `output` ('-' for stdout).
pub fn center_file(input: &str, output: &str, config: &CenterConfig) -> Result<()> {
    let mut in_reader = open_input(input)?;
    write_output(output, |writer| center_stream(&mut in_reader, writer, config))
}

/// Run `hanzi-center` with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    center_file(&config.input_path, &config.output_path, &config.center)
}
