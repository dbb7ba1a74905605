//! `svg2hanzi`: SVG glyph to stroke-order JSON.

use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use clap::Parser;
use log::{error, warn};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;

use super::{check_paths, open_input, write_output, FitArgs};
use crate::errors::{Error, Result};
use crate::{convert_stream, ConvertConfig};

/// Command line arguments
#[derive(Parser)]
#[command(
    name = "svg2hanzi",
    author,
    version,
    about = "svg2hanzi: convert an SVG glyph into stroke-order JSON",
    long_about = None
)]
struct Arguments {
    /// SVG file to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target JSON file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Don't read the medians layer
    #[arg(long)]
    no_medians: bool,

    /// Center (and optionally fit) the glyph on the canvas
    #[arg(long)]
    center: bool,

    /// Value for the `character` field
    #[arg(long = "char")]
    character: Option<String>,

    #[command(flatten)]
    fit: FitArgs,

    /// Report progress (viewBox, scale, stroke counts)
    #[arg(short, long)]
    verbose: bool,
}

/// Top-level configuration used by the `svg2hanzi` command-line process.
///
/// Front-end settings are stored directly in this struct; per-conversion
/// settings are in the embedded `ConvertConfig`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (requires input_path is not stdin)
    pub watch: bool,
    pub verbose: bool,
    pub convert: ConvertConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        check_paths(&args.file, &args.output)?;
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            verbose: args.verbose,
            convert: ConvertConfig {
                no_medians: args.no_medians,
                center: args.center,
                character: args.character,
                fit: args.fit.to_config()?,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
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

/// Read an SVG from `input` ('-' for stdin), convert it, and write the JSON
/// to `output` ('-' for stdout).
pub fn convert_file(input: &str, output: &str, config: &ConvertConfig) -> Result<()> {
    let mut in_reader = open_input(input)?;
    write_output(output, |writer| {
        convert_stream(&mut in_reader, writer, config)
    })
}

/// Whether `changed` names the watched file. A path that cannot be resolved,
/// such as during an editor's save-by-rename, is not a match.
fn is_watched(changed: &Path, watched: &Path) -> bool {
    match (changed.canonicalize(), watched.canonicalize()) {
        (Ok(changed), Ok(watched)) => changed == watched,
        (Err(e), _) | (_, Err(e)) => {
            warn!("cannot resolve watched path: {e}");
            false
        }
    }
}

/// Run `svg2hanzi` with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        convert_file(&config.input_path, &config.output_path, &config.convert)?;
    } else if config.input_path != "-" {
        let watch = config.input_path;
        let (tx, rx) = channel();
        let mut watcher = new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        convert_file(&watch, &config.output_path, &config.convert).unwrap_or_else(|e| {
            error!("conversion failed: {e}");
        });
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if is_watched(&event.path, watch_path) {
                            eprintln!("{} changed", event.path.to_string_lossy());
                            convert_file(&watch, &config.output_path, &config.convert)
                                .unwrap_or_else(|e| {
                                    error!("conversion failed: {e}");
                                });
                        }
                    }
                }
                Ok(Err(e)) => error!("Watch error {e:?}"),
                Err(e) => error!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
