//! torrentjson CLI.
//!
//! Converts `.torrent` (bencode) files to JSON and back.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use torrentjson::constants::DEFAULT_MAX_DEPTH;
use torrentjson::{convert, ConvertError, ConvertOptions, Mode};

#[derive(Parser, Debug)]
#[command(name = "torrentjson")]
#[command(about = "Convert between .torrent (bencode) and .json", long_about = None)]
#[command(override_usage = "torrentjson -j | -b [input_file] [output_file]")]
#[command(after_help = "If no input_file, read from stdin; if no output_file, write to stdout")]
#[command(group(ArgGroup::new("mode").required(true).args(["to_json", "to_bencode"])))]
struct Cli {
    /// Convert from .torrent to .json
    #[arg(short = 'j')]
    to_json: bool,

    /// Convert from .json to .torrent
    #[arg(short = 'b')]
    to_bencode: bool,

    /// Maximum nesting of lists and dictionaries accepted when decoding
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Input file (default: stdin)
    #[arg(value_name = "input_file")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(value_name = "output_file")]
    output: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        let mode = if self.to_json {
            Mode::ToJson
        } else {
            Mode::ToBencode
        };
        ConvertOptions::new(mode)
            .max_depth(self.max_depth)
            .compact(self.compact)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage and help go to stderr with status 1, like any other failure.
            eprint!("{}", e.render());
            return ExitCode::from(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.input.as_deref())?;
    let output = convert(&input, &cli.options())?;
    write_output(cli.output.as_deref(), &output)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => fs::read(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, data).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Io {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}
