use clap::{ArgAction, Parser, ValueEnum};
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter, str::FromStr};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Encode (`-`) or Decode (`+`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "encode" => Ok(Mode::Encode),
            "+" | "decode" => Ok(Mode::Decode),
            other => Err(format!(
                "'{}' is not a direction, use '-' to encode or '+' to decode",
                other
            )),
        }
    }
}

/// Which transform(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    /// Burrows-Wheeler Transform only: 4 byte key followed by the permuted block
    Bwt,
    /// Move-To-Front only: one rank per input byte
    Mtf,
    /// BWT followed by MTF of the permuted block
    Pipeline,
}
impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(name) => write!(f, "File {}", name),
            Output::Stdout => write!(f, "Stdout"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformOpts {
    /// Transform(s) to apply
    pub stage: Stage,
    /// Encode/Decode
    pub op_mode: Mode,
    /// Name of file to read for input, stdin if None
    pub file: Option<String>,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl TransformOpts {
    pub fn new() -> Self {
        Self {
            stage: Stage::Pipeline,
            op_mode: Mode::Encode,
            file: None,
            output: Output::Stdout,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for TransformOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Burrows-Wheeler and Move-To-Front transforms",
    long_about = "
    Applies the Burrows-Wheeler Transform, the Move-To-Front transform, or both in sequence,
    reading a file (or standard input) and writing to a file (or standard output).

    A '-' direction encodes, a '+' direction decodes."
)]
pub struct Args {
    /// Transform to apply
    #[clap(value_enum)]
    stage: Stage,

    /// '-' to encode, '+' to decode
    #[clap(value_parser, allow_hyphen_values = true)]
    direction: Mode,

    /// Filename of file to process, standard input if omitted
    #[clap()]
    filename: Option<String>,

    /// Write output here instead of standard output
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Sets verbosity. -v shows errors, -vvvvv is chatty
    #[clap(short = 'v', action = ArgAction::Count)]
    v: u8,

    /// Suppress all log messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_init() -> TransformOpts {
    opts_from_args(Args::parse())
}

pub(crate) fn opts_from_args(args: Args) -> TransformOpts {
    let mut opts = TransformOpts::new();
    opts.stage = args.stage;
    opts.op_mode = args.direction;
    opts.file = args.filename;
    if let Some(name) = args.output {
        opts.output = Output::File(name)
    };

    opts.verbose = match (args.quiet, args.v) {
        (true, _) => Verbosity::Quiet,
        (false, 0 | 1) => Verbosity::Errors,
        (false, 2) => Verbosity::Warnings,
        (false, 3) => Verbosity::Info,
        (false, 4) => Verbosity::Debug,
        _ => Verbosity::Trace,
    };

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    // Below we report initialization status to the user
    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Stage set to {}, direction {}", opts.stage, opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("Getting input from stdin"),
    }
    info!("Sending output to {}", opts.output);
    info!("---- Initialization End ----\n");
    opts
}
