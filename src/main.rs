//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use bwtmtf::compression::run;
use bwtmtf::tools::cli::opts_init;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Logging goes to stderr, stdout carries the transformed data.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not start the terminal logger.");
    }

    let options = opts_init();

    //----- Figure how what we need to do and go do it
    if let Err(e) = run(&options) {
        error!("{}", e);
        exit(1);
    }
    info!("Done.\n");
}
