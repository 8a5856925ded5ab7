//! The compression module frames the transforms for storage and drives them from the command line.
//!
//! Compression happens in the following steps:
//! - Burrows Wheeler Transform: Sort the rotations of the data to increase the probability of runs of identical bytes.
//! - Move To Front transform: Turn those runs into runs of small ranks, mostly zeros.
//!
//! The framed artifact is a 4 byte big-endian key (the BWT origin pointer) followed by exactly
//! one byte per input byte. Only the payload goes through MTF, never the key.
//!
//! Decompression follows the inverse of the compression process.
//! - MTF transform: Convert from the Move-To-Front ranks to the symbols represented by the ranks.
//! - BWT reversal: Restore the original data from the BWT transform.
//!

pub mod compress;
pub mod decompress;

use std::fs::File;
use std::io::{self, Read, Write};

use log::info;

use crate::error::Result;
use crate::tools::cli::{Mode, Output, TransformOpts};

/// Width of the big-endian key that leads every BWT frame.
pub const KEY_BYTES: usize = 4;

/// Run the direction chosen in opts: encode or decode, input to output.
pub fn run(opts: &TransformOpts) -> Result<()> {
    match opts.op_mode {
        Mode::Encode => compress::compress(opts),
        Mode::Decode => decompress::decompress(opts),
    }
}

/// Read the whole input named in opts, or stdin.
pub(crate) fn read_input(opts: &TransformOpts) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match &opts.file {
        Some(name) => {
            File::open(name)?.read_to_end(&mut buf)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut buf)?;
        }
    }
    info!("Read {} bytes of input.", buf.len());
    Ok(buf)
}

/// Write everything to the output named in opts, or stdout.
pub(crate) fn write_output(opts: &TransformOpts, data: &[u8]) -> Result<()> {
    match &opts.output {
        Output::File(name) => {
            let mut f_out = File::create(name)?;
            f_out.write_all(data)?;
            f_out.flush()?;
        }
        Output::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()?;
        }
    }
    info!("Wrote {} bytes of output to {}.", data.len(), opts.output);
    Ok(())
}
