use log::{error, info};

use super::{read_input, write_output, KEY_BYTES};
use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::error::{Result, TransformError};
use crate::tools::cli::{Stage, TransformOpts};
use crate::tools::mtf::mtf_decode;

/// Split a frame into its key and payload. The payload must hold at least one byte.
pub fn read_frame(frame: &[u8]) -> Result<(u32, &[u8])> {
    if frame.len() <= KEY_BYTES {
        error!("Frame of {} bytes has no payload.", frame.len());
        return Err(TransformError::CorruptEncoding(format!(
            "frame of {} bytes is too short for a {} byte key and a payload",
            frame.len(),
            KEY_BYTES
        )));
    }
    let (head, payload) = frame.split_at(KEY_BYTES);
    let key = u32::from_be_bytes([head[0], head[1], head[2], head[3]]);
    info!("Key is {}.", key);
    Ok((key, payload))
}

/// Undo `bwt_frame`.
pub fn bwt_unframe(frame: &[u8]) -> Result<Vec<u8>> {
    let (key, bwt) = read_frame(frame)?;
    bwt_decode(key, bwt)
}

/// Undo `compress_block`: MTF decode the payload, then reverse the BWT.
pub fn decompress_block(frame: &[u8]) -> Result<Vec<u8>> {
    let (key, ranks) = read_frame(frame)?;
    // Check the key before spending time on the MTF
    if key as usize >= ranks.len() {
        return Err(TransformError::CorruptEncoding(format!(
            "key {} is outside a block of {} bytes",
            key,
            ranks.len()
        )));
    }
    let bwt = mtf_decode(ranks);
    bwt_decode(key, &bwt)
}

/// Apply the decode side of a stage to a whole buffer.
pub fn decode_stage(stage: Stage, data: &[u8]) -> Result<Vec<u8>> {
    match stage {
        Stage::Bwt => bwt_unframe(data),
        Stage::Mtf => Ok(mtf_decode(data)),
        Stage::Pipeline => decompress_block(data),
    }
}

/// Decode the input defined in opts <TransformOpts> and write it to the chosen output.
pub fn decompress(opts: &TransformOpts) -> Result<()> {
    let data = read_input(opts)?;
    let out = decode_stage(opts.stage, &data)?;
    info!(
        "{} decoded {} bytes into {} bytes.",
        opts.stage,
        data.len(),
        out.len()
    );
    write_output(opts, &out)
}
