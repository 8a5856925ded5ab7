use log::info;

use super::{read_input, write_output, KEY_BYTES};
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::Result;
use crate::tools::cli::{Stage, TransformOpts};
use crate::tools::mtf::mtf_encode;

/// Key first, then the payload.
fn frame(key: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(KEY_BYTES + payload.len());
    out.extend_from_slice(&key.to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// BWT the data and frame the result: 4 byte key, then the permuted block.
pub fn bwt_frame(data: &[u8]) -> Result<Vec<u8>> {
    let (key, bwt) = bwt_encode(data)?;
    Ok(frame(key, &bwt))
}

/// BWT the data, MTF the permuted block, and frame the result.
pub fn compress_block(data: &[u8]) -> Result<Vec<u8>> {
    let (key, bwt) = bwt_encode(data)?;
    let ranks = mtf_encode(&bwt);
    Ok(frame(key, &ranks))
}

/// Apply the encode side of a stage to a whole buffer.
pub fn encode_stage(stage: Stage, data: &[u8]) -> Result<Vec<u8>> {
    match stage {
        Stage::Bwt => bwt_frame(data),
        Stage::Mtf => Ok(mtf_encode(data)),
        Stage::Pipeline => compress_block(data),
    }
}

/// Encode the input defined in opts <TransformOpts> and write it to the chosen output.
pub fn compress(opts: &TransformOpts) -> Result<()> {
    let data = read_input(opts)?;
    let out = encode_stage(opts.stage, &data)?;
    info!(
        "{} encoded {} bytes into {} bytes.",
        opts.stage,
        data.len(),
        out.len()
    );
    write_output(opts, &out)
}
