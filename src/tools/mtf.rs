use log::{debug, error};

use crate::error::{Result, TransformError};

/// Size of the recency list: one entry per byte value.
pub const SYMBOLS: usize = 256;

/// The Move-To-Front recency list. Starts as the identity order and is rebuilt for every call.
///
/// Encoder and decoder each keep their own copy. Fed the same ranks, both copies go through
/// exactly the same states, which is what makes decoding the inverse of encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyList {
    index: [u8; SYMBOLS],
}

impl RecencyList {
    pub fn new() -> Self {
        let mut index = [0_u8; SYMBOLS];
        for (i, sym) in index.iter_mut().enumerate() {
            *sym = i as u8;
        }
        Self { index }
    }

    /// Current rank of `byte`.
    pub fn position(&self, byte: u8) -> usize {
        // Moves only rotate entries, so the list stays a permutation of all 256 byte values.
        self.index
            .iter()
            .position(|&c| c == byte)
            .expect("recency list holds every byte value")
    }

    /// Byte currently held at rank `idx`.
    pub fn symbol(&self, idx: usize) -> u8 {
        self.index[idx]
    }

    /// Move the byte at rank `idx` to the front, shifting everything ahead of it back one slot.
    pub fn move_to_front(&mut self, idx: usize) {
        self.index[..=idx].rotate_right(1);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.index
    }
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using Move To Front transform. Each byte becomes its current rank.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut index = RecencyList::new();
    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        let idx = index.position(byte);
        out.push(idx as u8);
        index.move_to_front(idx);
    }
    debug!("MTF encoded {} bytes.", out.len());
    out
}

/// Decode Move To Front ranks back into bytes.
pub fn mtf_decode(ranks: &[u8]) -> Vec<u8> {
    let mut index = RecencyList::new();
    let mut out = Vec::with_capacity(ranks.len());
    for &idx in ranks {
        let idx = idx as usize;
        out.push(index.symbol(idx));
        index.move_to_front(idx);
    }
    debug!("MTF decoded {} bytes.", out.len());
    out
}

/// Decode ranks held in wider symbols. Every rank is checked before any decoding happens.
pub fn mtf_decode_symbols(ranks: &[u16]) -> Result<Vec<u8>> {
    if let Some((pos, &bad)) = ranks
        .iter()
        .enumerate()
        .find(|&(_, &r)| r as usize >= SYMBOLS)
    {
        error!("MTF rank {} at position {} is out of range.", bad, pos);
        return Err(TransformError::CorruptEncoding(format!(
            "MTF rank {} at position {} is not below {}",
            bad, pos, SYMBOLS
        )));
    }
    let narrow = ranks.iter().map(|&r| r as u8).collect::<Vec<u8>>();
    Ok(mtf_decode(&narrow))
}
