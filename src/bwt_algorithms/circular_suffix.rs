use log::{debug, trace};

use crate::error::{Result, TransformError};

/// Ranges at or below this size (hi <= lo + CUTOFF) are finished with insertion sort.
const CUTOFF: usize = 5;

/// Sorted order of every circular rotation of a block of data.
///
/// `rank[i]` is the starting offset of the i-th smallest rotation. Rotations that are equal
/// over all n positions (only possible for periodic data) are ordered by descending offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRanker {
    rank: Vec<u32>,
}

impl SuffixRanker {
    /// Sort all rotations of `data`. Fails on empty data or data too long for a u32 offset.
    pub fn build(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(TransformError::InvalidInput(
                "cannot sort the rotations of an empty block".to_string(),
            ));
        }
        if data.len() > u32::MAX as usize {
            return Err(TransformError::InvalidInput(format!(
                "block of {} bytes exceeds the 32-bit offset range",
                data.len()
            )));
        }

        // Index is u32, which should be more than enough
        let mut rank = (0_u32..data.len() as u32).collect::<Vec<u32>>();
        q_sort3(&mut rank, data);
        debug!("Sorted {} rotations.", rank.len());
        Ok(Self { rank })
    }

    /// Number of rotations (the length of the original block).
    pub fn len(&self) -> usize {
        self.rank.len()
    }

    /// Always false: an empty block is rejected by `build`.
    pub fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }

    /// Starting offset of the i-th smallest rotation.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.rank.get(i).map(|&k| k as usize).ok_or_else(|| {
            TransformError::InvalidInput(format!(
                "rank {} is outside 0..{}",
                i,
                self.rank.len()
            ))
        })
    }

    /// The whole permutation, smallest rotation first.
    pub fn ranks(&self) -> &[u32] {
        &self.rank
    }
}

/// Byte at position `d` of the rotation starting at `offset`. Both are < n.
#[inline(always)]
fn circular_byte(data: &[u8], offset: u32, d: usize) -> u8 {
    let k = offset as usize + d;
    if k >= data.len() {
        data[k - data.len()]
    } else {
        data[k]
    }
}

/// Three-way radix quicksort of rotation offsets, one character position at a time.
///
/// Works from an explicit stack of (lo, hi, d) ranges rather than recursing, since highly
/// repetitive data only shrinks the middle partition by a little on every level.
fn q_sort3(rank: &mut [u32], data: &[u8]) {
    let n = data.len();
    // Half open ranges. Every offset in rank[lo..hi] agrees on its first d bytes.
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    stack.push((0, rank.len(), 0));

    while let Some((lo, hi, d)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }

        // Every byte matched, so these rotations are identical.
        if d == n {
            rank[lo..hi].sort_unstable_by(|a, b| b.cmp(a));
            continue;
        }

        if hi - lo <= CUTOFF + 1 {
            insertion_sort(&mut rank[lo..hi], data, d);
            continue;
        }

        let pivot = circular_byte(data, rank[lo], d);
        let mut lt = lo;
        let mut gt = hi - 1;
        let mut i = lo + 1;
        while i <= gt {
            let byte = circular_byte(data, rank[i], d);
            if byte < pivot {
                rank.swap(lt, i);
                lt += 1;
                i += 1;
            } else if byte > pivot {
                rank.swap(i, gt);
                gt -= 1;
            } else {
                i += 1;
            }
        }
        trace!(
            "Partitioned {}..{} at depth {} into {}..{}..{}",
            lo,
            hi,
            d,
            lt,
            gt + 1,
            hi
        );

        stack.push((lo, lt, d));
        stack.push((lt, gt + 1, d + 1));
        stack.push((gt + 1, hi, d));
    }
}

/// Simple insertion sort for small ranges that already agree on their first d bytes.
fn insertion_sort(slice: &mut [u32], data: &[u8], d: usize) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && rotation_less(slice[j], slice[j - 1], data, d) {
            slice.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Compare two rotations from byte d onward, wrapping around. Fully equal rotations fall
/// back to offset order, larger offset first.
fn rotation_less(a: u32, b: u32, data: &[u8], d: usize) -> bool {
    if a == b {
        return false;
    }
    for k in d..data.len() {
        let (x, y) = (circular_byte(data, a, k), circular_byte(data, b, k));
        if x != y {
            return x < y;
        }
    }
    a > b
}
