use super::circular_suffix::SuffixRanker;
use crate::error::{Result, TransformError};
use crate::tools::freq_count::freqs;
use log::{debug, info};

/// Burrows-Wheeler-Transform. Sorts every rotation of the block, then takes the byte that
/// precedes each rotation in sorted order.
/// This returns a u32 Key (the sorted position of the unrotated block) and a u8 vec of the BWT data.
pub fn bwt_encode(data: &[u8]) -> Result<(u32, Vec<u8>)> {
    if data.is_empty() {
        return Err(TransformError::InvalidInput(
            "the BWT needs at least one byte".to_string(),
        ));
    }
    let csa = SuffixRanker::build(data)?;

    let end = data.len();
    let mut key = 0_u32;
    let mut bwt = vec![0; end];
    for (i, &k) in csa.ranks().iter().enumerate() {
        let k = k as usize;
        if k == 0 {
            key = i as u32;
            bwt[i] = data[end - 1];
        } else {
            bwt[i] = data[k - 1];
        }
    }
    info!("BWT encoded {} bytes, key is {}.", end, key);
    Ok((key, bwt))
}

/// Decode a Burrows-Wheeler-Transform using key-indexed counting, no sorting needed.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> Result<Vec<u8>> {
    // Calculate end once.
    let end = bwt_in.len();
    if end == 0 {
        return Err(TransformError::CorruptEncoding(
            "BWT data is empty".to_string(),
        ));
    }
    if end > u32::MAX as usize {
        return Err(TransformError::CorruptEncoding(format!(
            "block of {} bytes exceeds the 32-bit key range",
            end
        )));
    }
    if key as usize >= end {
        return Err(TransformError::CorruptEncoding(format!(
            "key {} is outside a block of {} bytes",
            key, end
        )));
    }

    // Convert frequency count to a cumulative sum, so freq[s] is one past the last row starting with s
    let mut freq = freqs(bwt_in);
    for i in 1..256 {
        freq[i] += freq[i - 1];
    }

    // Build the transformation vec to find the next row, along with the sorted first column.
    // Scanning backwards while decrementing keeps equal bytes in their original order.
    let mut next = vec![0_u32; end];
    let mut first = vec![0_u8; end];
    for (i, &s) in bwt_in.iter().enumerate().rev() {
        freq[s as usize] -= 1;
        let row = freq[s as usize] as usize;
        next[row] = i as u32;
        first[row] = s;
    }
    debug!("Built the next vector for {} rows.", end);

    // Walk the rows starting at the key
    let mut row = key as usize;
    let mut data = Vec::with_capacity(end);
    for _ in 0..end {
        data.push(first[row]);
        row = next[row] as usize;
    }
    info!("BWT decoded {} bytes.", end);
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_abracadabra_test() {
        let (key, bwt) = bwt_encode("ABRACADABRA!".as_bytes()).unwrap();
        assert_eq!(key, 3);
        assert_eq!(bwt, "ARD!RCAAAABB".as_bytes());
    }

    #[test]
    fn decode_abracadabra_test() {
        let data = bwt_decode(3, "ARD!RCAAAABB".as_bytes()).unwrap();
        assert_eq!(data, "ABRACADABRA!".as_bytes());
    }

    #[test]
    fn key_matches_unrotated_block_test() {
        let data = "she sells sea shells by the sea shore".as_bytes();
        let (key, _) = bwt_encode(data).unwrap();
        let csa = SuffixRanker::build(data).unwrap();
        assert_eq!(csa.index(key as usize).unwrap(), 0);
    }

    #[test]
    fn single_byte_test() {
        let (key, bwt) = bwt_encode(&[7]).unwrap();
        assert_eq!(key, 0);
        assert_eq!(bwt, vec![7]);
        assert_eq!(bwt_decode(key, &bwt).unwrap(), vec![7]);
    }

    #[test]
    fn repetitive_test() {
        let (key, bwt) = bwt_encode("AAAA".as_bytes()).unwrap();
        assert_eq!(key, 3);
        assert_eq!(bwt, "AAAA".as_bytes());
        assert_eq!(bwt_decode(key, &bwt).unwrap(), "AAAA".as_bytes());

        let data = "xyxyxyxyxyxyxyxyxyxyxyxyxyxyxy".as_bytes();
        let (key, bwt) = bwt_encode(data).unwrap();
        assert_eq!(bwt_decode(key, &bwt).unwrap(), data);

        let data = vec![0_u8; 1000];
        let (key, bwt) = bwt_encode(&data).unwrap();
        assert_eq!(key, 999);
        assert_eq!(bwt_decode(key, &bwt).unwrap(), data);
    }

    #[test]
    fn all_byte_values_test() {
        let data = (0..=255_u8).rev().chain(0..=255_u8).collect::<Vec<u8>>();
        let (key, bwt) = bwt_encode(&data).unwrap();
        assert_eq!(bwt_decode(key, &bwt).unwrap(), data);
    }

    #[test]
    fn empty_encode_test() {
        assert!(matches!(bwt_encode(&[]), Err(TransformError::InvalidInput(_))));
    }

    #[test]
    fn bad_decode_test() {
        assert!(matches!(
            bwt_decode(0, &[]),
            Err(TransformError::CorruptEncoding(_))
        ));
        assert!(matches!(
            bwt_decode(12, "ARD!RCAAAABB".as_bytes()),
            Err(TransformError::CorruptEncoding(_))
        ));
    }
}
