/// Returns a frequency count of the input data, one bucket per byte value.
pub fn freqs(data: &[u8]) -> [u32; 256] {
    let mut freqs = [0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}
