/// Reads `data` as little endian `i16` values, a trailing odd byte is ignored.
///
/// The wide value range favors distinct elements, [`u8_as_i16_narrow`] gives duplicate heavy input.
pub fn u8_as_i16(data: &[u8]) -> Vec<i16> {
    data.chunks_exact(2)
        .map(|bytes| i16::from_le_bytes([bytes[0], bytes[1]]))
        .collect()
}

/// Reads every byte of `data` as one value in `0..16`, so most values repeat and hit the
/// equal-to-pivot path.
pub fn u8_as_i16_narrow(data: &[u8]) -> Vec<i16> {
    data.iter().map(|byte| i16::from(byte % 16)).collect()
}

/// Checks that `sorted` is the ascending permutation of `input`.
pub fn check_sorted(input: &[i16], sorted: &[i16]) {
    let mut expected = input.to_vec();
    expected.sort();

    assert_eq!(expected, sorted);
}
