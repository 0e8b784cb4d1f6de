/// Hashes `data` to a 64-bit value over 8-byte little-endian words.
///
/// The result depends only on the content, so equal byte strings hash
/// equally across runs and platforms. It is not a cryptographic digest.
#[inline]
#[must_use]
pub fn hash_bytes(data: &[u8]) -> u64 {
    let (words, tail) = data.as_chunks::<8>();

    let mut h = 2_134_173u64.wrapping_add((data.len() as u64).wrapping_mul(31));
    for word in words {
        h = h.rotate_left(5).wrapping_add(h).wrapping_add(u64::from_le_bytes(*word));
    }
    for &b in tail {
        h = h.rotate_left(5).wrapping_add(h).wrapping_add(u64::from(b));
    }

    h
}
