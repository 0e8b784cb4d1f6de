use rand_xoshiro::rand_core::RngCore;

/// Overwrites `dest` with bytes sampled uniformly from `alpha` using `rng`.
///
/// ## Panics
///
/// Panics if `alpha` is empty.
pub fn fill_random(dest: &mut [u8], alpha: &[u8], rng: &mut impl RngCore) {
    assert!(!alpha.is_empty(), "cannot sample from an empty alphabet");

    for b in dest {
        *b = alpha[rng.next_u32() as usize % alpha.len()];
    }
}
