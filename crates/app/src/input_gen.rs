//! Sample input generation.
//!
//! When no input file is given, henc encodes generated data whose statistics
//! drift from section to section, so the adaptive model has something to
//! adapt to:
//! - Runs of a single byte (near one bit per symbol once the model warms up)
//! - Word-like text over a small alphabet
//! - Short repeating patterns
//! - Uniform random bytes (incompressible)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest section of uniform character.
const SECTION_BYTES: usize = 16 * 1024;

/// Generate `size_bytes` of sample data from `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(rng.gen_range(1..=SECTION_BYTES));

        match rng.gen_range(0..10u8) {
            0..=1 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(section));
            }
            2..=5 => push_text(&mut rng, &mut data, section),
            6..=7 => {
                let pattern: Vec<u8> = (0..rng.gen_range(2..=24)).map(|_| rng.gen()).collect();
                data.extend(pattern.iter().copied().cycle().take(section));
            }
            _ => data.extend((0..section).map(|_| rng.gen::<u8>())),
        }
    }

    data
}

/// Append `len` bytes of word-like text with English-ish letter skew.
fn push_text(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    const COMMON: &[u8] = b"etaoinshr";
    const RARE: &[u8] = b"dlcumwfgypbvkjxqz";

    let end = data.len() + len;
    while data.len() < end {
        let byte = match rng.gen_range(0..100u8) {
            0..=17 => b' ',
            18..=79 => COMMON[rng.gen_range(0..COMMON.len())],
            80..=97 => RARE[rng.gen_range(0..RARE.len())],
            _ => b'\n',
        };
        data.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_data() {
        let data = generate_sample_data(42, 1000);
        assert_eq!(data.len(), 1000);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_sample_data(12345, 50_000), generate_sample_data(12345, 50_000));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_data(1, 50_000), generate_sample_data(2, 50_000));
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 100, 10_000, 100_000] {
            assert_eq!(generate_sample_data(999, size).len(), size);
        }
    }

    #[test]
    fn test_text_compresses() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut data = Vec::new();
        push_text(&mut rng, &mut data, 100_000);

        let encoded = henc_core::encode_to_vec(&data).unwrap();
        assert!(encoded.len() < data.len() * 6 / 10);
    }
}
