//! Seed expansion into generator state.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 1729727730264126872;

/// Spread a 64-bit seed over a ChaCha key.
///
/// Byte `i` of the key is byte `i` of the seed in little-endian order; the
/// remaining 24 bytes are zero.
pub fn expand_seed(seed: u64) -> <ChaCha8Rng as SeedableRng>::Seed {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key
}

/// Pseudo-random state shared by every draw of a run.
///
/// Draws are fully determined by the seed and the order in which they are
/// made, on every platform. The state is owned by the caller and passed by
/// `&mut` to whatever consumes it.
#[derive(Debug, Clone)]
pub struct GeneratorState {
    seed: u64,
    rng: ChaCha8Rng,
}

impl GeneratorState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::from_seed(expand_seed(seed)),
        }
    }

    /// The seed this state was expanded from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl RngCore for GeneratorState {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_seed_layout() {
        let key = expand_seed(0x0807_0605_0403_0201);
        assert_eq!(&key[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(key[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_expand_default_seed() {
        let key = expand_seed(DEFAULT_SEED);
        assert_eq!(&key[..8], &DEFAULT_SEED.to_le_bytes());
        assert_eq!(u64::from_le_bytes(key[..8].try_into().unwrap()), DEFAULT_SEED);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = GeneratorState::from_seed(7);
        let mut b = GeneratorState::from_seed(7);

        let xs: Vec<u64> = (0..64).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..64).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut a = GeneratorState::from_seed(7);
        let mut b = GeneratorState::from_seed(8);

        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_default_uses_default_seed() {
        assert_eq!(GeneratorState::default().seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_zero_seed_matches_chacha8_keystream() {
        // All-zero key and nonce
        let mut state = GeneratorState::from_seed(0);
        let words: Vec<u32> = (0..4).map(|_| state.next_u32()).collect();
        assert_eq!(words, vec![0x2fef003e, 0xd6405f89, 0xe8b85b7f, 0xa1a5091f]);
    }

    #[test]
    fn test_default_seed_stream() {
        let mut state = GeneratorState::default();
        assert_eq!(state.next_u64(), 0xc39476ef0c3c8c95);
        assert_eq!(state.next_u64(), 0xa0b616e90a3e0dab);
    }
}
