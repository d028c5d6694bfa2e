//! Deterministic structural hashing (FNV-1a, 64-bit).
//!
//! Used for reuse-cache keys. The result depends only on the bytes mixed in,
//! never on addresses or the process-random state of `std` hashers.

const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME: u64 = 0x0000_0001_0000_01b3;

/// Incremental FNV-1a accumulator.
#[derive(Debug, Clone, Copy)]
pub struct StructuralHasher {
    hash: u64,
}

impl Default for StructuralHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralHasher {
    pub const fn new() -> Self {
        Self { hash: OFFSET_BASIS }
    }

    #[inline]
    pub fn mix(&mut self, byte: u8) {
        self.hash ^= u64::from(byte);
        self.hash = self.hash.wrapping_mul(PRIME);
    }

    pub fn mix_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.mix(*byte);
        }
    }

    pub fn mix_u32(&mut self, value: u32) {
        self.mix_bytes(&value.to_le_bytes());
    }

    pub fn mix_u64(&mut self, value: u64) {
        self.mix_bytes(&value.to_le_bytes());
    }

    /// Mix a float by bit pattern, with `-0.0` folded into `0.0` so values
    /// that compare equal hash equal.
    pub fn mix_f64(&mut self, value: f64) {
        let value = if value == 0.0 { 0.0 } else { value };
        self.mix_u64(value.to_bits());
    }

    pub fn mix_str(&mut self, value: &str) {
        self.mix_u64(value.len() as u64);
        self.mix_bytes(value.as_bytes());
    }

    #[must_use]
    pub const fn finish(&self) -> u64 {
        self.hash
    }
}
