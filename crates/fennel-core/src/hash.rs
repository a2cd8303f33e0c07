//! FNV-1a hashing, 64-bit variant.
//!
//! The fixed, unseeded hash behind content addressing: identical input
//! bytes produce identical identifiers across processes and restarts.
//! Chosen for speed and determinism, not collision resistance.

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Hashes a byte sequence with FNV-1a (64-bit).
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
