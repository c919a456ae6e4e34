//! Const evaluation utilities

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Extract nibble N (0-15) from 64-bit FNV-1a hash
/// Used for `Atom` identities built from type paths
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}

/// Widest size a type-level `Num` can hold (24 bits).
pub const MAX_SIZE: usize = (1 << 24) - 1;

/// Extract nibble N (0-5, least significant first) of a byte size.
///
/// Sizes that do not fit in 24 bits fail const evaluation.
pub const fn size_nibble(size: usize, n: u32) -> u8 {
    assert!(size <= MAX_SIZE, "type is too large for a type-level size (max 16 MiB)");
    ((size >> (n * 4)) & 0xF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_known_vectors() {
        assert_eq!(fnv1a_64_str(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64_str("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_hash_nibbles_reassemble() {
        let s = "core::option::Option";
        let mut rebuilt = 0u64;
        let mut n = 0;
        while n < 16 {
            rebuilt |= (hash_nibble(s, n) as u64) << (n * 4);
            n += 1;
        }
        assert_eq!(rebuilt, fnv1a_64_str(s));
    }

    #[test]
    fn test_size_nibbles() {
        assert_eq!(size_nibble(0x12_3456, 0), 6);
        assert_eq!(size_nibble(0x12_3456, 2), 4);
        assert_eq!(size_nibble(0x12_3456, 5), 1);
        assert_eq!(size_nibble(8, 1), 0);
    }
}
