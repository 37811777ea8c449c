//! Compact base62 rendering of 64-bit identifiers.

/// Encoding alphabet, in fixed order: digits, then lowercase, then uppercase.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maximum encoded length for any 64-bit input (62^11 > 2^64).
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes a non-negative 64-bit value as a base62 string.
///
/// Pure and deterministic; `0` encodes to `"0"`, and there are no error
/// cases for the `u64` input domain.
///
/// Lexicographic order of encoded strings does NOT match numeric order of
/// their inputs: the alphabet runs digits, then lowercase, then uppercase,
/// while ASCII sorts uppercase before lowercase, so e.g. `encode(61)` =
/// `"Z"` sorts before `encode(10)` = `"a"`. Consumers must not rely on
/// sortable codes.
pub fn encode(value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut i = buf.len();
    let mut n = value;
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % 62) as usize];
        n /= 62;
    }

    // The buffer was filled most-significant-first from the end; every byte
    // comes from the ASCII alphabet.
    std::str::from_utf8(&buf[i..])
        .expect("base62 alphabet is ascii")
        .to_owned()
}
