//! Base62 codec for 64-bit integers.
//!
//! Digits are emitted least-significant first, so `62` encodes to `"ab"`.

/// Digit alphabet; digit value `0` maps to `'a'`.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `n` by repeated division, least-significant digit first.
///
/// Zero encodes to `"a"` rather than an empty string.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut out = String::with_capacity(11);
    while n > 0 {
        out.push(ALPHABET[(n % BASE) as usize] as char);
        n /= BASE;
    }
    out
}

/// Inverse of [`encode`].
///
/// Returns `None` for an empty input, a character outside the alphabet, or a
/// value that does not fit in a `u64`.
pub fn decode(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }

    s.bytes().rev().try_fold(0u64, |acc, byte| {
        let digit = digit_value(byte)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

fn digit_value(byte: u8) -> Option<u64> {
    match byte {
        b'a'..=b'z' => Some((byte - b'a') as u64),
        b'A'..=b'Z' => Some((byte - b'A') as u64 + 26),
        b'0'..=b'9' => Some((byte - b'0') as u64 + 52),
        _ => None,
    }
}
