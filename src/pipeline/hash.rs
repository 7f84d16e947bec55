/// Hash a word into a non-negative 32-bit seed.
///
/// The accumulator follows the classic `h*31 + c` rolling hash, expressed
/// as `(h << 5) - h + c` in wrapping 32-bit signed arithmetic, with two
/// extra mixing steps: each character XORs in `code * (position + 1)`, and
/// the final value XORs in `len * 719`. Positions and lengths count UTF-16
/// code units so the result is stable across platform string encodings.
///
/// Deterministic and case-sensitive; the empty string hashes to 0.
pub fn hash_word(text: &str) -> u32 {
    let mut acc: i32 = 0;
    let mut len: i32 = 0;
    for (i, unit) in text.encode_utf16().enumerate() {
        let code = i32::from(unit);
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(code);
        acc ^= code.wrapping_mul(i as i32 + 1);
        len += 1;
    }
    acc ^= len.wrapping_mul(719);
    acc.unsigned_abs()
}
