//! In-word select through a per-byte lookup table.
//!
//! `SELECT_IN_BYTE[b][k]` is the position (0-7) of the k-th set bit of byte
//! `b`, or 8 when `b` has at most `k` set bits.

/// Per-byte select table, 256 × 8 entries (2 KiB).
static SELECT_IN_BYTE: [[u8; 8]; 256] = {
    let mut table = [[8u8; 8]; 256];
    let mut byte = 0usize;
    while byte < 256 {
        let mut seen = 0usize;
        let mut pos = 0u8;
        while pos < 8 {
            if (byte >> pos) & 1 == 1 {
                table[byte][seen] = pos;
                seen += 1;
            }
            pos += 1;
        }
        byte += 1;
    }
    table
};

/// Position of the k-th set bit (0-indexed) in `word`, LSB first.
///
/// Returns 64 if `word` has at most `k` set bits.
#[inline]
pub(crate) fn select_in_word(word: u64, k: u32) -> u32 {
    let mut remaining = k;
    for byte_idx in 0..8u32 {
        let byte = ((word >> (byte_idx * 8)) & 0xFF) as usize;
        let ones = (byte as u8).count_ones();
        if remaining < ones {
            return byte_idx * 8 + SELECT_IN_BYTE[byte][remaining as usize] as u32;
        }
        remaining -= ones;
    }
    64
}

/// Mask selecting bits `[0, bit]` of a word.
#[inline]
pub(crate) fn low_mask(bit: usize) -> u64 {
    debug_assert!(bit < 64);
    if bit == 63 {
        u64::MAX
    } else {
        (1u64 << (bit + 1)) - 1
    }
}
