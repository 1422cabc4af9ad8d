//! Bit vectors with rank and select support.
//!
//! Two backends implement [`RankSelect`](crate::RankSelect):
//!
//! - [`DenseBitVec`]: one rank entry per bit and full select position lists.
//!   O(1) everything, but the tables are 32x larger than the bits themselves.
//!   This is the default backend and the oracle the compact one is tested
//!   against.
//! - [`CompactBitVec`]: two-level rank directory (~3.5% overhead) plus
//!   sampled select hints. Rank is O(1), select is a short binary search.
//!
//! Bits are stored LSB-first: bit `i` lives in word `i / 64` at bit `i % 64`.

mod compact;
mod compact_rank;
mod dense;

pub use compact::CompactBitVec;
pub use compact_rank::CompactRank;
pub use dense::DenseBitVec;

use crate::Config;

/// Construct a rank/select backend from raw words.
pub trait FromWords: Sized {
    /// Build from `len` bits packed LSB-first into `words`.
    ///
    /// # Panics
    ///
    /// Panics if `words` holds fewer than `len` bits.
    fn from_words(words: Vec<u64>, len: usize) -> Self;

    /// Build with explicit index configuration.
    ///
    /// Backends without tunables ignore `config`.
    fn from_words_with_config(words: Vec<u64>, len: usize, _config: &Config) -> Self {
        Self::from_words(words, len)
    }
}

/// Append-only bit accumulator used while encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitBuf {
    words: Vec<u64>,
    len: usize,
}

impl BitBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bits.div_ceil(64)),
            len: 0,
        }
    }

    /// Number of bits pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bits were pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let bit_idx = self.len % 64;
        if bit_idx == 0 {
            self.words.push(0);
        }
        if bit {
            if let Some(word) = self.words.last_mut() {
                *word |= 1u64 << bit_idx;
            }
        }
        self.len += 1;
    }

    /// Append `n` one-bits.
    pub fn push_ones(&mut self, n: usize) {
        for _ in 0..n {
            self.push(true);
        }
    }

    /// Bit at position `i`, `false` when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        i < self.len && (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Raw words and bit length.
    pub fn into_parts(self) -> (Vec<u64>, usize) {
        (self.words, self.len)
    }

    /// Freeze into a rank/select backend.
    pub fn freeze<B: FromWords>(self) -> B {
        B::from_words(self.words, self.len)
    }

    /// Freeze into a rank/select backend with explicit configuration.
    pub fn freeze_with_config<B: FromWords>(self, config: &Config) -> B {
        B::from_words_with_config(self.words, self.len, config)
    }
}

impl FromIterator<bool> for BitBuf {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buf = BitBuf::new();
        for bit in iter {
            buf.push(bit);
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankSelect;

    #[test]
    fn test_push_crosses_word_boundary() {
        let mut buf = BitBuf::new();
        buf.push_ones(63);
        buf.push(false);
        buf.push(true);
        assert_eq!(buf.len(), 65);
        assert!(buf.get(62));
        assert!(!buf.get(63));
        assert!(buf.get(64));
        assert!(!buf.get(65));

        let (words, len) = buf.into_parts();
        assert_eq!(len, 65);
        assert_eq!(words, vec![u64::MAX >> 1, 1]);
    }

    #[test]
    fn test_freeze_backends_agree() {
        let buf: BitBuf = "1011100110".chars().map(|c| c == '1').collect();
        let dense: DenseBitVec = buf.clone().freeze();
        let compact: CompactBitVec = buf.freeze();
        for i in 0..12 {
            assert_eq!(dense.rank1(i), compact.rank1(i), "rank1({})", i);
        }
        assert_eq!(dense.count_ones(), 6);
        assert_eq!(compact.count_ones(), 6);
    }

    #[test]
    fn test_dense_ignores_config() {
        let buf: BitBuf = "1011100110".chars().map(|c| c == '1').collect();
        let config = Config::default().with_select_sample_rate(2);
        let plain: DenseBitVec = buf.clone().freeze();
        let configured: DenseBitVec = buf.freeze_with_config(&config);
        assert_eq!(plain, configured);
    }
}
