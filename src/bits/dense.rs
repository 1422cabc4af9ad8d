//! Dense rank/select tables: one rank entry per bit, full select lists.

use super::FromWords;
use crate::RankSelect;

/// Bit vector with per-position rank and full select position lists.
///
/// Built in a single left-to-right scan. Every query is a bounds check plus
/// one array lookup, at the cost of `32 * len` bits of tables. Use
/// [`CompactBitVec`](super::CompactBitVec) when memory matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseBitVec {
    words: Vec<u64>,
    len: usize,
    /// Entry i = number of 1-bits in positions [0, i].
    rank1: Vec<u32>,
    /// Entry k-1 = position of the k-th 1-bit.
    select1: Vec<u32>,
    /// Entry k-1 = position of the k-th 0-bit.
    select0: Vec<u32>,
}

impl DenseBitVec {
    /// Build the tables for `len` bits of `words`.
    ///
    /// # Panics
    ///
    /// Panics if `words` holds fewer than `len` bits or `len` exceeds
    /// `u32::MAX`.
    pub fn new(words: Vec<u64>, len: usize) -> Self {
        assert!(len <= u32::MAX as usize, "bit length {} exceeds u32", len);
        assert!(
            words.len() * 64 >= len,
            "{} words cannot hold {} bits",
            words.len(),
            len
        );

        let mut rank1 = Vec::with_capacity(len);
        let mut select1 = Vec::new();
        let mut select0 = Vec::new();

        let mut ones: u32 = 0;
        for i in 0..len {
            if (words[i / 64] >> (i % 64)) & 1 == 1 {
                select1.push(i as u32);
                ones += 1;
            } else {
                select0.push(i as u32);
            }
            rank1.push(ones);
        }

        Self {
            words,
            len,
            rank1,
            select1,
            select0,
        }
    }

    /// Underlying words, LSB-first.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}

impl FromWords for DenseBitVec {
    fn from_words(words: Vec<u64>, len: usize) -> Self {
        Self::new(words, len)
    }
}

impl RankSelect for DenseBitVec {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, i: usize) -> bool {
        i < self.len && (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    #[inline]
    fn count_ones(&self) -> usize {
        self.select1.len()
    }

    #[inline]
    fn count_zeros(&self) -> usize {
        self.select0.len()
    }

    #[inline]
    fn rank1(&self, i: usize) -> usize {
        match self.rank1.get(i) {
            Some(&r) => r as usize,
            None => self.count_ones(),
        }
    }

    #[inline]
    fn select1(&self, k: usize) -> Option<usize> {
        let idx = k.checked_sub(1)?;
        self.select1.get(idx).map(|&p| p as usize)
    }

    #[inline]
    fn select0(&self, k: usize) -> Option<usize> {
        let idx = k.checked_sub(1)?;
        self.select0.get(idx).map(|&p| p as usize)
    }

    fn heap_size(&self) -> usize {
        self.words.len() * 8 + (self.rank1.len() + self.select1.len() + self.select0.len()) * 4
    }
}
