//! Compact rank/select: two-level rank directory plus sampled select hints.

use super::{CompactRank, FromWords};
use crate::util::{low_mask, select_in_word};
use crate::{Config, RankSelect};

/// Bit vector with a ~3.5% rank directory and sampled select.
///
/// Select first narrows the search to the words between two samples (one
/// sample every `select_sample_rate` ones or zeros), binary searches the rank
/// directory inside that range, then finishes with an in-word select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactBitVec {
    words: Vec<u64>,
    len: usize,
    rank: CompactRank,
    sample_rate: usize,
    /// Entry j = word holding the (j * rate + 1)-th 1-bit.
    one_samples: Vec<u32>,
    /// Entry j = word holding the (j * rate + 1)-th 0-bit.
    zero_samples: Vec<u32>,
}

impl CompactBitVec {
    /// Build with the default [`Config`].
    pub fn new(words: Vec<u64>, len: usize) -> Self {
        Self::with_config(words, len, &Config::default())
    }

    /// Build with an explicit select sample rate.
    ///
    /// # Panics
    ///
    /// Panics if `words` holds fewer than `len` bits or `len` exceeds
    /// `u32::MAX`.
    pub fn with_config(mut words: Vec<u64>, len: usize, config: &Config) -> Self {
        assert!(len <= u32::MAX as usize, "bit length {} exceeds u32", len);
        assert!(
            words.len() * 64 >= len,
            "{} words cannot hold {} bits",
            words.len(),
            len
        );
        words.truncate(len.div_ceil(64));
        if len % 64 != 0 {
            if let Some(last) = words.last_mut() {
                *last &= low_mask(len % 64 - 1);
            }
        }

        let sample_rate = config.select_sample_rate.max(1) as usize;
        let rank = CompactRank::build(&words);

        let mut one_samples = Vec::new();
        let mut zero_samples = Vec::new();
        let (mut ones, mut zeros) = (0usize, 0usize);
        let (mut next_one, mut next_zero) = (1usize, 1usize);
        for (w, &word) in words.iter().enumerate() {
            let valid = (len - w * 64).min(64);
            ones += word.count_ones() as usize;
            zeros += valid - word.count_ones() as usize;
            while next_one <= ones {
                one_samples.push(w as u32);
                next_one += sample_rate;
            }
            while next_zero <= zeros {
                zero_samples.push(w as u32);
                next_zero += sample_rate;
            }
        }

        Self {
            words,
            len,
            rank,
            sample_rate,
            one_samples,
            zero_samples,
        }
    }

    /// Word range `[lo, hi)` bracketing the k-th bit according to `samples`.
    #[inline]
    fn sample_range(&self, samples: &[u32], k: usize) -> (usize, usize) {
        let idx = (k - 1) / self.sample_rate;
        let lo = samples[idx] as usize;
        let hi = samples
            .get(idx + 1)
            .map(|&w| w as usize + 1)
            .unwrap_or(self.words.len());
        (lo, hi)
    }
}

impl FromWords for CompactBitVec {
    fn from_words(words: Vec<u64>, len: usize) -> Self {
        Self::new(words, len)
    }

    fn from_words_with_config(words: Vec<u64>, len: usize, config: &Config) -> Self {
        Self::with_config(words, len, config)
    }
}

impl RankSelect for CompactBitVec {
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
        self.rank.ones()
    }

    #[inline]
    fn rank1(&self, i: usize) -> usize {
        if i >= self.len {
            return self.count_ones();
        }
        let word_idx = i / 64;
        let partial = (self.words[word_idx] & low_mask(i % 64)).count_ones() as usize;
        self.rank.rank_before_word(&self.words, word_idx) + partial
    }

    fn select1(&self, k: usize) -> Option<usize> {
        if k == 0 || k > self.count_ones() {
            return None;
        }
        let (lo, hi) = self.sample_range(&self.one_samples, k);
        let (w, before) = self.rank.locate_one(&self.words, k, lo, hi);
        let bit = select_in_word(self.words[w], (k - before - 1) as u32);
        Some(w * 64 + bit as usize)
    }

    fn select0(&self, k: usize) -> Option<usize> {
        if k == 0 || k > self.count_zeros() {
            return None;
        }
        let (lo, hi) = self.sample_range(&self.zero_samples, k);
        let (w, before) = self.rank.locate_zero(&self.words, k, lo, hi);
        let bit = select_in_word(!self.words[w], (k - before - 1) as u32);
        Some(w * 64 + bit as usize)
    }

    fn heap_size(&self) -> usize {
        self.words.len() * 8
            + self.rank.heap_size()
            + (self.one_samples.len() + self.zero_samples.len()) * 4
    }
}
