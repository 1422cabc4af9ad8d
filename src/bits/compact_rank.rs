//! Two-level rank directory over `u64` words.
//!
//! # Structure
//!
//! - **L1**: Absolute cumulative rank every 128 words (8192 bits), `u32`.
//! - **L2**: Rank relative to the enclosing L1 block every 8 words, `u16`.
//!
//! Total: ~3.5% overhead relative to the bitmap.
//!
//! # Query
//!
//! `rank_before_word(w)` = `l1[w / 128] + l2[w / 8] + popcount(words[block..w])`,
//! at most seven popcounts after two lookups.

/// Words per L1 superblock.
const L1_WORDS: usize = 128;

/// Words per L2 block.
const L2_WORDS: usize = 8;

/// Compact two-level rank directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompactRank {
    /// Entry i = popcount of words [0, i * 128).
    l1: Vec<u32>,
    /// Entry j = popcount of words [(j / 16) * 128, j * 8).
    l2: Vec<u16>,
    /// Total popcount across all words.
    total: u32,
}

impl CompactRank {
    /// Build the directory for `words`.
    pub fn build(words: &[u64]) -> Self {
        let mut l1 = Vec::with_capacity(words.len().div_ceil(L1_WORDS));
        let mut l2 = Vec::with_capacity(words.len().div_ceil(L2_WORDS));
        let mut absolute: u32 = 0;

        for superblock in words.chunks(L1_WORDS) {
            l1.push(absolute);
            let mut relative: u16 = 0;
            for block in superblock.chunks(L2_WORDS) {
                l2.push(relative);
                let ones: u32 = block.iter().map(|w| w.count_ones()).sum();
                relative += ones as u16;
                absolute += ones;
            }
        }

        Self {
            l1,
            l2,
            total: absolute,
        }
    }

    /// Number of 1-bits in `words[0..word_idx]`.
    ///
    /// `words` must be the slice passed to [`build`](Self::build). Indices
    /// past the end return the total popcount.
    #[inline]
    pub fn rank_before_word(&self, words: &[u64], word_idx: usize) -> usize {
        if word_idx >= words.len() {
            return self.total as usize;
        }
        let block_idx = word_idx / L2_WORDS;
        let base = self.l1[word_idx / L1_WORDS] as usize + self.l2[block_idx] as usize;
        let partial: u32 = words[block_idx * L2_WORDS..word_idx]
            .iter()
            .map(|w| w.count_ones())
            .sum();
        base + partial as usize
    }

    /// Total number of 1-bits.
    #[inline]
    pub fn ones(&self) -> usize {
        self.total as usize
    }

    /// Find the word holding the k-th (1-indexed) 1-bit, searching
    /// `words[lo..hi]`.
    ///
    /// Returns the word index and the number of ones before it. The caller
    /// guarantees the k-th one lies inside the range.
    pub fn locate_one(&self, words: &[u64], k: usize, lo: usize, hi: usize) -> (usize, usize) {
        self.locate(lo, hi, k, |w| self.rank_before_word(words, w))
    }

    /// Find the word holding the k-th (1-indexed) 0-bit, searching
    /// `words[lo..hi]`.
    ///
    /// Padding bits of the last word count as zeros here; the caller rejects
    /// positions past the logical length.
    pub fn locate_zero(&self, words: &[u64], k: usize, lo: usize, hi: usize) -> (usize, usize) {
        self.locate(lo, hi, k, |w| w * 64 - self.rank_before_word(words, w))
    }

    /// Largest word `w` in `[lo, hi)` whose prefix count is below `k`.
    fn locate<F>(&self, mut lo: usize, mut hi: usize, k: usize, count_before: F) -> (usize, usize)
    where
        F: Fn(usize) -> usize,
    {
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if count_before(mid) < k {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo, count_before(lo))
    }

    /// Returns the heap memory usage in bytes.
    pub fn heap_size(&self) -> usize {
        self.l1.len() * 4 + self.l2.len() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_prefix(words: &[u64]) -> Vec<usize> {
        let mut out = vec![0];
        let mut cum = 0;
        for w in words {
            cum += w.count_ones() as usize;
            out.push(cum);
        }
        out
    }

    #[test]
    fn test_empty_directory() {
        let cr = CompactRank::build(&[]);
        assert_eq!(cr.rank_before_word(&[], 0), 0);
        assert_eq!(cr.ones(), 0);
        assert_eq!(cr.heap_size(), 0);
    }

    #[test]
    fn test_matches_prefix_sums_across_superblocks() {
        let words: Vec<u64> = (0..300u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .collect();
        let cr = CompactRank::build(&words);
        let naive = naive_prefix(&words);
        for (w, &expected) in naive.iter().enumerate() {
            assert_eq!(cr.rank_before_word(&words, w), expected, "word {}", w);
        }
        assert_eq!(cr.ones(), naive[words.len()]);
    }

    #[test]
    fn test_locate_one_finds_word() {
        // One bit per word: the k-th one sits in word k-1.
        let words = vec![1u64; 200];
        let cr = CompactRank::build(&words);
        for k in [1, 2, 64, 129, 200] {
            assert_eq!(cr.locate_one(&words, k, 0, words.len()), (k - 1, k - 1));
        }
    }

    #[test]
    fn test_locate_zero_finds_word() {
        // 63 zeros per word.
        let words = vec![1u64; 20];
        let cr = CompactRank::build(&words);
        assert_eq!(cr.locate_zero(&words, 1, 0, 20), (0, 0));
        assert_eq!(cr.locate_zero(&words, 63, 0, 20), (0, 0));
        assert_eq!(cr.locate_zero(&words, 64, 0, 20), (1, 63));
        assert_eq!(cr.locate_zero(&words, 63 * 20, 0, 20), (19, 63 * 19));
    }

    #[test]
    fn test_overhead() {
        let words: Vec<u64> = vec![0; 1024];
        let cr = CompactRank::build(&words);
        let overhead_pct = (cr.heap_size() as f64 / (words.len() * 8) as f64) * 100.0;
        assert!(overhead_pct < 5.0, "overhead {:.1}%", overhead_pct);
    }
}
