//! Word lists: seeded random generation and newline-separated input.

use anyhow::{ensure, Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Generate `count` lowercase ASCII words with lengths in
/// `min_len..=max_len`. The same seed always yields the same list.
pub fn generate_words(
    count: usize,
    min_len: usize,
    max_len: usize,
    seed: u64,
) -> Result<Vec<String>> {
    ensure!(min_len >= 1, "minimum word length must be at least 1");
    ensure!(
        min_len <= max_len,
        "minimum word length {} exceeds maximum {}",
        min_len,
        max_len
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect())
}

/// Read one word per line from `path`, or stdin when `None`.
///
/// Surrounding whitespace is trimmed and blank lines are dropped.
pub fn load_words(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open word list {}", path.display()))?;
            read_words(file).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => read_words(io::stdin().lock()).context("Failed to read words from stdin"),
    }
}

fn read_words<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
