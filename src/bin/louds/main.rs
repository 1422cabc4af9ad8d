//! LOUDS trie CLI: build tries from word lists, query them, and compare
//! against a hash-map trie.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use succinct_louds::{CompactBitVec, Config, DenseBitVec, RankSelect, SuccinctTrie};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod baseline;
mod words;

use baseline::HashTrie;
use words::{generate_words, load_words};

#[derive(Debug, Parser)]
#[command(name = "louds")]
#[command(about = "LOUDS-encoded trie toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Log construction events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a trie and print its size statistics
    Stats(StatsArgs),
    /// Look up exact words
    Search(SearchArgs),
    /// List words starting with a prefix
    Prefix(PrefixArgs),
    /// Compare the succinct trie against a hash-map trie on random words
    Bench(BenchArgs),
}

/// Where to read words from, and which bit vector to use
#[derive(Debug, Args)]
struct Source {
    /// Newline-separated word list (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use the sampled compact backend instead of dense tables
    #[arg(long)]
    compact: bool,

    /// Select sample rate for the compact backend
    #[arg(long, default_value = "256")]
    sample_rate: u32,
}

impl Source {
    fn config(&self) -> Config {
        Config::default().with_select_sample_rate(self.sample_rate)
    }
}

#[derive(Debug, Args)]
struct StatsArgs {
    #[command(flatten)]
    source: Source,

    /// Also print the LOUDS bit string
    #[arg(long)]
    bits: bool,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Words to look up
    #[arg(required = true)]
    words: Vec<String>,

    #[command(flatten)]
    source: Source,
}

#[derive(Debug, Args)]
struct PrefixArgs {
    /// Prefix to enumerate
    prefix: String,

    #[command(flatten)]
    source: Source,

    /// Stop after this many words
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Debug, Args)]
struct BenchArgs {
    /// Number of words to generate
    #[arg(short, long, default_value = "100000")]
    count: usize,

    /// Minimum word length
    #[arg(long, default_value = "3")]
    min_len: usize,

    /// Maximum word length
    #[arg(long, default_value = "12")]
    max_len: usize,

    /// Random seed for reproducible word lists
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of lookups per timed phase
    #[arg(short, long, default_value = "10000")]
    queries: usize,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Stats(args) => {
            let words = load_words(args.source.input.as_deref())?;
            let dense: SuccinctTrie<DenseBitVec> = SuccinctTrie::from_keys(&words);
            let compact: SuccinctTrie<CompactBitVec> =
                SuccinctTrie::from_keys_with_config(&words, &args.source.config());
            write_stats(&mut out, &dense, &compact, args.bits)?;
        }
        Command::Search(args) => {
            let keys = load_words(args.source.input.as_deref())?;
            if args.source.compact {
                let trie: SuccinctTrie<CompactBitVec> =
                    SuccinctTrie::from_keys_with_config(&keys, &args.source.config());
                write_search(&mut out, &trie, &args.words)?;
            } else {
                let trie: SuccinctTrie = SuccinctTrie::from_keys(&keys);
                write_search(&mut out, &trie, &args.words)?;
            }
        }
        Command::Prefix(args) => {
            let keys = load_words(args.source.input.as_deref())?;
            let limit = args.limit.unwrap_or(usize::MAX);
            if args.source.compact {
                let trie: SuccinctTrie<CompactBitVec> =
                    SuccinctTrie::from_keys_with_config(&keys, &args.source.config());
                write_prefix(&mut out, &trie, &args.prefix, limit)?;
            } else {
                let trie: SuccinctTrie = SuccinctTrie::from_keys(&keys);
                write_prefix(&mut out, &trie, &args.prefix, limit)?;
            }
        }
        Command::Bench(args) => run_bench(&mut out, &args)?,
    }

    out.flush()?;
    Ok(())
}

fn write_stats<W: Write>(
    out: &mut W,
    dense: &SuccinctTrie<DenseBitVec>,
    compact: &SuccinctTrie<CompactBitVec>,
    bits: bool,
) -> Result<()> {
    writeln!(out, "keys:          {}", dense.key_count())?;
    writeln!(out, "nodes:         {}", dense.node_count())?;
    writeln!(out, "bits:          {}", dense.bit_len())?;
    writeln!(out, "heap dense:    {} bytes", dense.heap_size())?;
    writeln!(out, "heap compact:  {} bytes", compact.heap_size())?;
    if bits {
        writeln!(out, "{}", dense.to_bit_string())?;
    }
    Ok(())
}

fn write_search<W: Write, B: RankSelect>(
    out: &mut W,
    trie: &SuccinctTrie<B>,
    queries: &[String],
) -> Result<()> {
    for word in queries {
        writeln!(out, "{}\t{}", word, trie.search(word))?;
    }
    Ok(())
}

fn write_prefix<W: Write, B: RankSelect>(
    out: &mut W,
    trie: &SuccinctTrie<B>,
    prefix: &str,
    limit: usize,
) -> Result<()> {
    for word in trie.iter_prefix(prefix).take(limit) {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn per_op(elapsed: Duration, ops: usize) -> f64 {
    elapsed.as_nanos() as f64 / ops.max(1) as f64
}

fn run_bench<W: Write>(out: &mut W, args: &BenchArgs) -> Result<()> {
    let words = generate_words(args.count, args.min_len, args.max_len, args.seed)?;
    // Half hits, half (mostly) misses from a different seed.
    let probes = generate_words(args.queries / 2, args.min_len, args.max_len, !args.seed)?;
    let queries: Vec<&str> = words
        .iter()
        .take(args.queries - probes.len())
        .chain(probes.iter())
        .map(String::as_str)
        .collect();
    let prefixes: Vec<&str> = queries
        .iter()
        .map(|q| &q[..q.len().min(args.min_len.max(2))])
        .collect();
    info!(words = words.len(), queries = queries.len(), "generated bench input");

    let (dense, dense_build): (SuccinctTrie<DenseBitVec>, _) =
        time(|| SuccinctTrie::from_keys(&words));
    let (compact, compact_build): (SuccinctTrie<CompactBitVec>, _) =
        time(|| SuccinctTrie::from_keys(&words));
    let (hash, hash_build) = time(|| {
        let mut trie = HashTrie::new();
        for word in &words {
            trie.insert(word);
        }
        trie
    });

    verify(&dense, &compact, &hash, &queries, &prefixes)?;

    writeln!(
        out,
        "{} words, {} trie nodes, {} queries",
        dense.key_count(),
        dense.node_count(),
        queries.len()
    )?;
    writeln!(
        out,
        "{:<10} {:>12} {:>14} {:>14} {:>14}",
        "trie", "build ms", "search ns/op", "prefix ns/op", "heap bytes"
    )?;

    let rows = [
        (
            "dense",
            dense_build,
            time(|| queries.iter().filter(|q| dense.search(q)).count()).1,
            time(|| prefixes.iter().filter(|p| dense.starts_with(p)).count()).1,
            dense.heap_size(),
        ),
        (
            "compact",
            compact_build,
            time(|| queries.iter().filter(|q| compact.search(q)).count()).1,
            time(|| prefixes.iter().filter(|p| compact.starts_with(p)).count()).1,
            compact.heap_size(),
        ),
        (
            "hashmap",
            hash_build,
            time(|| queries.iter().filter(|q| hash.search(q)).count()).1,
            time(|| prefixes.iter().filter(|p| hash.starts_with(p)).count()).1,
            hash.approx_heap_size(),
        ),
    ];
    for (name, build, search, prefix, heap) in rows {
        writeln!(
            out,
            "{:<10} {:>12.2} {:>14.1} {:>14.1} {:>14}",
            name,
            build.as_secs_f64() * 1e3,
            per_op(search, queries.len()),
            per_op(prefix, prefixes.len()),
            heap
        )?;
    }
    Ok(())
}

/// Fail if the three tries disagree on any sample query.
fn verify(
    dense: &SuccinctTrie<DenseBitVec>,
    compact: &SuccinctTrie<CompactBitVec>,
    hash: &HashTrie,
    queries: &[&str],
    prefixes: &[&str],
) -> Result<()> {
    if dense.node_count() != hash.node_count() {
        bail!(
            "node count mismatch: succinct {} vs hashmap {}",
            dense.node_count(),
            hash.node_count()
        );
    }
    for q in queries {
        let expected = hash.search(q);
        if dense.search(q) != expected || compact.search(q) != expected {
            bail!("search mismatch for {:?}", q);
        }
    }
    for p in prefixes.iter().take(100) {
        let expected = hash.words_with_prefix(p);
        let got = dense.words_with_prefix(p);
        if got != expected || compact.words_with_prefix(p) != expected {
            bail!("prefix mismatch for {:?}", p);
        }
    }
    Ok(())
}
