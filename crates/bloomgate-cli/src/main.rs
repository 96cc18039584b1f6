//! Word-list driver for the bloomgate filter.
//!
//! Loads a word list, inserts the first `--keys` words into a filter sized
//! for them, verifies that none of them went missing, then probes the next
//! `--keys` never-inserted words and reports the projected vs. empirical
//! false-positive rate.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bloomgate::{BloomFilter, Metrics, MetricsSnapshot};

/// Bloom filter accuracy driver
#[derive(Parser, Debug)]
#[command(name = "bloomgate")]
#[command(about = "Measure projected vs. empirical false-positive rates over a word list")]
struct Args {
    /// Word list file, one key per line; needs at least 2 * keys lines
    #[arg(default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// Number of words to insert (and to probe afterwards)
    #[arg(short, long, default_value = "100000")]
    keys: usize,

    /// Number of hash functions per operation
    #[arg(long, default_value = "4")]
    hashes: u32,

    /// Target false-positive rate, strictly between 0 and 1
    #[arg(long, default_value = "0.05")]
    fpr: f64,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

/// Outcome of one driver run.
#[derive(Debug, Serialize)]
struct Report {
    keys: usize,
    hash_count: u32,
    capacity_bits: usize,
    bits_set: usize,
    missing: usize,
    projected_rate: f64,
    empirical_rate: f64,
    metrics: MetricsSnapshot,
}

fn load_words(path: &PathBuf, needed: usize) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("failed to open word list {}", path.display()))?;
    let words = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    ensure!(
        words.len() >= needed,
        "word list {} has {} lines, need at least {}",
        path.display(),
        words.len(),
        needed
    );
    Ok(words)
}

fn run(args: &Args) -> Result<Report> {
    let words = load_words(&args.wordlist, args.keys * 2)?;
    let metrics = Metrics::new();

    let mut filter = BloomFilter::new(args.keys, args.hashes, args.fpr)
        .context("invalid filter parameters")?;
    metrics.record_filter_created(filter.capacity_bits());
    info!(
        capacity_bits = filter.capacity_bits(),
        hash_count = filter.hash_count(),
        "filter created"
    );

    for word in &words[..args.keys] {
        filter.insert(word.as_bytes());
        metrics.record_insert();
    }
    info!(inserted = args.keys, bits_set = filter.bits_set(), "insert phase done");

    // Re-check the inserted words; anything missing is a false negative and
    // a hard bug in the filter.
    let mut missing = 0;
    for word in &words[..args.keys] {
        let found = filter.contains(word.as_bytes());
        metrics.record_lookup(found);
        if !found {
            missing += 1;
        }
    }

    // Probe the next block of words, none of which were inserted; every hit
    // is a false positive.
    let mut false_positives = 0;
    for word in &words[args.keys..args.keys * 2] {
        let found = filter.contains(word.as_bytes());
        metrics.record_lookup(found);
        if found {
            false_positives += 1;
        }
    }

    Ok(Report {
        keys: args.keys,
        hash_count: filter.hash_count(),
        capacity_bits: filter.capacity_bits(),
        bits_set: filter.bits_set(),
        missing,
        projected_rate: filter.false_positive_rate(),
        empirical_rate: false_positives as f64 / args.keys as f64,
        metrics: metrics.snapshot(),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let report = run(&args)?;

    if report.missing > 0 {
        eprintln!(
            "BUG: {} inserted words were reported absent (false negatives)",
            report.missing
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("filter: {} bits, {} hash functions", report.capacity_bits, report.hash_count);
        println!("inserted {} words, {} bits set", report.keys, report.bits_set);
        println!("words missing               = {}", report.missing);
        println!("projected false positive rate = {:.6}", report.projected_rate);
        println!("actual false positive rate    = {:.6}", report.empirical_rate);
    }

    Ok(())
}
