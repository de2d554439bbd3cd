// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `webdex` CLI: a harness for exercising the indexing engine end to end.
//!
//! ```bash
//! # Feed a directory of PageDocument JSON records to the indexer
//! webdex ingest --input ./docs --index ./index
//!
//! # Look up a keyword
//! webdex search --index ./index "test"
//!
//! # Force a PageRank recomputation and show the top pages
//! webdex rank --index ./index --iterations 100 --damping 0.8
//! ```
//!
//! This binary stands in for the out-of-scope message-broker consumer and
//! CLI search tool. It is a harness over the core engine, not a
//! reimplementation of either collaborator.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use webdex::{Indexer, IndexerConfig, PageDocument};

#[derive(Parser)]
#[command(name = "webdex", about = "Inverted-index search engine with PageRank-style ranking", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a directory of PageDocument JSON records into an index
    Ingest {
        /// Directory of `.json`/`.jsonl` files, each holding one or more PageDocuments
        #[arg(short, long)]
        input: PathBuf,

        /// Index directory (created if missing)
        #[arg(short = 'x', long, default_value = "index")]
        index: PathBuf,
    },

    /// Look up a keyword and print matching pages in rank order
    Search {
        /// Index directory
        #[arg(short = 'x', long, default_value = "index")]
        index: PathBuf,

        /// Keyword to search for
        keyword: String,
    },

    /// Force a PageRank recomputation and report the top pages
    Rank {
        /// Index directory
        #[arg(short = 'x', long, default_value = "index")]
        index: PathBuf,

        /// Override the configured iteration count
        #[arg(long)]
        iterations: Option<usize>,

        /// Override the configured damping factor
        #[arg(long)]
        damping: Option<f64>,

        /// How many top-scoring pages to report
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest { input, index } => run_ingest(&input, &index),
        Commands::Search { index, keyword } => run_search(&index, &keyword),
        Commands::Rank { index, iterations, damping, top } => run_rank(&index, iterations, damping, top),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Parse the `PageDocument`s out of a single file: one object per line for
/// `.jsonl`/`.ndjson`, one array or one bare object for `.json`.
fn parse_file(path: &Path) -> anyhow::Result<Vec<PageDocument>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let contents = fs::read_to_string(path)?;
    let mut docs = Vec::new();
    match ext {
        "jsonl" | "ndjson" => {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                docs.push(serde_json::from_str(line)?);
            }
        }
        "json" => {
            let trimmed = contents.trim_start();
            if trimmed.starts_with('[') {
                docs.extend(serde_json::from_str::<Vec<PageDocument>>(&contents)?);
            } else {
                docs.push(serde_json::from_str(&contents)?);
            }
        }
        _ => {}
    }
    Ok(docs)
}

fn input_files(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();
    Ok(entries)
}

/// Load every `PageDocument` under `input`, fanning the per-file parsing out
/// across `rayon`'s pool when the `parallel` feature is enabled. This is the
/// parsing step only; `Indexer::index` itself is still called once per
/// document, in file order, from a single thread (indexing is not
/// parallel-safe).
#[cfg(feature = "parallel")]
fn load_documents(input: &Path) -> anyhow::Result<Vec<PageDocument>> {
    use rayon::prelude::*;
    let files = input_files(input)?;
    let per_file: Vec<Vec<PageDocument>> = files.par_iter().map(|p| parse_file(p)).collect::<anyhow::Result<_>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

#[cfg(not(feature = "parallel"))]
fn load_documents(input: &Path) -> anyhow::Result<Vec<PageDocument>> {
    let files = input_files(input)?;
    let mut docs = Vec::new();
    for path in files {
        docs.extend(parse_file(&path)?);
    }
    Ok(docs)
}

#[cfg(feature = "parallel")]
fn progress_bar(len: u64, prefix: &'static str) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("━━╸"),
    );
    pb.set_prefix(prefix);
    pb
}

fn run_ingest(input: &Path, index: &Path) -> anyhow::Result<()> {
    let docs = load_documents(input)?;
    if docs.is_empty() {
        eprintln!("no PageDocument records found under {}", input.display());
        return Ok(());
    }

    let config = IndexerConfig::load(index)?;
    let mut indexer = Indexer::load(config)?;

    #[cfg(feature = "parallel")]
    let pb = progress_bar(docs.len() as u64, "Ingest");

    for doc in &docs {
        indexer.index(doc)?;
        #[cfg(feature = "parallel")]
        pb.inc(1);
    }

    #[cfg(feature = "parallel")]
    pb.finish_with_message("done");

    indexer.close()?;
    eprintln!("indexed {} document(s) into {}", docs.len(), index.display());
    Ok(())
}

fn run_search(index: &Path, keyword: &str) -> anyhow::Result<()> {
    let config = IndexerConfig::load(index)?;
    let mut indexer = Indexer::load(config)?;

    let results = indexer.search_by_keywords(keyword)?;
    indexer.close()?;

    if results.is_empty() {
        eprintln!("no matches for {keyword:?}");
        return Ok(());
    }
    for (page_id, score) in results {
        println!("{}\t{:.6}", u32::from(page_id), score);
    }
    Ok(())
}

fn run_rank(index: &Path, iterations: Option<usize>, damping: Option<f64>, top: usize) -> anyhow::Result<()> {
    let mut config = IndexerConfig::load(index)?;
    if let Some(iterations) = iterations {
        config.page_rank_iteration = iterations;
    }
    if let Some(damping) = damping {
        config.dampener = damping;
    }

    let mut indexer = Indexer::load(config)?;
    let mut scored = indexer.rank_all_pages()?;
    indexer.close()?;

    scored.truncate(top);
    for (page_id, url, score) in scored {
        println!("{}\t{:.6}\t{}", u32::from(page_id), score, url);
    }
    Ok(())
}
