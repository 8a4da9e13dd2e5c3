use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};
use wordrank_core::SearchEngine;

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Load a document corpus offline and inspect or query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory of documents to index (repeatable)
    #[arg(
        long = "corpus",
        env = "CORPUS_DIRS",
        value_delimiter = ',',
        default_values = ["wikipedia/Words/Games", "wikipedia/Words/Programming"]
    )]
    corpus: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the corpus and print document and term counts
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Run one query and print the ranked results as JSON
    Query {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Query text
        query: String,
        /// Print at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Serialize)]
struct Stats {
    num_docs: usize,
    num_terms: usize,
    total_tokens: usize,
    avg_doc_len: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { corpus } => stats(&corpus.corpus),
        Commands::Query { corpus, query, limit } => run_query(&corpus.corpus, &query, limit),
    }
}

fn stats(dirs: &[PathBuf]) -> Result<()> {
    let engine = SearchEngine::load(dirs)?;
    let corpus = engine.corpus();
    let total_tokens = corpus.total_terms();
    let stats = Stats {
        num_docs: corpus.len(),
        num_terms: engine.dictionary().len(),
        total_tokens,
        avg_doc_len: total_tokens as f64 / corpus.len().max(1) as f64,
    };
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn run_query(dirs: &[PathBuf], query: &str, limit: Option<usize>) -> Result<()> {
    let engine = SearchEngine::load(dirs)?;
    let mut results = engine.query(query);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    tracing::info!(hits = results.len(), "query complete");
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
