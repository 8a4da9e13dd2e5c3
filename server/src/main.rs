use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use wordrank_server::{build_app, ServerConfig, DEFAULT_MAX_QUERY_TERMS};
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Directory of documents to index (repeatable)
    #[arg(
        long = "corpus",
        env = "CORPUS_DIRS",
        value_delimiter = ',',
        default_values = ["wikipedia/Words/Games", "wikipedia/Words/Programming"]
    )]
    corpus: Vec<PathBuf>,
    /// Host to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = 3030)]
    port: u16,
    /// Reject queries with more whitespace-separated words than this
    #[arg(long, env = "MAX_QUERY_TERMS", default_value_t = DEFAULT_MAX_QUERY_TERMS)]
    max_query_terms: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = ServerConfig { corpus_dirs: args.corpus, max_query_terms: args.max_query_terms };
    let app: Router = build_app(&config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
