use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod surface;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = Cli::parse().run().await {
        eprintln!("ytsum error: {err:#}");
        std::process::exit(1);
    }
}
