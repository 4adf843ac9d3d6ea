//! CLI commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use ytsum_client::{submit, SubmitOutcome, SummarizeClient, SummarizeClientConfig};
use ytsum_engine::{Summarizer, VideoSummarizer};
use ytsum_models::extract_video_id;

use crate::surface::TerminalSurface;

/// Top-level CLI for the ytsum summarizer.
#[derive(Debug, Parser)]
#[command(name = "ytsum")]
#[command(about = "Summarize YouTube videos into bullet points", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a video directly (transcript + Gemini, no server).
    Summarize {
        /// YouTube video URL.
        url: String,
    },

    /// Submit a video to a running summarization service and show the result.
    Remote {
        /// YouTube video URL.
        url: String,

        /// Base URL of the summarization service.
        #[arg(long, default_value = "http://localhost:8000")]
        endpoint: String,

        /// Write the rendered HTML to this file instead of stdout.
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Summarize { url } => run_direct(&url).await,
            Command::Remote {
                url,
                endpoint,
                html,
            } => run_remote(&url, endpoint, html).await,
        }
    }
}

async fn run_direct(url: &str) -> Result<()> {
    let id = match extract_video_id(url) {
        Ok(Some(id)) if !id.is_empty() => id,
        _ => bail!("not a recognized YouTube URL: {url}"),
    };

    tracing::debug!(video = %id, "summarizing directly");
    let summarizer = VideoSummarizer::from_env()?;
    let summary = summarizer.summarize(&id).await?;
    println!("{summary}");
    Ok(())
}

async fn run_remote(url: &str, endpoint: String, html: Option<PathBuf>) -> Result<()> {
    let client = SummarizeClient::new(SummarizeClientConfig { base_url: endpoint })?;
    let surface = TerminalSurface::new(html);

    // The surface has already shown whatever there is to show; the exit
    // code reflects whether a result (even a server-reported one) arrived.
    match submit(url, &client, &surface).await {
        SubmitOutcome::Summary { .. } | SubmitOutcome::ServerError { .. } => Ok(()),
        SubmitOutcome::InputError(_) => bail!("input rejected"),
        SubmitOutcome::RequestError => bail!("request failed"),
    }
}
