//! CLI entry point: parses arguments, builds a [`DownloadRequest`], runs
//! one download, and reports the outcome.
//!
//! All error formatting and the process exit status live here; the
//! library never terminates the process itself.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use git_file_downloader::fetch::{BasicClient, Downloaded, download};
use git_file_downloader::request::{DownloadRequest, Provider};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "git-file-downloader", version)]
#[command(about = "Download a raw file from GitHub or GitLab", long_about = None)]
struct Cli {
    /// Repository identifier, e.g. "owner/name"
    #[arg(value_name = "REPOSITORY")]
    repository: String,

    /// File to download, relative to the repository root
    #[arg(value_name = "FILE")]
    file: String,

    /// Git provider: "github" or "gitlab"
    #[arg(short, long, default_value = "github")]
    provider: Provider,

    /// Branch name
    #[arg(short, long, default_value = "master")]
    branch: String,

    /// Output directory. When omitted, the file content is printed to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the original repository path inside the output directory instead
    /// of placing the single file directly in it
    #[arg(short, long)]
    keep_original_path: bool,

    /// GitHub Basic Auth username
    #[arg(long, value_name = "USERNAME")]
    github_basic_username: Option<String>,

    /// GitHub Basic Auth password
    #[arg(long, value_name = "PASSWORD")]
    github_basic_password: Option<String>,

    /// GitHub OAuth2 token
    #[arg(long, value_name = "TOKEN")]
    github_oauth_token: Option<String>,

    /// GitLab private token
    #[arg(long, value_name = "TOKEN")]
    gitlab_private_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging setup: colored stderr, filterable via RUST_LOG
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    let request = DownloadRequest {
        provider: cli.provider,
        repository: cli.repository,
        branch: cli.branch,
        file: cli.file,
        output: cli.output,
        keep_original_path: cli.keep_original_path,
        oauth2_token: cli.github_oauth_token,
        basic_username: cli.github_basic_username,
        basic_password: cli.github_basic_password,
        private_token: cli.gitlab_private_token,
    };

    let client = BasicClient::new()?;

    match download(&client, &request).await? {
        Downloaded::Content(text) => print!("{text}"),
        Downloaded::Written(path) => info!(path = %path.display(), "Download complete"),
    }

    Ok(())
}
