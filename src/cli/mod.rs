use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use console::style;

use ghget::sources::GithubProvider;

use crate::util::new_spinner;

mod request;

pub use self::request::Request;

use self::request::destination_path;

/// Downloads a named asset from a GitHub release.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Always resolve the latest release, ignoring any explicit tag.
    #[arg(short, long)]
    pub latest: bool,

    #[arg(short = '?', action = ArgAction::HelpShort, hide = true)]
    help_alias: Option<bool>,

    /// Positional arguments: <owner[/repo]> [repo] [artifact] [tag]
    #[arg(value_name = "ARG", required = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let request = Request::try_from_cli(self)?;
        download(&request).await
    }
}

/*
    The whole workflow is strictly sequential: resolve the release
    metadata, locate the asset, stream it to disk.
*/
async fn download(request: &Request) -> Result<()> {
    let provider = GithubProvider::new().context("Failed to create GitHub API client")?;

    let spinner = (!request.quiet)
        .then(|| new_spinner(format!("Fetching release metadata for {}", request.repo)));

    let started = Instant::now();

    let release = match request.release_tag() {
        Some(tag) => provider.get_release_for_tag(&request.repo, tag).await,
        None => provider.get_latest_release(&request.repo).await,
    }
    .with_context(|| format!("Failed to resolve release for {}", request.repo))?;

    let asset = release
        .find_asset(&request.artifact)
        .with_context(|| format!("Failed to locate asset in release '{}'", release.tag_name))?;

    if let Some(spinner) = &spinner {
        spinner.set_message(format!("Downloading {}", asset.name));
    }

    let destination = destination_path(&asset.name)?;
    let written = provider
        .download_asset_to_file(&asset.browser_download_url, &destination)
        .await
        .with_context(|| format!("Failed to download asset '{}'", asset.name))?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
        println!(
            "Downloaded {} ({written} bytes, release {}) in {:.3}s",
            style(&asset.name).bold().magenta(),
            style(&release.tag_name).bold(),
            started.elapsed().as_secs_f64(),
        );
    }

    Ok(())
}
