use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::repo::RepoId;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("no latest release was found for repository '{0}'")]
    LatestReleaseNotFound(RepoId),
    #[error("no release with tag '{tag}' was found for repository '{repo}'")]
    ReleaseNotFound { repo: RepoId, tag: String },
    #[error("GitHub API HTTP {status} for '{url}'")]
    Api { status: StatusCode, url: String },
    #[error("failed to decode release metadata: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no asset named '{name}' in release '{tag}'")]
    AssetNotFound { name: String, tag: String },
    #[error("failed to write '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),
    #[error("transport error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

pub type GithubResult<T> = Result<T, GithubError>;
