#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::{debug, instrument};
use url::Url;

use reqwest::{
    Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};

use crate::repo::RepoId;

use super::client::create_client;

const BASE_URL: &str = "https://api.github.com";

pub mod models;
mod result;

use self::models::GithubRelease;

pub use self::result::{GithubError, GithubResult};

#[derive(Debug, Clone)]
pub struct GithubProvider {
    client: ClientWithMiddleware,
}

impl GithubProvider {
    /**
        Creates a new GitHub source instance.

        No authentication is performed or supported - all
        requests go to the public, unauthenticated API.

        # Errors

        - If the GitHub API client could not be created.
    */
    pub fn new() -> GithubResult<Self> {
        let headers = {
            let mut headers = HeaderMap::new();
            headers.insert(
                HeaderName::from_static("x-github-api-version"),
                HeaderValue::from_static("2022-11-28"),
            );
            headers
        };

        let client = create_client(headers)?;

        Ok(Self { client })
    }

    async fn get_response(&self, url: &str, accept: &'static str) -> GithubResult<Response> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(accept))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(GithubError::Api {
                status,
                url: url.to_string(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GithubResult<T> {
        let response = self
            .get_response(url, "application/vnd.github.v3+json")
            .await?;
        // Decoded here rather than with the json helper on the response, so
        // that a malformed body surfaces as a decoding error and not as a
        // generic request error.
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /**
        Fetches the latest published release for the given repository.
    */
    #[instrument(skip(self), fields(%repo), level = "debug")]
    pub async fn get_latest_release(&self, repo: &RepoId) -> GithubResult<GithubRelease> {
        debug!(id = %repo, "fetching latest release");

        let url = format!(
            "{BASE_URL}/repos/{owner}/{name}/releases/latest",
            owner = repo.owner(),
            name = repo.name(),
        );

        match self.get_json(&url).await {
            Err(e) if is_404(&e) => Err(GithubError::LatestReleaseNotFound(repo.clone())),
            result => result,
        }
    }

    /**
        Fetches the release with the given tag for the given repository.

        The tag is looked up exactly as given - no prefix guessing.
    */
    #[instrument(skip(self), fields(%repo), level = "debug")]
    pub async fn get_release_for_tag(
        &self,
        repo: &RepoId,
        tag: &str,
    ) -> GithubResult<GithubRelease> {
        debug!(id = %repo, tag, "fetching release by tag");

        let url = format!(
            "{BASE_URL}/repos/{owner}/{name}/releases/tags/{tag}",
            owner = repo.owner(),
            name = repo.name(),
        );

        match self.get_json(&url).await {
            Err(e) if is_404(&e) => Err(GithubError::ReleaseNotFound {
                repo: repo.clone(),
                tag: tag.to_string(),
            }),
            result => result,
        }
    }

    /**
        Downloads the file at the given URL to the given destination path,
        creating or truncating the destination file, and returns the
        number of bytes written.

        A download that fails midway leaves a partial file at the
        destination - nothing is cleaned up or resumed.
    */
    #[instrument(skip(self), level = "debug")]
    pub async fn download_asset_to_file(&self, url: &Url, path: &Path) -> GithubResult<u64> {
        debug!(%url, ?path, "downloading asset");

        let response = self
            .get_response(url.as_str(), "application/octet-stream")
            .await?;

        write_body_to_file(response, path).await
    }
}

/*
    Streams the response body into the file chunk by chunk - the full body
    is never buffered in memory. The file handle lives only for the
    duration of this call and is closed on every exit path.
*/
async fn write_body_to_file(mut response: Response, path: &Path) -> GithubResult<u64> {
    let fs_error = |source| GithubError::FileSystem {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).await.map_err(fs_error)?;

    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(fs_error)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(fs_error)?;

    Ok(written)
}

fn is_404(err: &GithubError) -> bool {
    if let GithubError::Api { status, .. } = err {
        return *status == StatusCode::NOT_FOUND;
    }
    false
}
