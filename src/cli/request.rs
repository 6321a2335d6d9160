use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use ghget::repo::RepoId;

use crate::util::DEFAULT_ARTIFACT_NAME;

use super::Cli;

/**
    The parsed configuration for one download, built once from the
    command line and passed through the workflow unchanged.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub repo: RepoId,
    pub artifact: String,
    pub tag: Option<String>,
    pub latest: bool,
    pub quiet: bool,
}

impl Request {
    pub fn try_from_cli(cli: Cli) -> Result<Self> {
        Self::from_positionals(&cli.args, cli.latest, cli.quiet)
    }

    /*
        Positionals are consumed greedily, in order: the first token is
        the owner (or `owner/repo` if it contains a separator), the second
        fills the repository name if still unset, the third the artifact,
        and the fourth the tag.
    */
    fn from_positionals(positionals: &[String], latest: bool, quiet: bool) -> Result<Self> {
        let mut owner: Option<&str> = None;
        let mut repo_name: Option<&str> = None;
        let mut artifact: Option<&str> = None;
        let mut tag: Option<&str> = None;

        for arg in positionals {
            let arg = arg.as_str();
            if owner.is_none() {
                match arg.split_once('/') {
                    Some((before, after)) => {
                        owner = Some(before);
                        repo_name = Some(after);
                    }
                    None => owner = Some(arg),
                }
            } else if repo_name.is_none() {
                repo_name = Some(arg);
            } else if artifact.is_none() {
                artifact = Some(arg);
            } else if tag.is_none() {
                tag = Some(arg);
            } else {
                bail!("unexpected extra argument '{arg}'");
            }
        }

        let Some(owner) = owner else {
            bail!("missing repository owner");
        };
        let Some(repo_name) = repo_name else {
            bail!("missing repository name");
        };

        let repo = RepoId::new(owner, repo_name)?;

        Ok(Self {
            repo,
            artifact: artifact.unwrap_or(DEFAULT_ARTIFACT_NAME).to_string(),
            tag: tag.map(ToString::to_string),
            latest,
            quiet,
        })
    }

    /**
        The tag the release should be resolved from, or `None`
        if the latest release should be resolved instead.
    */
    #[must_use]
    pub fn release_tag(&self) -> Option<&str> {
        if self.latest { None } else { self.tag.as_deref() }
    }
}

/*
    Downloads always land in the current working directory, named after
    the asset. Asset names are expected to be plain file names - taking
    the base name guards against separators sneaking into the path.
*/
pub(super) fn destination_path(asset_name: &str) -> Result<PathBuf> {
    Path::new(asset_name)
        .file_name()
        .map(PathBuf::from)
        .with_context(|| format!("asset name '{asset_name}' has no usable file name"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn request_from(args: &[&str]) -> Result<Request> {
        let cli = Cli::try_parse_from(std::iter::once("ghget").chain(args.iter().copied())).unwrap();
        Request::try_from_cli(cli)
    }

    #[test]
    fn slash_form_with_artifact_and_quiet() {
        let request = request_from(&["ownerX/repoY", "asset.jar", "-q"]).unwrap();
        assert_eq!(request.repo, RepoId::new("ownerX", "repoY").unwrap());
        assert_eq!(request.artifact, "asset.jar");
        assert_eq!(request.tag, None);
        assert!(request.quiet);
        assert!(!request.latest);
    }

    #[test]
    fn split_form_fills_all_positions() {
        let request = request_from(&["owner", "repo", "tool.zip", "v2.0.0"]).unwrap();
        assert_eq!(request.repo, RepoId::new("owner", "repo").unwrap());
        assert_eq!(request.artifact, "tool.zip");
        assert_eq!(request.tag.as_deref(), Some("v2.0.0"));
    }

    #[test]
    fn slash_form_shifts_later_positions() {
        // With `owner/repo` as the first token, the second token
        // is already the artifact and the third is the tag
        let request = request_from(&["owner/repo", "tool.zip", "v2.0.0"]).unwrap();
        assert_eq!(request.artifact, "tool.zip");
        assert_eq!(request.tag.as_deref(), Some("v2.0.0"));
    }

    #[test]
    fn missing_artifact_uses_default() {
        let request = request_from(&["owner/repo"]).unwrap();
        assert_eq!(request.artifact, DEFAULT_ARTIFACT_NAME);
    }

    #[test]
    fn missing_repo_name_is_an_error() {
        assert!(request_from(&["owner"]).is_err());
    }

    #[test]
    fn invalid_repo_id_is_an_error() {
        assert!(request_from(&["owner/repo/extra"]).is_err());
        assert!(request_from(&["owner", " "]).is_err());
    }

    #[test]
    fn too_many_positionals_is_an_error() {
        assert!(request_from(&["owner", "repo", "a.jar", "v1", "extra"]).is_err());
        assert!(request_from(&["owner/repo", "a.jar", "v1", "extra"]).is_err());
    }

    #[test]
    fn latest_flag_overrides_tag() {
        let request = request_from(&["-l", "owner/repo", "a.jar", "v1.0.0"]).unwrap();
        assert!(request.latest);
        assert_eq!(request.tag.as_deref(), Some("v1.0.0"));
        assert_eq!(request.release_tag(), None);
    }

    #[test]
    fn tag_is_honored_without_latest() {
        let request = request_from(&["owner/repo", "a.jar", "v1.0.0"]).unwrap();
        assert_eq!(request.release_tag(), Some("v1.0.0"));
    }

    #[test]
    fn destination_is_base_file_name() {
        assert_eq!(destination_path("a.jar").unwrap(), PathBuf::from("a.jar"));
        assert_eq!(
            destination_path("dir/a.jar").unwrap(),
            PathBuf::from("a.jar")
        );
        assert!(destination_path("..").is_err());
        assert!(destination_path("").is_err());
    }
}
