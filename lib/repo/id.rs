use std::{fmt, str::FromStr};

use thiserror::Error;

/**
    Error type representing the possible errors that can occur when parsing a `RepoId`.
*/
#[derive(Debug, Error)]
pub enum RepoIdParseError {
    #[error("repository id is empty")]
    Empty,
    #[error("missing '/' separator")]
    MissingSeparator,
    #[error("owner '{0}' is empty or invalid")]
    InvalidOwner(String),
    #[error("name '{0}' is empty or invalid")]
    InvalidName(String),
}

/**
    A repository identifier, made up of the owner (user
    or organization) and the name of the repository.

    Uniquely identifies a repository on GitHub, but not any
    particular release of it.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /**
        Creates a new `RepoId` from parts that were supplied separately.

        Surrounding whitespace is trimmed from both parts.

        # Errors

        - If the owner or name is empty, whitespace-only, or contains a `/`.
    */
    pub fn new(owner: impl AsRef<str>, name: impl AsRef<str>) -> Result<Self, RepoIdParseError> {
        let owner = owner.as_ref().trim();
        let name = name.as_ref().trim();

        if is_invalid_part(owner) {
            return Err(RepoIdParseError::InvalidOwner(owner.to_string()));
        }
        if is_invalid_part(name) {
            return Err(RepoIdParseError::InvalidName(name.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = RepoIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RepoIdParseError::Empty);
        }

        let Some((owner, name)) = s.split_once('/') else {
            return Err(RepoIdParseError::MissingSeparator);
        };

        Self::new(owner, name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_invalid_part(s: &str) -> bool {
    s.is_empty() // Must not be empty
        || s.chars().all(char::is_whitespace) // Must contain some information
        || s.contains('/') // Must not contain the separator character
}
