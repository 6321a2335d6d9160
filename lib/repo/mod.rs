mod id;

pub use self::id::{RepoId, RepoIdParseError};
