mod client;

pub mod github;

pub use self::github::GithubProvider;
