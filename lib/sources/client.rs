use std::time::Duration;

use reqwest::{
    Client, Error,
    header::{HeaderMap, USER_AGENT},
};

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/**
    Creates a client with:

    - HTTPS only
    - Timeouts for connection and response
    - All common compression algorithms enabled
    - Tracing of HTTP requests
    - User agent set to `<crate_name>/<crate_version> (<repository_url>)`

    Requests are never retried - a failed request is
    terminal for the invocation that issued it.
*/
pub fn create_client(mut default_headers: HeaderMap) -> Result<ClientWithMiddleware, Error> {
    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY"),
    );

    default_headers.insert(USER_AGENT, user_agent.parse().unwrap());

    let client = Client::builder()
        .default_headers(default_headers)
        .https_only(true)
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(60))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .build())
}
