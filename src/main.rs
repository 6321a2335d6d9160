use std::process::exit;

use clap::Parser;
use tracing::error;

mod cli;
mod util;

use cli::Cli;

#[tokio::main]
async fn main() {
    util::init_tracing();

    let result = tokio::select! {
        result = Cli::parse().run() => result,
        // A user-initiated interrupt is not an error - exit silently.
        _ = tokio::signal::ctrl_c() => Ok(()),
    };

    if let Err(e) = result {
        // NOTE: We use tracing for errors here for consistent
        // output between returned errors, and errors that
        // may be logged while the program is running.
        error!("{e:#}");
        exit(1);
    }
}
