use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub fn new_spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner()
        .with_message(message.into())
        .with_style(ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
