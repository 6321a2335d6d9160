mod constants;
mod progress;
mod tracing;

pub use self::constants::DEFAULT_ARTIFACT_NAME;
pub use self::progress::new_spinner;
pub use self::tracing::init as init_tracing;
