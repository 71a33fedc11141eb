// Runtime configuration read from the environment.
//
// Variables
// - COURSE_REGISTRATION_SEED: path to a JSON seed file. Unset means the built-in sample.
// - RUST_LOG: tracing filter directive. Defaults to "warn" so logs stay out of the prompt.

use std::path::PathBuf;

pub const SEED_PATH_VAR: &str = "COURSE_REGISTRATION_SEED";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_path: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            seed_path: non_empty(SEED_PATH_VAR).map(PathBuf::from),
            log_filter: non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
